//! Article excerpts.

use crate::error::BundleError;
use crate::text::{Normalized, unquote};

/// An extracted span of an article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleExcerpt {
    /// The excerpt text, trimmed.
    pub content: String,
    /// Byte offset in the body where the span starts.
    pub start_index: usize,
    /// Byte offset in the body just past the span.
    pub end_index: usize,
}

/// Anchors for one excerpt; either may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExcerptRequest<'a> {
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
}

/// An excerpt plus the elided text around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledExcerpt {
    pub content: String,
    /// Text between the previous excerpt (or the start) and this one.
    pub collapsed_before: Option<String>,
    /// Text after the last excerpt; only set on the last one.
    pub collapsed_after: Option<String>,
}

/// Extracts the span of `body` bounded by the `from` and `to` anchors.
///
/// | Anchors | Span |
/// |---|---|
/// | neither | the whole body |
/// | `from` only | start of `from` to the end of the body |
/// | `to` only | start of the body to the end of `to` |
/// | both | start of `from` to the end of `to`, with `to` searched from the start of `from` onward |
///
/// An anchor that matches nowhere is [`BundleError::AnchorNotFound`]; one
/// that matches more than once is [`BundleError::AmbiguousAnchor`].
///
/// ```rust
/// use coursevault_bundle::extract_article_excerpt;
///
/// let body = "Intro. It was the best of times. It was the worst of times. Outro.";
/// let excerpt = extract_article_excerpt(body, Some("the best"), Some("worst of times.")).unwrap();
/// assert_eq!(excerpt.content, "the best of times. It was the worst of times.");
/// ```
pub fn extract_article_excerpt(
    body: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<ArticleExcerpt, BundleError> {
    let from = from.map(unquote).filter(|a| !a.is_empty());
    let to = to.map(unquote).filter(|a| !a.is_empty());
    let text = Normalized::new(body);

    let (start, search_from) = match from {
        Some(anchor) => {
            let needle = Normalized::new(anchor);
            let at = unique_match(&text, &needle, 0, anchor)?;
            (text.byte_start(at), at)
        }
        None => (0, 0),
    };

    let end = match to {
        Some(anchor) => {
            let needle = Normalized::new(anchor);
            let at = match (unique_match(&text, &needle, search_from, anchor), from) {
                (Err(BundleError::AnchorNotFound(_)), Some(from)) => {
                    return Err(BundleError::EndAnchorNotFound {
                        from: from.to_string(),
                        to: anchor.to_string(),
                    });
                }
                (result, _) => result?,
            };
            text.byte_end(at + needle.len() - 1)
        }
        None => body.len(),
    };

    Ok(ArticleExcerpt {
        content: body[start..end].trim().to_string(),
        start_index: start,
        end_index: end,
    })
}

fn unique_match(
    text: &Normalized,
    needle: &Normalized,
    from: usize,
    anchor: &str,
) -> Result<usize, BundleError> {
    match text.find_all(needle, from).as_slice() {
        [] => Err(BundleError::AnchorNotFound(anchor.to_string())),
        [single] => Ok(*single),
        many => Err(BundleError::AmbiguousAnchor {
            anchor: anchor.to_string(),
            count: many.len(),
        }),
    }
}

/// Extracts several excerpts from one article, with the text between them.
///
/// `collapsed_before` runs from the end of the previous successful excerpt
/// (or the start of the body) to the start of this one. The last successful
/// excerpt also gets `collapsed_after`, running to the end of the body.
/// Empty collapsed text is omitted. Failures are returned in place and do
/// not disturb their neighbours.
pub fn bundle_article_with_collapsed(
    body: &str,
    requests: &[ExcerptRequest<'_>],
) -> Vec<Result<BundledExcerpt, BundleError>> {
    let mut previous_end = 0;
    let mut tail = None;

    let mut results: Vec<Result<BundledExcerpt, BundleError>> = requests
        .iter()
        .enumerate()
        .map(|(idx, request)| {
            let excerpt = extract_article_excerpt(body, request.from, request.to)?;

            let collapsed_before = if excerpt.start_index >= previous_end {
                non_empty(&body[previous_end..excerpt.start_index])
            } else {
                None
            };
            previous_end = previous_end.max(excerpt.end_index);
            tail = Some((idx, excerpt.end_index));

            Ok(BundledExcerpt {
                content: excerpt.content,
                collapsed_before,
                collapsed_after: None,
            })
        })
        .collect();

    if let Some((idx, end)) = tail
        && let Some(Ok(last)) = results.get_mut(idx)
    {
        last.collapsed_after = non_empty(&body[end..]);
    }
    results
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
