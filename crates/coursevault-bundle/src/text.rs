//! Anchor search over article text.
//!
//! Anchors match case-insensitively, with typographic quotes folded to
//! straight ones and whitespace runs (including line breaks) treated as a
//! single space. Matching happens on a normalized copy of the text that
//! remembers where each character came from, so results are byte ranges in
//! the original.

/// Normalized text with a map back to byte offsets in the source.
#[derive(Debug, Clone)]
pub(crate) struct Normalized {
    chars: Vec<char>,
    /// Byte range in the source each normalized char came from.
    spans: Vec<(usize, usize)>,
}

impl Normalized {
    pub fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut spans: Vec<(usize, usize)> = Vec::with_capacity(text.len());
        let mut last_was_space = false;

        for (offset, c) in text.char_indices() {
            let end = offset + c.len_utf8();
            if c.is_whitespace() {
                if last_was_space {
                    if let Some(span) = spans.last_mut() {
                        span.1 = end;
                    }
                } else {
                    chars.push(' ');
                    spans.push((offset, end));
                }
                last_was_space = true;
                continue;
            }
            last_was_space = false;
            for folded in fold(c) {
                chars.push(folded);
                spans.push((offset, end));
            }
        }

        Self { chars, spans }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Start positions (normalized indices) of every match of `needle`
    /// at or after `from`. Overlapping matches count separately.
    pub fn find_all(&self, needle: &Normalized, from: usize) -> Vec<usize> {
        let n = needle.chars.len();
        if n == 0 || n > self.chars.len() {
            return Vec::new();
        }
        (from..=self.chars.len() - n)
            .filter(|&i| self.chars[i..i + n] == needle.chars[..])
            .collect()
    }

    /// Source byte offset where normalized char `idx` starts.
    pub fn byte_start(&self, idx: usize) -> usize {
        self.spans.get(idx).map_or_else(|| self.source_end(), |s| s.0)
    }

    /// Source byte offset just past normalized char `idx`.
    pub fn byte_end(&self, idx: usize) -> usize {
        self.spans.get(idx).map_or_else(|| self.source_end(), |s| s.1)
    }

    fn source_end(&self) -> usize {
        self.spans.last().map_or(0, |s| s.1)
    }
}

fn fold(c: char) -> impl Iterator<Item = char> {
    let straight = match c {
        '\u{2018}' | '\u{2019}' => '\'',
        '\u{201C}' | '\u{201D}' => '"',
        other => other,
    };
    straight.to_lowercase()
}

/// Removes one pair of surrounding double quotes from an authored anchor.
///
/// Authors often write `from:: "It was the best"`; the quotes delimit the
/// anchor rather than belonging to it.
pub(crate) fn unquote(anchor: &str) -> &str {
    let trimmed = anchor.trim();
    for (open, close) in [('"', '"'), ('\u{201C}', '\u{201D}')] {
        if let Some(inner) = trimmed
            .strip_prefix(open)
            .and_then(|s| s.strip_suffix(close))
        {
            return inner.trim();
        }
    }
    trimmed
}
