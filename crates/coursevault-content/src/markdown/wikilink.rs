//! Wikilink parsing.
//!
//! A wikilink is `[[target]]`, optionally with a heading anchor and/or an
//! alias: `[[target#anchor|alias]]`. Parsing is purely syntactic; whether the
//! target exists is decided later against the vault contents, so nothing
//! here depends on any filesystem.

use std::fmt;

use thiserror::Error;

/// A parsed wikilink.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WikiLink {
    /// Target path as written (no anchor, no alias).
    pub target: String,
    /// Heading anchor after `#`, if any.
    pub anchor: Option<String>,
    /// Display alias after `|`, if any.
    pub alias: Option<String>,
}

impl fmt::Display for WikiLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}", self.target)?;
        if let Some(ref anchor) = self.anchor {
            write!(f, "#{anchor}")?;
        }
        if let Some(ref alias) = self.alias {
            write!(f, "|{alias}")?;
        }
        f.write_str("]]")
    }
}

/// Why a wikilink was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WikiLinkError {
    /// Not wrapped in `[[` ... `]]`.
    #[error("Malformed wikilink '{0}': missing bracket (expected [[target]])")]
    MissingBracket(String),
    /// Nothing between the brackets.
    #[error("Empty wikilink: no target between the brackets")]
    Empty,
    /// The target climbs out of the vault.
    #[error("Path traversal is not allowed in wikilink target '{0}'")]
    PathTraversal(String),
}

/// Parses a bracketed wikilink string.
///
/// Checks, in order: brackets, non-empty content, no `../` or `..\`
/// segments. The anchor and alias are then split off.
///
/// ```rust
/// use coursevault_content::markdown::wikilink::{parse_wikilink, WikiLinkError};
///
/// let link = parse_wikilink("[[lenses/intro#Part 2|Intro]]").unwrap();
/// assert_eq!(link.target, "lenses/intro");
/// assert_eq!(link.anchor.as_deref(), Some("Part 2"));
/// assert_eq!(link.alias.as_deref(), Some("Intro"));
///
/// assert_eq!(parse_wikilink("[[]]"), Err(WikiLinkError::Empty));
/// assert!(matches!(parse_wikilink("[[../secret]]"), Err(WikiLinkError::PathTraversal(_))));
/// ```
pub fn parse_wikilink(text: &str) -> Result<WikiLink, WikiLinkError> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix("[[")
        .and_then(|s| s.strip_suffix("]]"))
        .ok_or_else(|| WikiLinkError::MissingBracket(trimmed.to_string()))?;

    let inner = inner.trim();
    if inner.is_empty() {
        return Err(WikiLinkError::Empty);
    }

    if is_traversal(inner) {
        return Err(WikiLinkError::PathTraversal(inner.to_string()));
    }

    let (left, alias) = match inner.split_once('|') {
        Some((left, alias)) => (left.trim(), non_empty(alias)),
        None => (inner, None),
    };
    let (target, anchor) = match left.split_once('#') {
        Some((target, anchor)) => (target.trim(), non_empty(anchor)),
        None => (left, None),
    };

    if target.is_empty() {
        return Err(WikiLinkError::Empty);
    }

    Ok(WikiLink {
        target: target.to_string(),
        anchor,
        alias,
    })
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn is_traversal(inner: &str) -> bool {
    inner.contains("../")
        || inner.contains("..\\")
        || inner.split(['/', '\\', '|', '#']).next() == Some("..")
}

/// Finds every `[[...]]` span in a line of text, skipping `![[...]]` embeds.
///
/// Returns the raw bracketed text so it can be handed to [`parse_wikilink`].
pub fn find_wikilinks(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;
    let mut consumed = 0;
    while let Some(start) = rest.find("[[") {
        let abs = consumed + start;
        let Some(end) = rest[start..].find("]]") else {
            break;
        };
        let embed = abs > 0 && text.as_bytes()[abs - 1] == b'!';
        if !embed {
            found.push(&rest[start..start + end + 2]);
        }
        consumed += start + end + 2;
        rest = &rest[start + end + 2..];
    }
    found
}
