//! Excerpt extraction errors.

use coursevault_core::ContentError;
use thiserror::Error;

/// Why an excerpt could not be extracted.
///
/// Every variant blocks only the one excerpt segment that asked for it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BundleError {
    #[error("Anchor not found in article: '{0}'")]
    AnchorNotFound(String),

    #[error("End anchor '{to}' not found after start anchor '{from}'")]
    EndAnchorNotFound { from: String, to: String },

    #[error("Ambiguous anchor '{anchor}': found {count} times")]
    AmbiguousAnchor { anchor: String, count: usize },

    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("Excerpt start {from} is after its end {to}")]
    OutOfOrder { from: String, to: String },

    #[error("Timestamp {0} not found in transcript")]
    TimestampNotFound(String),

    #[error("No transcript text between {from} and {to}")]
    EmptyExcerpt { from: String, to: String },

    #[error("Cannot start an excerpt at {0}: transcript has no timestamps")]
    UntimedTranscript(String),

    #[error("Invalid word timestamps file: {0}")]
    InvalidWordTimestamps(String),
}

impl BundleError {
    /// Fix-it hint shown alongside the message.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            BundleError::AnchorNotFound(_) | BundleError::EndAnchorNotFound { .. } => {
                Some("Copy the anchor text exactly from the article")
            }
            BundleError::AmbiguousAnchor { .. } => {
                Some("Extend the anchor with surrounding words until it is unique")
            }
            BundleError::InvalidTimestamp(_) => Some("Use M:SS, H:MM:SS or M:SS.ms"),
            BundleError::TimestampNotFound(_) => {
                Some("Use a timestamp that starts a line in the transcript")
            }
            BundleError::UntimedTranscript(_) => Some("Add timestamps to the transcript or start at 0:00"),
            _ => None,
        }
    }

    /// Converts into a diagnostic on `file` at `line`.
    pub fn into_content_error(self, file: &str, line: usize) -> ContentError {
        let suggestion = self.suggestion();
        let err = ContentError::error(file, self.to_string()).at_line(line);
        match suggestion {
            Some(s) => err.with_suggestion(s),
            None => err,
        }
    }
}
