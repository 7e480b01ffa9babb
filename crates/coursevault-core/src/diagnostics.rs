//! Content diagnostics.
//!
//! Every stage of the pipeline reports problems with vault content as
//! [`ContentError`] values rather than `Err` returns. A stage result is an
//! [`Outcome`]: the value it managed to build (if any) plus everything it
//! found wrong along the way. This is what lets a run produce a best-effort
//! artifact and a complete error list in one pass.
//!
//! # Example
//!
//! ```rust
//! use coursevault_core::{ContentError, Outcome, Severity};
//!
//! let mut outcome = Outcome::new(Some("module"));
//! outcome.push(ContentError::warning("modules/intro.md", "Unknown field 'titel'")
//!     .at_line(3)
//!     .with_suggestion("Did you mean 'title'?"));
//!
//! assert!(!outcome.has_blocking_errors());
//! assert_eq!(outcome.warning_count(), 1);
//! assert_eq!(outcome.errors[0].severity, Severity::Warning);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Severity
// ============================================================================

/// How serious a content problem is.
///
/// Any `Error` blocks publishing; `Warning` never does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks promotion of the build.
    Error,
    /// Informational; never blocks.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

// ============================================================================
// ContentError
// ============================================================================

/// A problem found in vault content.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentError {
    /// Vault-relative path of the file the problem belongs to.
    pub file: String,
    /// 1-based line in the original file, when the problem has a location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Human-readable description.
    pub message: String,
    /// Optional hint for fixing the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Whether the problem blocks publishing.
    pub severity: Severity,
}

impl ContentError {
    /// Creates an `error`-severity entry.
    pub fn error(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(file, message, Severity::Error)
    }

    /// Creates a `warning`-severity entry.
    pub fn warning(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(file, message, Severity::Warning)
    }

    fn new(file: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            file: file.into(),
            line: None,
            message: message.into(),
            suggestion: None,
            severity,
        }
    }

    /// Attaches a 1-based line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attaches a line number when one is known.
    pub fn at_optional_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    /// Attaches a fix-it suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Returns `true` for `error`-severity entries.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.file)?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// A stage result: the value built (if any) and every problem found.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<T> {
    /// The constructed value, or `None` when an error prevented it.
    pub value: Option<T>,
    /// Problems found, in discovery order.
    pub errors: Vec<ContentError>,
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self {
            value: None,
            errors: Vec::new(),
        }
    }
}

impl<T> Outcome<T> {
    /// Creates an outcome with no diagnostics.
    pub fn new(value: Option<T>) -> Self {
        Self {
            value,
            errors: Vec::new(),
        }
    }

    /// Creates a value-less outcome from a list of diagnostics.
    pub fn failed(errors: Vec<ContentError>) -> Self {
        Self {
            value: None,
            errors,
        }
    }

    /// Records a diagnostic.
    pub fn push(&mut self, error: ContentError) {
        self.errors.push(error);
    }

    /// Records several diagnostics.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ContentError>) {
        self.errors.extend(errors);
    }

    /// Returns `true` if any diagnostic has `error` severity.
    pub fn has_blocking_errors(&self) -> bool {
        has_blocking_errors(&self.errors)
    }

    /// Number of `error`-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_error()).count()
    }

    /// Number of `warning`-severity diagnostics.
    pub fn warning_count(&self) -> usize {
        self.errors.len() - self.error_count()
    }

    /// Maps the contained value, keeping diagnostics.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: self.value.map(f),
            errors: self.errors,
        }
    }

    /// Splits into the value and the diagnostics.
    pub fn into_parts(self) -> (Option<T>, Vec<ContentError>) {
        (self.value, self.errors)
    }
}

/// Returns `true` if any entry in `errors` has `error` severity.
pub fn has_blocking_errors(errors: &[ContentError]) -> bool {
    errors.iter().any(ContentError::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // ContentError tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_builder_sets_fields() {
        let err = ContentError::error("lenses/a.md", "Missing required field 'id'")
            .at_line(2)
            .with_suggestion("Add an id");

        assert_eq!(err.file, "lenses/a.md");
        assert_eq!(err.line, Some(2));
        assert_eq!(err.suggestion.as_deref(), Some("Add an id"));
        assert!(err.is_error());
    }

    #[test]
    fn test_display_includes_location() {
        let err = ContentError::warning("a.md", "odd").at_line(7);
        assert_eq!(err.to_string(), "warning: a.md:7: odd");
    }

    #[test]
    fn test_serializes_without_empty_options() {
        let err = ContentError::error("a.md", "broken");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["severity"], "error");
        assert!(json.get("line").is_none());
        assert!(json.get("suggestion").is_none());
    }

    // ------------------------------------------------------------------------
    // Outcome tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_outcome_counts() {
        let mut outcome: Outcome<()> = Outcome::default();
        outcome.push(ContentError::error("a.md", "x"));
        outcome.push(ContentError::warning("a.md", "y"));
        outcome.push(ContentError::warning("b.md", "z"));

        assert!(outcome.has_blocking_errors());
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.warning_count(), 2);
    }

    #[test]
    fn test_outcome_map_keeps_errors() {
        let mut outcome = Outcome::new(Some(2));
        outcome.push(ContentError::warning("a.md", "y"));
        let mapped = outcome.map(|n| n * 10);
        assert_eq!(mapped.value, Some(20));
        assert_eq!(mapped.errors.len(), 1);
    }

    #[test]
    fn test_warnings_do_not_block() {
        let errors = vec![ContentError::warning("a.md", "y")];
        assert!(!has_blocking_errors(&errors));
    }
}
