//! Error types for coursevault-core.
//!
//! These are *process* failures: a file that cannot be read, a configuration
//! file that does not parse. Problems with vault content are reported as
//! [`ContentError`](crate::ContentError) values instead and never surface
//! through this type.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for coursevault operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of content validation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure, with the path that triggered it when known.
    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        /// Path being read or written.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Structured data (JSON, TOML) could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A named resource does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What kind of resource was looked up.
        kind: String,
        /// Identifier that was looked up.
        id: String,
    },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" at {}", p.display()),
        None => String::new(),
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }

    /// Creates a not-found error.
    pub fn not_found<K: Into<String>, I: Into<String>>(kind: K, id: I) -> Self {
        Error::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Wraps an I/O error together with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}
