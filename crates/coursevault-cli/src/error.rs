//! Error types for coursevault-cli

use thiserror::Error;

/// Result type alias for coursevault-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a CLI run.
///
/// Content problems never end up here; they are part of the JSON artifact.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from coursevault-core (I/O, configuration)
    #[error(transparent)]
    Core(#[from] coursevault_core::Error),

    /// The artifact could not be serialized
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Core(source.into())
    }
}
