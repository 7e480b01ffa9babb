//! Utility modules for identifiers, fuzzy matching, and vault paths.
//!
//! # Modules
//!
//! - [`fuzzy`]: Edit-distance suggestions
//! - [`ids`]: Slug/UUID validation and ID normalization
//! - [`paths`]: POSIX-style vault-relative path helpers
//! - [`timestamp`]: Transcript timestamp parsing

pub mod fuzzy;
pub mod ids;
pub mod paths;
pub mod timestamp;
