//! Coursevault Core: shared types, diagnostics, configuration, and utilities.
//!
//! This crate provides the foundational types used across all Coursevault
//! crates. It has no internal Coursevault dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Process-level error type and Result alias
//! - [`diagnostics`]: `ContentError`, `Severity`, and `Outcome<T>`
//! - [`tier`]: Content-maturity tiers
//! - [`kind`]: Content types
//! - [`config`]: TOML configuration
//! - [`util`]: ID, fuzzy-matching, and path utilities

#![doc = include_str!("../README.md")]

use std::collections::BTreeMap;

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod kind;
pub mod tier;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::{Config, SuggestionConfig, VaultLayout};
pub use diagnostics::{ContentError, Outcome, Severity, has_blocking_errors};
pub use error::{Error, Result};
pub use kind::ContentKind;
pub use tier::Tier;

/// Vault contents: vault-relative `/`-separated path → file text.
///
/// Ordered so that every stage iterates files deterministically.
pub type FileMap = BTreeMap<String, String>;
