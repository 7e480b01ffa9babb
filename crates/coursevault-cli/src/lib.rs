//! # coursevault-cli
//!
//! The `coursevault` binary: reads a vault directory into memory, runs the
//! pipeline, and writes the JSON artifact.
//!
//! - [`cli`]: argument definitions
//! - [`config`]: configuration file lookup
//! - [`vault`]: asynchronous vault reading
//! - [`build`]: the `build` command

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod vault;

pub use error::{Error, Result};
