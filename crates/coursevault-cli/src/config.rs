//! Configuration file lookup.
//!
//! Resolution order: `--config` (or `COURSEVAULT_CONFIG`), then
//! `<config dir>/coursevault/config.toml`, then built-in defaults.

use std::path::{Path, PathBuf};

use coursevault_core::Config;

use crate::error::Result;

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "COURSEVAULT_CONFIG";

/// The per-user configuration file, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("coursevault").join("config.toml"))
}

/// Loads the configuration for a run.
///
/// An explicitly named file must exist. A missing default file means the
/// defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Ok(Config::load(path)?);
    }

    match default_config_path() {
        Some(path) if path.is_file() => Ok(Config::load(&path)?),
        _ => {
            log::debug!("No configuration file found; using defaults");
            Ok(Config::default())
        }
    }
}
