//! Pipeline configuration.
//!
//! Configuration is optional: every field has a default, so an empty TOML
//! document (or no file at all) yields a working [`Config`].
//!
//! ```toml
//! [layout]
//! modules = ["modules"]
//! lenses = ["lenses", "Lenses"]
//!
//! [suggestions]
//! field_max_distance = 2
//! file_max_distance = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::util::fuzzy::{FIELD_TYPO_MAX_DISTANCE, FILE_SUGGESTION_MAX_DISTANCE};
use crate::{ContentKind, Error, Result};

// ============================================================================
// Config
// ============================================================================

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory-to-content-type mapping.
    pub layout: VaultLayout,
    /// Edit-distance thresholds for suggestions.
    pub suggestions: SuggestionConfig,
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(format!("Invalid configuration: {e}")))
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

// ============================================================================
// VaultLayout
// ============================================================================

/// Maps top-level vault directories to content types.
///
/// Directory names are compared case-insensitively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VaultLayout {
    /// Directories holding modules.
    pub modules: Vec<String>,
    /// Directories holding courses.
    pub courses: Vec<String>,
    /// Directories holding learning outcomes.
    pub learning_outcomes: Vec<String>,
    /// Directories holding lenses.
    pub lenses: Vec<String>,
    /// Directories holding articles.
    pub articles: Vec<String>,
    /// Directories holding video transcripts.
    pub video_transcripts: Vec<String>,
}

impl Default for VaultLayout {
    fn default() -> Self {
        fn dirs(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| (*s).to_string()).collect()
        }
        Self {
            modules: dirs(&["modules"]),
            courses: dirs(&["courses"]),
            learning_outcomes: dirs(&[
                "learning outcomes",
                "learning_outcomes",
                "learning-outcomes",
            ]),
            lenses: dirs(&["lenses"]),
            articles: dirs(&["articles"]),
            video_transcripts: dirs(&["video_transcripts", "video-transcripts", "transcripts"]),
        }
    }
}

impl VaultLayout {
    fn directories(&self, kind: ContentKind) -> &[String] {
        match kind {
            ContentKind::Module => &self.modules,
            ContentKind::Course => &self.courses,
            ContentKind::LearningOutcome => &self.learning_outcomes,
            ContentKind::Lens => &self.lenses,
            ContentKind::Article => &self.articles,
            ContentKind::VideoTranscript => &self.video_transcripts,
        }
    }

    /// Classifies a vault-relative markdown path by its top-level directory.
    ///
    /// ```rust
    /// use coursevault_core::{ContentKind, VaultLayout};
    ///
    /// let layout = VaultLayout::default();
    /// assert_eq!(layout.classify("Lenses/alignment.md"), Some(ContentKind::Lens));
    /// assert_eq!(layout.classify("README.md"), None);
    /// assert_eq!(layout.classify("lenses/data.json"), None);
    /// ```
    pub fn classify(&self, path: &str) -> Option<ContentKind> {
        if !path.ends_with(".md") {
            return None;
        }
        let (top, _) = path.split_once('/')?;
        let top = top.to_lowercase();
        ContentKind::ALL.into_iter().find(|&kind| {
            self.directories(kind)
                .iter()
                .any(|dir| dir.to_lowercase() == top)
        })
    }
}

// ============================================================================
// SuggestionConfig
// ============================================================================

/// Edit-distance thresholds for fix-it suggestions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuggestionConfig {
    /// Maximum distance for "unknown field, did you mean" warnings.
    pub field_max_distance: usize,
    /// Maximum distance for "file not found, did you mean" hints.
    pub file_max_distance: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            field_max_distance: FIELD_TYPO_MAX_DISTANCE,
            file_max_distance: FILE_SUGGESTION_MAX_DISTANCE,
        }
    }
}
