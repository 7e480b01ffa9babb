//! Content types a vault file can hold.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The content type of a vault document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    /// A module: ordered learning outcomes and inline pages.
    Module,
    /// A course: ordered module references.
    Course,
    /// A learning outcome: one or more lens references.
    LearningOutcome,
    /// A lens: curated pages, article excerpts and video excerpts.
    Lens,
    /// A source article.
    Article,
    /// A video transcript.
    VideoTranscript,
}

impl ContentKind {
    /// All content kinds, in dependency order (referencing kinds first).
    pub const ALL: [ContentKind; 6] = [
        ContentKind::Course,
        ContentKind::Module,
        ContentKind::LearningOutcome,
        ContentKind::Lens,
        ContentKind::Article,
        ContentKind::VideoTranscript,
    ];

    /// Human-readable name used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Module => "module",
            ContentKind::Course => "course",
            ContentKind::LearningOutcome => "learning outcome",
            ContentKind::Lens => "lens",
            ContentKind::Article => "article",
            ContentKind::VideoTranscript => "video transcript",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
