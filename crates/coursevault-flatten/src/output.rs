//! Flattened output types.
//!
//! These are the JSON shapes handed to the rendering frontend. Each one owns
//! its text: excerpt content is copied out of the source documents.

use coursevault_core::Tier;
use serde::{Deserialize, Serialize};

/// A module with every reference resolved and every excerpt extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatModule {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discussion: Option<String>,
    pub tier: Tier,
    pub sections: Vec<Section>,
}

/// What a flattened section was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Page,
    Article,
    Video,
}

/// One page of a flattened module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    /// The page's own `id::`, when it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_outcome_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens_id: Option<String>,
    /// Set when any reference on the path to this section was optional.
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMeta>,
    pub segments: Vec<Segment>,
}

/// Metadata of the article or video an excerpt section draws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceMeta {
    Article {
        title: String,
        author: String,
        source_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<String>,
    },
    Video {
        title: String,
        channel: String,
        url: String,
    },
}

/// A rendered segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Segment {
    Text {
        content: String,
        optional: bool,
    },
    Chat {
        instructions: String,
        hide_previous_content_from_user: bool,
        hide_previous_content_from_tutor: bool,
        optional: bool,
    },
    ArticleExcerpt {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        collapsed_before: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        collapsed_after: Option<String>,
        optional: bool,
    },
    VideoExcerpt {
        /// Start in seconds.
        from: f64,
        /// End in seconds.
        to: f64,
        transcript: String,
        optional: bool,
    },
}

impl Segment {
    /// The segment's displayed text.
    pub fn text(&self) -> &str {
        match self {
            Segment::Text { content, .. } | Segment::ArticleExcerpt { content, .. } => content,
            Segment::Chat { instructions, .. } => instructions,
            Segment::VideoExcerpt { transcript, .. } => transcript,
        }
    }
}

/// A course: its modules in order, by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatCourse {
    pub slug: String,
    pub title: String,
    pub progression: Vec<String>,
}
