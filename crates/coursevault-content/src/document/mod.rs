//! Typed documents and their parsers.
//!
//! Every parser has the same shape, `(text, file, options) -> Outcome<T>`:
//!
//! 1. extract the frontmatter and check it against the type's schema;
//! 2. stop with no document if anything so far is an `error`;
//! 3. parse the body structure (sections, segments, links, images);
//! 4. return the document unless step 3 found an `error`, plus all warnings.
//!
//! Failure is always local to the one file. [`parse_document`] dispatches on
//! [`ContentKind`].

mod article;
mod common;
mod course;
mod learning_outcome;
mod lens;
mod module;
mod page;
mod segment;
mod video;

pub use article::{Article, parse_article};
pub use course::{Course, parse_course};
pub use learning_outcome::{LearningOutcome, parse_learning_outcome};
pub use lens::{Lens, LensSection, LensSectionKind, SourceSection, parse_lens};
pub use module::{Module, ModuleItem, parse_module};
pub use page::PageSection;
pub use segment::{
    ArticleExcerptSegment, ChatSegment, DEFAULT_VIDEO_FROM, Segment, SegmentKind, TextSegment,
    VideoExcerptSegment,
};
pub use video::{VideoTranscript, parse_video_transcript};

use coursevault_core::util::fuzzy::FIELD_TYPO_MAX_DISTANCE;
use coursevault_core::{Config, ContentKind, Outcome, Tier};

use crate::markdown::WikiLink;

// ============================================================================
// Shared value types
// ============================================================================

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Largest edit distance reported as a field-name typo.
    pub field_max_distance: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            field_max_distance: FIELD_TYPO_MAX_DISTANCE,
        }
    }
}

impl From<&Config> for ParseOptions {
    fn from(config: &Config) -> Self {
        Self {
            field_max_distance: config.suggestions.field_max_distance,
        }
    }
}

/// A validated UUID and the line it was declared on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdField {
    pub value: String,
    pub line: usize,
}

/// A link from one document to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub link: WikiLink,
    /// Whether learners may skip the referenced content.
    pub optional: bool,
    /// 1-based line of the link.
    pub line: usize,
}

/// A UUID-bearing field of a document, for cross-file uniqueness checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdUse<'a> {
    /// Field label used in messages (`contentId`, `id`, `Page id`).
    pub field: &'static str,
    pub value: &'a str,
    pub line: usize,
}

// ============================================================================
// Document
// ============================================================================

/// Any parsed vault document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Module(Module),
    Course(Course),
    LearningOutcome(LearningOutcome),
    Lens(Lens),
    Article(Article),
    VideoTranscript(VideoTranscript),
}

impl Document {
    pub fn kind(&self) -> ContentKind {
        match self {
            Document::Module(_) => ContentKind::Module,
            Document::Course(_) => ContentKind::Course,
            Document::LearningOutcome(_) => ContentKind::LearningOutcome,
            Document::Lens(_) => ContentKind::Lens,
            Document::Article(_) => ContentKind::Article,
            Document::VideoTranscript(_) => ContentKind::VideoTranscript,
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            Document::Module(d) => d.tier,
            Document::Course(d) => d.tier,
            Document::LearningOutcome(d) => d.tier,
            Document::Lens(d) => d.tier,
            Document::Article(d) => d.tier,
            Document::VideoTranscript(d) => d.tier,
        }
    }

    /// Slug and its line, for the types that have one.
    pub fn slug(&self) -> Option<(&str, usize)> {
        match self {
            Document::Module(d) => Some((&d.slug, d.slug_line)),
            Document::Course(d) => Some((&d.slug, d.slug_line)),
            _ => None,
        }
    }

    /// Every UUID this document declares, in declaration order.
    pub fn ids(&self) -> Vec<IdUse<'_>> {
        fn page_ids<'a>(pages: impl Iterator<Item = &'a PageSection>) -> Vec<IdUse<'a>> {
            pages
                .filter_map(|p| p.id.as_ref())
                .map(|id| IdUse {
                    field: "Page id",
                    value: &id.value,
                    line: id.line,
                })
                .collect()
        }
        fn single<'a>(field: &'static str, id: &'a IdField) -> IdUse<'a> {
            IdUse {
                field,
                value: &id.value,
                line: id.line,
            }
        }

        match self {
            Document::Module(m) => {
                let mut ids: Vec<IdUse<'_>> = Vec::new();
                ids.extend(m.content_id.as_ref().map(|id| single("contentId", id)));
                ids.extend(m.id.as_ref().map(|id| single("id", id)));
                ids.extend(page_ids(m.pages()));
                ids
            }
            Document::LearningOutcome(lo) => vec![single("id", &lo.id)],
            Document::Lens(lens) => {
                let mut ids = vec![single("id", &lens.id)];
                ids.extend(page_ids(lens.sections.iter().filter_map(|s| match s {
                    LensSection::Page(p) => Some(p),
                    _ => None,
                })));
                ids
            }
            _ => Vec::new(),
        }
    }
}

/// Parses a file as the given content type.
pub fn parse_document(
    kind: ContentKind,
    text: &str,
    file: &str,
    options: &ParseOptions,
) -> Outcome<Document> {
    let outcome = match kind {
        ContentKind::Module => parse_module(text, file, options).map(Document::Module),
        ContentKind::Course => parse_course(text, file, options).map(Document::Course),
        ContentKind::LearningOutcome => {
            parse_learning_outcome(text, file, options).map(Document::LearningOutcome)
        }
        ContentKind::Lens => parse_lens(text, file, options).map(Document::Lens),
        ContentKind::Article => parse_article(text, file, options).map(Document::Article),
        ContentKind::VideoTranscript => {
            parse_video_transcript(text, file, options).map(Document::VideoTranscript)
        }
    };

    log::debug!(
        "Parsed {} {}: {} error(s), {} warning(s){}",
        kind,
        file,
        outcome.error_count(),
        outcome.warning_count(),
        if outcome.value.is_none() { " (rejected)" } else { "" }
    );
    outcome
}
