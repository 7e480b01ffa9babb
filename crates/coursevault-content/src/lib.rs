#![doc = include_str!("../README.md")]

pub mod document;
pub mod markdown;
pub mod schema;
pub mod validate;

// Re-export commonly used types
pub use document::{
    Article, Course, Document, IdField, LearningOutcome, Lens, LensSection, LensSectionKind,
    Module, ModuleItem, PageSection, ParseOptions, Reference, Segment, SegmentKind,
    SourceSection, VideoTranscript, parse_document,
};
pub use markdown::{WikiLink, WikiLinkError, parse_wikilink};
pub use schema::{Schema, SchemaFamily};
pub use validate::{SlugCheck, check_duplicate_ids, check_duplicate_slugs, check_fields};
