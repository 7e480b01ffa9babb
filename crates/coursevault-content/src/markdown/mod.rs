//! The vault's markdown dialect.
//!
//! - [`frontmatter`]: YAML frontmatter extraction
//! - [`fields`]: `key:: value` body fields
//! - [`wikilink`]: `[[target#anchor|alias]]` references
//! - [`sections`]: Heading-delimited sections
//! - [`images`]: Markdown image and wiki-embed scanning
//!
//! These utilities know nothing about content types; the parsers in
//! [`crate::document`] combine them with the schemas in [`crate::schema`].

pub mod fields;
pub mod frontmatter;
pub mod images;
pub mod sections;
pub mod wikilink;

// Re-export key types and functions
pub use fields::{Field, FieldBlock, parse_bool, parse_fields};
pub use frontmatter::{Frontmatter, FrontmatterError, FrontmatterResult, extract_frontmatter};
pub use images::{ImageRef, extract_images, find_wiki_embeds};
pub use sections::{HeadingLine, Section, SectionSplit, heading_label, headings, split_sections};
pub use wikilink::{WikiLink, WikiLinkError, parse_wikilink};
