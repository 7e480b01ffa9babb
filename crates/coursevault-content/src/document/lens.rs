//! Lens documents.
//!
//! A lens is an ordered list of level-3 sections. Page sections hold text
//! and chat segments directly; Article and Video sections point at a source
//! document and may add excerpt segments of that source:
//!
//! ```markdown
//! ---
//! id: 6ba7b810-9dad-11d1-80b4-00c04fd430c8
//! ---
//! ### Article: The Problem
//! source:: [[articles/the-problem]]
//!
//! #### Text
//! content:: Read the opening.
//!
//! #### Article-excerpt
//! from:: "It was"
//! to:: "the end."
//! ```

use std::fmt;

use coursevault_core::{Outcome, Tier};

use crate::markdown::{Section, parse_fields, split_sections};
use crate::schema::{ARTICLE_SECTION, LENS, Schema, VIDEO_SECTION};

use super::common::{Context, flag, frontmatter_id, read_prologue, warn_preamble};
use super::page::{PageSection, parse_page};
use super::segment::{Segment, SegmentKind, parse_segments};
use super::{IdField, ParseOptions, Reference};

const SECTION_LEVEL: usize = 3;
const SEGMENT_LEVEL: usize = 4;

const SECTION_HEADINGS: [&str; 3] = ["Page", "Article", "Video"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lens {
    pub id: IdField,
    pub tier: Tier,
    pub sections: Vec<LensSection>,
}

/// The three lens section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LensSectionKind {
    Page,
    Article,
    Video,
}

impl fmt::Display for LensSectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LensSectionKind::Page => "Page",
            LensSectionKind::Article => "Article",
            LensSectionKind::Video => "Video",
        })
    }
}

/// An Article or Video section: a source document plus segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSection {
    pub title: String,
    /// The source document; its `optional` flag is the section's.
    pub source: Reference,
    pub segments: Vec<Segment>,
    pub line: usize,
}

/// One level-3 section of a lens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LensSection {
    Page(PageSection),
    Article(SourceSection),
    Video(SourceSection),
}

/// Parses a lens file.
pub fn parse_lens(text: &str, file: &str, options: &ParseOptions) -> Outcome<Lens> {
    let mut cx = Context::new(file, options);
    let Some(prologue) = read_prologue(text, &LENS, &mut cx) else {
        return cx.fail();
    };
    if cx.has_errors() {
        return cx.fail();
    }
    let fm = &prologue.frontmatter;

    let Some(id) = frontmatter_id(fm, "id", &mut cx) else {
        return cx.fail();
    };

    let split = split_sections(prologue.body, SECTION_LEVEL, prologue.body_start_line);
    warn_preamble(&split.preamble, split.preamble_line, "'###' section", &mut cx);

    let mut sections = Vec::new();
    for section in &split.sections {
        match section.keyword.as_str() {
            "page" => sections.push(LensSection::Page(parse_page(section, SEGMENT_LEVEL, &mut cx))),
            "article" => sections.extend(
                parse_source_section(section, LensSectionKind::Article, &mut cx)
                    .map(LensSection::Article),
            ),
            "video" => sections.extend(
                parse_source_section(section, LensSectionKind::Video, &mut cx)
                    .map(LensSection::Video),
            ),
            _ => cx.unknown_heading("section", &section.heading, section.line, &SECTION_HEADINGS),
        }
    }

    let mut rules: Vec<(&str, usize)> = SECTION_HEADINGS
        .iter()
        .map(|h| (*h, SECTION_LEVEL))
        .collect();
    rules.extend(SegmentKind::ALL.iter().map(|k| (k.heading(), SEGMENT_LEVEL)));
    cx.misplaced_headings(prologue.body, prologue.body_start_line, &rules);

    if split.sections.is_empty() {
        cx.error(
            prologue.body_start_line,
            "Lens has no '### Page:', '### Article:' or '### Video:' sections",
        );
    }

    cx.finish(Lens {
        id,
        tier: fm.tier(),
        sections,
    })
}

fn parse_source_section(
    section: &Section,
    kind: LensSectionKind,
    cx: &mut Context<'_>,
) -> Option<SourceSection> {
    let (schema, excerpt): (&Schema, SegmentKind) = match kind {
        LensSectionKind::Video => (&VIDEO_SECTION, SegmentKind::VideoExcerpt),
        _ => (&ARTICLE_SECTION, SegmentKind::ArticleExcerpt),
    };
    let name = kind.to_string();

    let (fields_text, fields_line, segments) = parse_segments(
        &section.content,
        section.content_line,
        SEGMENT_LEVEL,
        &[SegmentKind::Text, SegmentKind::Chat, excerpt],
        &name,
        cx,
    );

    let block = parse_fields(&fields_text, fields_line);
    cx.check_block(&block, schema, section.line);
    let link = cx.link_field(&block, "source")?;

    if segments.is_empty() {
        cx.warning(
            section.line,
            format!("{name} section '{}' has no segments", section.title),
        );
    }

    Some(SourceSection {
        title: section.title.clone(),
        source: Reference {
            link,
            optional: flag(&block, "optional"),
            line: block.get("source").map_or(section.line, |f| f.line),
        },
        segments,
        line: section.line,
    })
}
