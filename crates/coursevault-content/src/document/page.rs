//! `Page:` sections, shared by modules and lenses.

use crate::markdown::{Section, parse_fields};
use crate::schema::PAGE_SECTION;
use crate::validate::check_field_uuid;

use super::IdField;
use super::common::{Context, flag};
use super::segment::{Segment, SegmentKind, parse_segments};

/// An inline container of text and chat segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSection {
    pub title: String,
    pub id: Option<IdField>,
    pub optional: bool,
    pub segments: Vec<Segment>,
    /// 1-based line of the `Page:` heading.
    pub line: usize,
}

/// Parses a `Page:` section whose segments sit at `segment_level`.
pub(crate) fn parse_page(
    section: &Section,
    segment_level: usize,
    cx: &mut Context<'_>,
) -> PageSection {
    let (fields_text, fields_line, segments) = parse_segments(
        &section.content,
        section.content_line,
        segment_level,
        &[SegmentKind::Text, SegmentKind::Chat],
        "Page",
        cx,
    );

    let block = parse_fields(&fields_text, fields_line);
    cx.check_block(&block, &PAGE_SECTION, section.line);

    let id = block
        .get("id")
        .filter(|f| !f.value.trim().is_empty())
        .and_then(|f| match check_field_uuid(&f.value, "id", cx.file, f.line) {
            Ok(value) => Some(IdField {
                value,
                line: f.line,
            }),
            Err(err) => {
                cx.errors.push(err);
                None
            }
        });

    if segments.is_empty() {
        cx.warning(
            section.line,
            format!("Page section '{}' has no segments", section.title),
        );
    }

    PageSection {
        title: section.title.clone(),
        id,
        optional: flag(&block, "optional"),
        segments,
        line: section.line,
    }
}
