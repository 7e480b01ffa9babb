//! Module documents.
//!
//! ```markdown
//! ---
//! slug: intro-to-alignment
//! title: Introduction to Alignment
//! contentId: 550e8400-e29b-41d4-a716-446655440000
//! ---
//!
//! # Page: Welcome
//! ## Text
//! content:: What this module covers.
//!
//! # Learning Outcome:
//! source:: [[learning outcomes/core-ideas]]
//! optional:: false
//! ```

use coursevault_core::{Outcome, Tier};

use crate::markdown::split_sections;
use crate::schema::{MODULE, OUTCOME_REFERENCE};
use crate::validate::check_slug;

use super::common::{
    Context, frontmatter_id, parse_reference, read_prologue, warn_preamble,
};
use super::page::{PageSection, parse_page};
use super::{IdField, ParseOptions, Reference};

const SECTION_LEVEL: usize = 1;
const SEGMENT_LEVEL: usize = 2;

/// A top-level unit of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub slug: String,
    pub slug_line: usize,
    pub title: String,
    pub content_id: Option<IdField>,
    pub id: Option<IdField>,
    pub discussion: Option<String>,
    pub tier: Tier,
    /// Learning-outcome references and inline pages, in document order.
    pub items: Vec<ModuleItem>,
}

/// One level-1 section of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleItem {
    LearningOutcome(Reference),
    Page(PageSection),
}

impl Module {
    /// Inline pages, in document order.
    pub fn pages(&self) -> impl Iterator<Item = &PageSection> {
        self.items.iter().filter_map(|item| match item {
            ModuleItem::Page(page) => Some(page),
            ModuleItem::LearningOutcome(_) => None,
        })
    }
}

/// Parses a module file.
pub fn parse_module(text: &str, file: &str, options: &ParseOptions) -> Outcome<Module> {
    let mut cx = Context::new(file, options);
    let Some(prologue) = read_prologue(text, &MODULE, &mut cx) else {
        return cx.fail();
    };
    if cx.has_errors() {
        return cx.fail();
    }
    let fm = &prologue.frontmatter;

    let slug = fm.get_str("slug").unwrap_or_default().trim().to_string();
    let slug_line = fm.line_of("slug").unwrap_or(1);
    if let Some(err) = check_slug(&slug, file, slug_line) {
        cx.errors.push(err);
    }
    let content_id = frontmatter_id(fm, "contentId", &mut cx);
    let id = frontmatter_id(fm, "id", &mut cx);

    let split = split_sections(prologue.body, SECTION_LEVEL, prologue.body_start_line);
    warn_preamble(&split.preamble, split.preamble_line, "section", &mut cx);

    let mut items = Vec::new();
    for section in &split.sections {
        match section.keyword.as_str() {
            "learning-outcome" => {
                if let Some(reference) = parse_reference(section, &OUTCOME_REFERENCE, &mut cx) {
                    items.push(ModuleItem::LearningOutcome(reference));
                }
            }
            "page" => items.push(ModuleItem::Page(parse_page(section, SEGMENT_LEVEL, &mut cx))),
            _ => cx.unknown_heading(
                "section",
                &section.heading,
                section.line,
                &["Learning Outcome", "Page"],
            ),
        }
    }

    cx.misplaced_headings(
        prologue.body,
        prologue.body_start_line,
        &[("Learning Outcome", SECTION_LEVEL), ("Page", SECTION_LEVEL)],
    );

    if split.sections.is_empty() {
        cx.warning(
            prologue.body_start_line,
            "Module has no '# Learning Outcome:' or '# Page:' sections",
        );
    }

    cx.finish(Module {
        slug,
        slug_line,
        title: fm.get_str("title").unwrap_or_default().trim().to_string(),
        content_id,
        id,
        discussion: fm.get_str("discussion").filter(|d| !d.trim().is_empty()),
        tier: fm.tier(),
        items,
    })
}
