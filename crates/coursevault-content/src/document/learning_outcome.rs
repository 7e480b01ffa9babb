//! Learning-outcome documents: a goal and the lenses that teach it.

use coursevault_core::{Outcome, Tier};

use crate::markdown::split_sections;
use crate::schema::{LEARNING_OUTCOME, LENS_REFERENCE};

use super::common::{Context, frontmatter_id, parse_reference, read_prologue, warn_preamble};
use super::{IdField, ParseOptions, Reference};

const SECTION_LEVEL: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningOutcome {
    pub id: IdField,
    pub discussion: Option<String>,
    pub tier: Tier,
    /// Lens references in document order.
    pub lenses: Vec<Reference>,
}

/// Parses a learning-outcome file.
pub fn parse_learning_outcome(
    text: &str,
    file: &str,
    options: &ParseOptions,
) -> Outcome<LearningOutcome> {
    let mut cx = Context::new(file, options);
    let Some(prologue) = read_prologue(text, &LEARNING_OUTCOME, &mut cx) else {
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
    warn_preamble(&split.preamble, split.preamble_line, "'## Lens:'", &mut cx);

    let mut lenses = Vec::new();
    for section in &split.sections {
        if section.keyword == "lens" {
            lenses.extend(parse_reference(section, &LENS_REFERENCE, &mut cx));
        } else {
            cx.unknown_heading("section", &section.heading, section.line, &["Lens"]);
        }
    }

    cx.misplaced_headings(
        prologue.body,
        prologue.body_start_line,
        &[("Lens", SECTION_LEVEL)],
    );

    if split.sections.is_empty() {
        cx.error(prologue.body_start_line, "Learning outcome has no '## Lens:' sections");
    }

    cx.finish(LearningOutcome {
        id,
        discussion: fm.get_str("discussion").filter(|d| !d.trim().is_empty()),
        tier: fm.tier(),
        lenses,
    })
}
