//! Course documents: an ordered list of modules.

use coursevault_core::{Outcome, Tier};

use crate::markdown::{parse_fields, split_sections, wikilink::find_wikilinks};
use crate::schema::{COURSE, MODULE_REFERENCE};
use crate::validate::check_slug;

use super::common::{Context, flag, read_prologue, warn_preamble};
use super::{ParseOptions, Reference};

const SECTION_LEVEL: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub slug: String,
    pub slug_line: usize,
    pub title: String,
    pub tier: Tier,
    /// Module references in progression order.
    pub modules: Vec<Reference>,
}

/// Parses a course file.
///
/// Each `# Module:` section names its module either in the heading
/// (`# Module: [[modules/intro]]`) or in a `source::` field; the heading
/// wins when both are present.
pub fn parse_course(text: &str, file: &str, options: &ParseOptions) -> Outcome<Course> {
    let mut cx = Context::new(file, options);
    let Some(prologue) = read_prologue(text, &COURSE, &mut cx) else {
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

    let split = split_sections(prologue.body, SECTION_LEVEL, prologue.body_start_line);
    warn_preamble(&split.preamble, split.preamble_line, "module", &mut cx);

    let mut modules = Vec::new();
    for section in &split.sections {
        if section.keyword != "module" {
            cx.unknown_heading("section", &section.heading, section.line, &["Module"]);
            continue;
        }

        let block = parse_fields(&section.content, section.content_line);
        cx.check_block(&block, &MODULE_REFERENCE, section.line);

        let link = match find_wikilinks(&section.title).first() {
            Some(raw) => cx.link(raw, section.line),
            None if block.get("source").is_some() => cx.link_field(&block, "source"),
            None => {
                cx.error(section.line, "Module section has no link")
                    .suggestion = Some("Write '# Module: [[modules/name]]'".to_string());
                None
            }
        };

        if let Some(link) = link {
            let line = if section.title.contains("[[") {
                section.line
            } else {
                block.get("source").map_or(section.line, |f| f.line)
            };
            modules.push(Reference {
                link,
                optional: flag(&block, "optional"),
                line,
            });
        }
    }

    if modules.is_empty() && !cx.has_errors() {
        cx.warning(prologue.body_start_line, "Course has no modules");
    }

    cx.finish(Course {
        slug,
        slug_line,
        title: fm.get_str("title").unwrap_or_default().trim().to_string(),
        tier: fm.tier(),
        modules,
    })
}
