//! Plumbing shared by the content-type parsers.

use coursevault_core::util::fuzzy::closest_match;
use coursevault_core::{ContentError, Outcome, has_blocking_errors};

use crate::markdown::{
    FieldBlock, Frontmatter, Section, WikiLink, WikiLinkError, extract_frontmatter,
    heading_label, headings, parse_bool, parse_fields, parse_wikilink,
};
use crate::schema::Schema;
use crate::validate::{check_fields, check_frontmatter_uuid};

use super::{IdField, ParseOptions, Reference};

/// Per-file parse state: where diagnostics go and how strict to be.
pub(crate) struct Context<'a> {
    pub file: &'a str,
    pub options: &'a ParseOptions,
    pub errors: Vec<ContentError>,
}

impl<'a> Context<'a> {
    pub fn new(file: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            file,
            options,
            errors: Vec::new(),
        }
    }

    pub fn error(&mut self, line: usize, message: impl Into<String>) -> &mut ContentError {
        self.errors
            .push(ContentError::error(self.file, message).at_line(line));
        self.last()
    }

    pub fn warning(&mut self, line: usize, message: impl Into<String>) -> &mut ContentError {
        self.errors
            .push(ContentError::warning(self.file, message).at_line(line));
        self.last()
    }

    fn last(&mut self) -> &mut ContentError {
        let idx = self.errors.len() - 1;
        &mut self.errors[idx]
    }

    /// Runs the schema check over a field block and warns about stray text.
    pub fn check_block(&mut self, block: &FieldBlock, schema: &Schema, line: usize) {
        let found = check_fields(
            &block.fields,
            schema,
            self.file,
            line,
            self.options.field_max_distance,
        );
        self.errors.extend(found);
        for (stray_line, text) in &block.stray {
            self.warning(
                *stray_line,
                format!("Text outside any field is ignored in {}: '{}'", schema.name, text.trim()),
            )
            .suggestion = Some("Put it in a field, e.g. 'content:: ...'".to_string());
        }
    }

    /// Parses a wikilink field, reporting syntax problems.
    ///
    /// Only the first line of the value is the link; anything after it is
    /// ignored with a warning.
    pub fn link_field(&mut self, block: &FieldBlock, key: &str) -> Option<WikiLink> {
        let field = block.get(key)?;
        let mut lines = field.value.lines();
        let first = lines.next().unwrap_or_default().trim().to_string();
        if first.is_empty() {
            return None;
        }
        let line = field.line;
        if lines.any(|l| !l.trim().is_empty()) {
            self.warning(line, format!("Text after the link in '{key}' is ignored"));
        }
        self.link(&first, line)
    }

    /// Parses one wikilink, reporting syntax problems at `line`.
    pub fn link(&mut self, text: &str, line: usize) -> Option<WikiLink> {
        match parse_wikilink(text) {
            Ok(link) => Some(link),
            Err(err) => {
                let hint = match err {
                    WikiLinkError::MissingBracket(_) => Some("Write the link as [[path/to/file]]"),
                    WikiLinkError::PathTraversal(_) => {
                        Some("Link relative to the vault root instead of using '..'")
                    }
                    WikiLinkError::Empty => None,
                };
                let entry = self.error(line, err.to_string());
                if let Some(hint) = hint {
                    entry.suggestion = Some(hint.to_string());
                }
                None
            }
        }
    }

    /// Reports a heading that is not one of `expected` at this level.
    pub fn unknown_heading(&mut self, what: &str, heading: &str, line: usize, expected: &[&str]) {
        let (keyword, _) = heading_label(heading);
        let normalized: Vec<String> = expected.iter().map(|e| heading_label(e).0).collect();
        let suggestion = closest_match(
            &keyword,
            normalized.iter().map(String::as_str),
            self.options.field_max_distance,
        )
        .and_then(|m| normalized.iter().position(|n| n == m))
        .map(|i| expected[i]);

        let known = expected.join("', '");
        let entry = self.error(line, format!("Unknown {what} type '{heading}'"));
        entry.suggestion = Some(match suggestion {
            Some(s) => format!("Did you mean '{s}'?"),
            None => format!("Expected one of '{known}'"),
        });
    }

    /// Warns about structural headings written at the wrong level.
    ///
    /// `rules` pairs a heading keyword with the level it must sit at.
    pub fn misplaced_headings(&mut self, text: &str, first_line: usize, rules: &[(&str, usize)]) {
        for heading in headings(text, first_line) {
            let (keyword, _) = heading_label(&heading.text);
            let Some(&(_, wanted)) = rules.iter().find(|(k, _)| heading_label(k).0 == keyword)
            else {
                continue;
            };
            if heading.level != wanted {
                let hashes = "#".repeat(wanted);
                self.warning(
                    heading.line,
                    format!(
                        "Heading '{}' is at level {} and is treated as text",
                        heading.text, heading.level
                    ),
                )
                .suggestion = Some(format!("Use '{hashes} {}'", heading.text));
            }
        }
    }

    /// Finishes a parse: any `error` entry drops the document.
    pub fn finish<T>(self, value: T) -> Outcome<T> {
        if has_blocking_errors(&self.errors) {
            Outcome::failed(self.errors)
        } else {
            Outcome {
                value: Some(value),
                errors: self.errors,
            }
        }
    }

    pub fn fail<T>(self) -> Outcome<T> {
        Outcome::failed(self.errors)
    }

    pub fn has_errors(&self) -> bool {
        has_blocking_errors(&self.errors)
    }
}

/// Frontmatter and body of a file that passed the frontmatter stage.
pub(crate) struct Prologue<'t> {
    pub frontmatter: Frontmatter,
    pub body: &'t str,
    pub body_start_line: usize,
}

/// Extracts frontmatter and checks it against `schema`.
///
/// Returns `None` when the block could not be read at all. Schema problems
/// are recorded in `cx` and the prologue is still returned, so callers
/// check [`Context::has_errors`] before parsing the body.
pub(crate) fn read_prologue<'t>(
    text: &'t str,
    schema: &Schema,
    cx: &mut Context<'_>,
) -> Option<Prologue<'t>> {
    let extracted = match extract_frontmatter(text) {
        Ok(extracted) => extracted,
        Err(err) => {
            cx.error(1, err.to_string());
            return None;
        }
    };

    let fields = extracted.frontmatter.fields();
    let found = check_fields(&fields, schema, cx.file, 1, cx.options.field_max_distance);
    cx.errors.extend(found);

    Some(Prologue {
        frontmatter: extracted.frontmatter,
        body: extracted.body,
        body_start_line: extracted.body_start_line,
    })
}

/// Reads a boolean field that the schema check already validated.
pub(crate) fn flag(block: &FieldBlock, key: &str) -> bool {
    block
        .value(key)
        .and_then(parse_bool)
        .unwrap_or(false)
}

/// A non-blank field value, trimmed.
pub(crate) fn text_value(block: &FieldBlock, key: &str) -> Option<String> {
    block
        .value(key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// A validated frontmatter UUID with its line.
pub(crate) fn frontmatter_id(
    frontmatter: &Frontmatter,
    key: &str,
    cx: &mut Context<'_>,
) -> Option<IdField> {
    let file = cx.file;
    check_frontmatter_uuid(frontmatter, key, file, &mut cx.errors).map(|value| IdField {
        value,
        line: frontmatter.line_of(key).unwrap_or(1),
    })
}

/// A section whose fields point at another document through `source::`.
pub(crate) fn parse_reference(
    section: &Section,
    schema: &Schema,
    cx: &mut Context<'_>,
) -> Option<Reference> {
    let block = parse_fields(&section.content, section.content_line);
    cx.check_block(&block, schema, section.line);
    let link = cx.link_field(&block, "source")?;
    Some(Reference {
        link,
        optional: flag(&block, "optional"),
        line: block.get("source").map_or(section.line, |f| f.line),
    })
}

/// Warns about non-blank text before the first structural heading.
pub(crate) fn warn_preamble(text: &str, first_line: usize, what: &str, cx: &mut Context<'_>) {
    if let Some((idx, _)) = text.lines().enumerate().find(|(_, l)| !l.trim().is_empty()) {
        cx.warning(
            first_line + idx,
            format!("Text before the first {what} heading is ignored"),
        );
    }
}
