//! `key:: value` pseudo-fields in document bodies.
//!
//! Sections of a lens, module or learning outcome carry their settings as
//! Dataview-style inline fields:
//!
//! ```markdown
//! source:: [[articles/the-alignment-problem]]
//! optional:: true
//! content::
//! A value can span several lines.
//!
//! Blank lines inside it are kept.
//! ```
//!
//! A field runs until the next field line. Lines before the first field are
//! reported back as stray text so callers can warn about them.

use std::sync::LazyLock;

use regex::Regex;

static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*)::(.*)$").expect("Invalid field regex")
});

/// A named value with the absolute file line it was declared on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as written.
    pub key: String,
    /// Trimmed value; multi-line values keep their inner newlines.
    pub value: String,
    /// 1-based file line of the `key::` line.
    pub line: usize,
}

/// Fields parsed from a block of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBlock {
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Non-blank lines that appeared before the first field, with their lines.
    pub stray: Vec<(usize, String)>,
}

impl FieldBlock {
    /// First field named `key`.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Value of the first field named `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(|f| f.value.as_str())
    }
}

/// Returns `true` if `line` starts a `key::` field.
pub fn is_field_line(line: &str) -> bool {
    FIELD_RE.is_match(line.trim_end())
}

/// Parses `key:: value` fields out of `text`, whose first line is `first_line`.
///
/// ```rust
/// use coursevault_content::markdown::fields::parse_fields;
///
/// let block = parse_fields("from:: \"It was\"\nto:: the end.", 10);
/// assert_eq!(block.value("from"), Some("\"It was\""));
/// assert_eq!(block.get("to").unwrap().line, 11);
/// ```
pub fn parse_fields(text: &str, first_line: usize) -> FieldBlock {
    let mut block = FieldBlock::default();
    let mut current: Option<(Field, Vec<&str>)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = first_line + idx;
        let line = raw.trim_end();

        if let Some(caps) = FIELD_RE.captures(line) {
            if let Some((field, rest)) = current.take() {
                block.fields.push(finish(field, &rest));
            }
            let key = caps.get(1).map_or("", |m| m.as_str()).to_string();
            let inline = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
            current = Some((
                Field {
                    key,
                    value: inline,
                    line: line_no,
                },
                Vec::new(),
            ));
            continue;
        }

        match current.as_mut() {
            Some((_, rest)) => rest.push(line),
            None if !line.trim().is_empty() => block.stray.push((line_no, line.to_string())),
            None => {}
        }
    }

    if let Some((field, rest)) = current.take() {
        block.fields.push(finish(field, &rest));
    }
    block
}

fn finish(mut field: Field, continuation: &[&str]) -> Field {
    let tail = continuation.join("\n");
    let tail = tail.trim();
    if !tail.is_empty() {
        field.value = if field.value.is_empty() {
            tail.to_string()
        } else {
            format!("{}\n{}", field.value, tail)
        };
    }
    field
}

/// Parses a `true`/`false` value, case-insensitively.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
