//! YAML frontmatter extraction from markdown files.
//!
//! Frontmatter is metadata at the start of a markdown file, delimited by `---`:
//!
//! ```markdown
//! ---
//! slug: intro
//! title: Introduction
//! tags:
//!   - wip
//! ---
//!
//! # Learning Outcome:
//! source:: [[learning outcomes/core-ideas]]
//! ```
//!
//! Unlike plain Obsidian notes, every vault document must carry frontmatter,
//! so a missing or unclosed block is an error rather than "no metadata".
//!
//! # Usage
//!
//! ```rust
//! use coursevault_content::markdown::extract_frontmatter;
//!
//! let content = "---\ntitle: Test\n---\n\nBody";
//! let result = extract_frontmatter(content).unwrap();
//!
//! assert_eq!(result.frontmatter.get_str("title").as_deref(), Some("Test"));
//! assert_eq!(result.body.trim(), "Body");
//! assert_eq!(result.body_start_line, 4);
//! ```

use std::collections::HashMap;

use coursevault_core::Tier;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use super::fields::Field;

/// Why a frontmatter block could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontmatterError {
    /// The file does not start with `---`.
    #[error("Missing frontmatter: file must start with a '---' line")]
    Missing,
    /// An opening `---` was found but no closing one.
    #[error("Unclosed frontmatter: no closing '---' delimiter found")]
    Unclosed,
    /// The block is not valid YAML.
    #[error("Invalid frontmatter YAML: {0}")]
    InvalidYaml(String),
    /// The block is YAML but not a key/value mapping.
    #[error("Invalid frontmatter: expected key/value pairs")]
    NotAMapping,
}

// ============================================================================
// Frontmatter
// ============================================================================

/// Parsed frontmatter: the YAML mapping plus the line each key sits on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    mapping: Mapping,
    lines: HashMap<String, usize>,
}

impl Frontmatter {
    /// Raw YAML value of a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.mapping.get(key)
    }

    /// Returns `true` if the key is present (even with an empty value).
    pub fn contains(&self, key: &str) -> bool {
        self.mapping.contains_key(key)
    }

    /// A scalar field rendered as a string.
    ///
    /// Numbers and booleans are stringified; `null` and collections yield `None`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        scalar_to_string(self.get(key)?)
    }

    /// Returns `true` when the key holds a YAML string (not a coerced scalar).
    pub fn is_string(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::String(_)))
    }

    /// A list field; a comma-separated string is split into items.
    ///
    /// Returns an empty vec if the field is missing.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Sequence(seq)) => seq.iter().filter_map(scalar_to_string).collect(),
            Some(Value::String(s)) => s
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// 1-based file line of a key.
    pub fn line_of(&self, key: &str) -> Option<usize> {
        self.lines.get(key).copied()
    }

    /// Content tier derived from `tags`.
    pub fn tier(&self) -> Tier {
        Tier::from_tags(self.get_string_list("tags"))
    }

    /// Every top-level key as a [`Field`], in document order.
    ///
    /// Collections are rendered as a non-empty placeholder so that required
    /// checks treat them as present; only scalars carry their real value.
    pub fn fields(&self) -> Vec<Field> {
        self.mapping
            .iter()
            .filter_map(|(key, value)| {
                let key = key.as_str()?;
                let rendered = match value {
                    Value::Sequence(seq) if seq.is_empty() => String::new(),
                    Value::Sequence(_) | Value::Mapping(_) => "[...]".to_string(),
                    other => scalar_to_string(other).unwrap_or_default(),
                };
                Some(Field {
                    key: key.to_string(),
                    value: rendered,
                    line: self.line_of(key).unwrap_or(1),
                })
            })
            .collect()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Result of frontmatter extraction.
#[derive(Debug, Clone)]
pub struct FrontmatterResult<'a> {
    /// The parsed frontmatter.
    pub frontmatter: Frontmatter,
    /// Body content after the closing delimiter.
    pub body: &'a str,
    /// 1-based line number of the first body line.
    pub body_start_line: usize,
}

/// Extract YAML frontmatter from markdown content.
///
/// # Behavior
///
/// - No opening `---` on the first line: [`FrontmatterError::Missing`]
/// - Opening without closing `---`: [`FrontmatterError::Unclosed`]
/// - YAML that does not parse, or is not a mapping: `InvalidYaml` / `NotAMapping`
/// - An empty block (`---\n---`) is an empty mapping
///
/// A leading UTF-8 byte-order mark and CRLF line endings are tolerated.
pub fn extract_frontmatter(content: &str) -> Result<FrontmatterResult<'_>, FrontmatterError> {
    let mut lines = content.split_inclusive('\n');

    let first = lines.next().ok_or(FrontmatterError::Missing)?;
    if first.trim_start_matches('\u{feff}').trim_end() != "---" {
        return Err(FrontmatterError::Missing);
    }

    let mut offset = first.len();
    let mut yaml_lines: Vec<&str> = Vec::new();
    let mut closing_line = None;

    for (idx, line) in lines.enumerate() {
        offset += line.len();
        if line.trim_end() == "---" {
            // Opening delimiter is line 1, so the first YAML line is line 2.
            closing_line = Some(idx + 2);
            break;
        }
        yaml_lines.push(line);
    }

    let closing_line = closing_line.ok_or(FrontmatterError::Unclosed)?;
    let body = &content[offset..];

    let yaml: String = yaml_lines.concat();
    let mapping = if yaml.trim().is_empty() {
        Mapping::new()
    } else {
        match serde_yaml::from_str::<Value>(&yaml) {
            Ok(Value::Mapping(m)) => m,
            Ok(Value::Null) => Mapping::new(),
            Ok(_) => return Err(FrontmatterError::NotAMapping),
            Err(e) => return Err(FrontmatterError::InvalidYaml(e.to_string())),
        }
    };

    Ok(FrontmatterResult {
        frontmatter: Frontmatter {
            mapping,
            lines: key_lines(&yaml_lines),
        },
        body,
        body_start_line: closing_line + 1,
    })
}

/// Maps each top-level key to its 1-based file line.
fn key_lines(yaml_lines: &[&str]) -> HashMap<String, usize> {
    let mut lines = HashMap::new();
    for (idx, line) in yaml_lines.iter().enumerate() {
        if line.starts_with(|c: char| c.is_whitespace() || c == '-' || c == '#') {
            continue;
        }
        if let Some((key, _)) = line.split_once(':') {
            let key = key.trim().trim_matches(|c| c == '"' || c == '\'');
            lines.entry(key.to_string()).or_insert(idx + 2);
        }
    }
    lines
}

// ============================================================================
// Tests
// ============================================================================
