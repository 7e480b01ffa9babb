//! Heading-delimited sections.
//!
//! Document structure is expressed with ATX headings at a fixed level per
//! content type (`#` for module items, `###` for lens sections, `####` for
//! segments, ...). Headings at any other level are ordinary content, and
//! nothing inside fenced code blocks counts as a heading.
//!
//! # Example
//!
//! ```rust
//! use coursevault_content::markdown::sections::split_sections;
//!
//! let body = "intro\n### Page: Welcome\n#### Text\ncontent:: Hi\n### Article: Source\nsource:: [[a]]\n";
//! let split = split_sections(body, 3, 1);
//!
//! assert_eq!(split.preamble.trim(), "intro");
//! assert_eq!(split.sections.len(), 2);
//! assert_eq!(split.sections[0].keyword, "page");
//! assert_eq!(split.sections[0].title, "Welcome");
//! assert_eq!(split.sections[0].line, 2);
//! assert_eq!(split.sections[1].content_line, 6);
//! ```

use std::sync::LazyLock;

use coursevault_core::util::ids::normalize_id;
use regex::Regex;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+?)\s*#*\s*$").expect("Invalid section heading regex")
});

/// A heading at the split level and the content beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text without the `#` markers.
    pub heading: String,
    /// Kebab-case keyword before the first `:` (or the whole heading).
    pub keyword: String,
    /// Text after the first `:`, trimmed (empty when there is no colon).
    pub title: String,
    /// 1-based file line of the heading.
    pub line: usize,
    /// Everything up to the next heading at the split level.
    pub content: String,
    /// 1-based file line of the first content line.
    pub content_line: usize,
}

/// The result of splitting text at one heading level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSplit {
    /// Text before the first heading.
    pub preamble: String,
    /// 1-based file line of the preamble's first line.
    pub preamble_line: usize,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

/// Splits `text` at headings of exactly `level`.
///
/// Headings at every other level stay inside the surrounding content;
/// callers look for misplaced structural headings with [`headings`].
pub fn split_sections(text: &str, level: usize, first_line: usize) -> SectionSplit {
    let mut split = SectionSplit {
        preamble_line: first_line,
        ..SectionSplit::default()
    };
    let mut preamble: Vec<&str> = Vec::new();
    let mut current: Option<(Section, Vec<&str>)> = None;
    let mut in_fence = false;

    for (idx, line) in text.lines().enumerate() {
        let line_no = first_line + idx;

        if is_fence(line) {
            in_fence = !in_fence;
        }

        let heading = if in_fence {
            None
        } else {
            parse_heading(line).filter(|(l, _)| *l == level)
        };

        match heading {
            Some((_, heading)) => {
                if let Some((section, lines)) = current.take() {
                    split.sections.push(close(section, &lines));
                }
                let (keyword, title) = heading_label(heading);
                current = Some((
                    Section {
                        heading: heading.to_string(),
                        keyword,
                        title,
                        line: line_no,
                        content: String::new(),
                        content_line: line_no + 1,
                    },
                    Vec::new(),
                ));
            }
            None => match current.as_mut() {
                Some((_, lines)) => lines.push(line),
                None => preamble.push(line),
            },
        }
    }

    if let Some((section, lines)) = current.take() {
        split.sections.push(close(section, &lines));
    }
    split.preamble = preamble.join("\n");
    split
}

fn close(mut section: Section, lines: &[&str]) -> Section {
    section.content = lines.join("\n");
    section
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Parses an ATX heading line into `(level, text)`.
pub fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let text = caps.get(2)?.as_str();
    Some((level, text))
}

/// Splits a heading into its kebab-case keyword and title.
///
/// ```rust
/// use coursevault_content::markdown::sections::heading_label;
///
/// let (keyword, title) = heading_label("Learning Outcome: Basics");
/// assert_eq!(keyword, "learning-outcome");
/// assert_eq!(title, "Basics");
///
/// let (keyword, title) = heading_label("Article-excerpt");
/// assert_eq!(keyword, "article-excerpt");
/// assert!(title.is_empty());
/// ```
pub fn heading_label(heading: &str) -> (String, String) {
    match heading.split_once(':') {
        Some((keyword, title)) => (normalize_id(keyword), title.trim().to_string()),
        None => (normalize_id(heading), String::new()),
    }
}

/// A heading line found outside code fences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine {
    /// 1-based file line.
    pub line: usize,
    /// Number of `#` markers.
    pub level: usize,
    /// Heading text without the markers.
    pub text: String,
}

/// Every ATX heading in `text` outside code fences, at any level.
///
/// Used to flag structural headings placed at the wrong depth.
pub fn headings(text: &str, first_line: usize) -> Vec<HeadingLine> {
    let mut in_fence = false;
    let mut found = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if is_fence(line) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some((level, heading)) = parse_heading(line) {
            found.push(HeadingLine {
                line: first_line + idx,
                level,
                text: heading.to_string(),
            });
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_level_one() {
        let body = "# Learning Outcome:\nsource:: [[a]]\n\n# Page: Intro\n## Text\ncontent:: hi";
        let split = split_sections(body, 1, 10);
        assert_eq!(split.sections.len(), 2);
        assert_eq!(split.sections[0].keyword, "learning-outcome");
        assert_eq!(split.sections[0].line, 10);
        assert_eq!(split.sections[0].content_line, 11);
        assert_eq!(split.sections[1].title, "Intro");
        assert!(split.sections[1].content.contains("## Text"));
    }

    #[test]
    fn test_deeper_headings_stay_in_content() {
        let body = "### Page: A\n##### Sub heading\ntext";
        let split = split_sections(body, 3, 1);
        assert_eq!(split.sections.len(), 1);
        assert!(split.sections[0].content.contains("##### Sub heading"));
    }

    #[test]
    fn test_headings_in_code_fence_ignored() {
        let body = "### Page: A\n```\n### Page: Not real\n```\n";
        let split = split_sections(body, 3, 1);
        assert_eq!(split.sections.len(), 1);
    }

    #[test]
    fn test_no_sections() {
        let split = split_sections("just text\nmore", 2, 4);
        assert!(split.sections.is_empty());
        assert_eq!(split.preamble, "just text\nmore");
        assert_eq!(split.preamble_line, 4);
    }

    #[test]
    fn test_parse_heading_closing_hashes() {
        assert_eq!(parse_heading("## Text ##"), Some((2, "Text")));
        assert_eq!(parse_heading("#NoSpace"), None);
        assert_eq!(parse_heading("plain"), None);
    }

    #[test]
    fn test_headings_outside_fences() {
        let text = "### Page: A\n## Lens:\n```\n# fenced\n```";
        let found = headings(text, 7);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].line, 8);
        assert_eq!(found[1].level, 2);
        assert_eq!(found[1].text, "Lens:");
    }
}
