//! The one field checker every parser uses.

use std::collections::HashSet;

use coursevault_core::ContentError;
use coursevault_core::util::fuzzy::closest_match;

use crate::markdown::{Field, parse_bool};
use crate::schema::{Schema, SchemaFamily, family_schemas, known_fields};

/// Checks a field map against `schema`.
///
/// `line` is where missing-field errors are reported (the heading or the
/// top of the file); every other diagnostic sits on the offending field.
///
/// | Problem | Severity |
/// |---|---|
/// | required field absent | error ("Missing required field") |
/// | required field blank | error ("is empty") |
/// | boolean field not `true`/`false` | error |
/// | field of a sibling section/segment schema | warning ("not applicable") |
/// | unknown field within `max_distance` of a known one | warning, with suggestion |
/// | repeated field | warning |
///
/// Unknown fields that resemble nothing are ignored, as are frontmatter
/// fields that some other content type uses.
pub fn check_fields(
    fields: &[Field],
    schema: &Schema,
    file: &str,
    line: usize,
    max_distance: usize,
) -> Vec<ContentError> {
    let mut errors = Vec::new();

    for &required in schema.required {
        match fields.iter().find(|f| f.key == required) {
            None => errors.push(
                ContentError::error(
                    file,
                    format!("Missing required field '{required}' in {}", schema.name),
                )
                .at_line(line),
            ),
            Some(field) if field.value.trim().is_empty() => errors.push(
                ContentError::error(
                    file,
                    format!("Field '{required}' is empty in {}", schema.name),
                )
                .at_line(field.line),
            ),
            Some(_) => {}
        }
    }

    let mut seen = HashSet::new();
    for field in fields {
        let key = field.key.as_str();

        if !seen.insert(key) {
            errors.push(
                ContentError::warning(
                    file,
                    format!("Duplicate field '{key}' in {}; the first value is used", schema.name),
                )
                .at_line(field.line),
            );
            continue;
        }

        if schema.knows(key) {
            if schema.is_boolean(key) && parse_bool(&field.value).is_none() {
                errors.push(
                    ContentError::error(
                        file,
                        format!(
                            "Field '{key}' must be 'true' or 'false', got '{}'",
                            field.value.trim()
                        ),
                    )
                    .at_line(field.line),
                );
            }
            continue;
        }

        if let Some(owner) = sibling_owner(schema, key) {
            if schema.family != SchemaFamily::Frontmatter {
                errors.push(
                    ContentError::warning(
                        file,
                        format!(
                            "Field '{key}' is not applicable to {}s (it belongs to {}s)",
                            schema.name, owner.name
                        ),
                    )
                    .at_line(field.line),
                );
            }
            continue;
        }

        let candidates = schema.fields().chain(known_fields(schema.family));
        if let Some(suggestion) = closest_match(key, candidates, max_distance) {
            errors.push(
                ContentError::warning(file, format!("Unknown field '{key}' in {}", schema.name))
                    .at_line(field.line)
                    .with_suggestion(format!("Did you mean '{suggestion}'?")),
            );
        }
    }

    errors
}

/// Another schema in the same family that accepts `key`.
fn sibling_owner(schema: &Schema, key: &str) -> Option<&'static Schema> {
    family_schemas(schema.family)
        .iter()
        .copied()
        .find(|other| other.name != schema.name && other.knows(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CHAT_SEGMENT, LENS, MODULE, TEXT_SEGMENT};

    fn field(key: &str, value: &str, line: usize) -> Field {
        Field {
            key: key.to_string(),
            value: value.to_string(),
            line,
        }
    }

    // ------------------------------------------------------------------------
    // Required fields
    // ------------------------------------------------------------------------

    #[test]
    fn test_missing_and_empty_are_distinct() {
        let fields = vec![field("title", "   ", 3)];
        let errors = check_fields(&fields, &MODULE, "modules/a.md", 1, 2);

        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.starts_with("Missing required field 'slug'"));
        assert_eq!(errors[0].line, Some(1));
        assert!(errors[1].message.contains("'title' is empty"));
        assert_eq!(errors[1].line, Some(3));
        assert!(errors.iter().all(ContentError::is_error));
    }

    #[test]
    fn test_complete_fields_pass() {
        let fields = vec![field("slug", "intro", 2), field("title", "Intro", 3)];
        assert!(check_fields(&fields, &MODULE, "m.md", 1, 2).is_empty());
    }

    // ------------------------------------------------------------------------
    // Booleans
    // ------------------------------------------------------------------------

    #[test]
    fn test_bad_boolean() {
        let fields = vec![
            field("instructions", "Ask", 5),
            field("hidePreviousContentFromUser", "yes", 6),
        ];
        let errors = check_fields(&fields, &CHAT_SEGMENT, "l.md", 4, 2);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_error());
        assert!(errors[0].message.contains("got 'yes'"));
    }

    #[test]
    fn test_boolean_is_case_insensitive() {
        let fields = vec![field("content", "Hi", 5), field("optional", "TRUE", 6)];
        assert!(check_fields(&fields, &TEXT_SEGMENT, "l.md", 4, 2).is_empty());
    }

    // ------------------------------------------------------------------------
    // Typos and applicability
    // ------------------------------------------------------------------------

    #[test]
    fn test_typo_warning_with_suggestion() {
        let fields = vec![field("id", "x", 2), field("titel", "T", 3)];
        let errors = check_fields(&fields, &LENS, "lenses/a.md", 1, 2);
        assert_eq!(errors.len(), 1);
        assert!(!errors[0].is_error());
        assert_eq!(errors[0].suggestion.as_deref(), Some("Did you mean 'title'?"));
    }

    #[test]
    fn test_unrelated_field_is_silent() {
        let fields = vec![field("id", "x", 2), field("category", "misc", 3)];
        assert!(check_fields(&fields, &LENS, "lenses/a.md", 1, 2).is_empty());
    }

    #[test]
    fn test_frontmatter_field_from_other_type_is_silent() {
        let fields = vec![field("id", "x", 2), field("author", "Someone", 3)];
        assert!(check_fields(&fields, &LENS, "lenses/a.md", 1, 2).is_empty());
    }

    #[test]
    fn test_segment_field_not_applicable() {
        let fields = vec![field("content", "Hi", 5), field("instructions", "Ask", 6)];
        let errors = check_fields(&fields, &TEXT_SEGMENT, "lenses/a.md", 4, 2);
        assert_eq!(errors.len(), 1);
        assert!(!errors[0].is_error());
        assert!(errors[0].message.contains("not applicable to Text segments"));
    }

    #[test]
    fn test_threshold_is_respected() {
        let fields = vec![field("content", "Hi", 5), field("contnet", "x", 6)];
        assert_eq!(check_fields(&fields, &TEXT_SEGMENT, "a.md", 4, 2).len(), 1);
        assert!(check_fields(&fields, &TEXT_SEGMENT, "a.md", 4, 0).is_empty());
    }

    #[test]
    fn test_duplicate_field_warns() {
        let fields = vec![field("content", "A", 5), field("content", "B", 6)];
        let errors = check_fields(&fields, &TEXT_SEGMENT, "a.md", 4, 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, Some(6));
    }
}
