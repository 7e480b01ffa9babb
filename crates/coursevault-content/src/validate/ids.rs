//! UUID and slug checks for a single document.

use coursevault_core::ContentError;
use coursevault_core::util::ids::{is_valid_slug, is_valid_uuid};

use crate::markdown::Frontmatter;

/// Checks an optional frontmatter UUID field.
///
/// The value must be a YAML string: an unquoted value that YAML reads as a
/// number or boolean is rejected even if its text would be a valid UUID.
/// Returns the value when it is present and valid.
pub fn check_frontmatter_uuid(
    frontmatter: &Frontmatter,
    key: &str,
    file: &str,
    errors: &mut Vec<ContentError>,
) -> Option<String> {
    let value = frontmatter.get_str(key)?;
    let line = frontmatter.line_of(key);

    if !frontmatter.is_string(key) {
        errors.push(
            ContentError::error(file, format!("Field '{key}' must be a string UUID, got '{value}'"))
                .at_optional_line(line)
                .with_suggestion(format!("Quote the value: {key}: \"...\"")),
        );
        return None;
    }

    match uuid_error(&value, key, file) {
        Some(err) => {
            errors.push(err.at_optional_line(line));
            None
        }
        None => Some(value.trim().to_string()),
    }
}

/// Checks a body-field UUID (`id:: ...`).
pub fn check_field_uuid(
    value: &str,
    key: &str,
    file: &str,
    line: usize,
) -> Result<String, ContentError> {
    match uuid_error(value, key, file) {
        Some(err) => Err(err.at_line(line)),
        None => Ok(value.trim().to_string()),
    }
}

fn uuid_error(value: &str, key: &str, file: &str) -> Option<ContentError> {
    let trimmed = value.trim();
    if is_valid_uuid(trimmed) {
        return None;
    }
    Some(
        ContentError::error(file, format!("Invalid UUID '{trimmed}' in field '{key}'"))
            .with_suggestion("Use the 8-4-4-4-12 hexadecimal form, e.g. 550e8400-e29b-41d4-a716-446655440000"),
    )
}

/// Checks a slug's format, suggesting a corrected slug when one exists.
///
/// ```rust
/// use coursevault_content::validate::check_slug;
///
/// assert!(check_slug("intro-101", "m.md", 2).is_none());
///
/// let err = check_slug("Intro To AI", "m.md", 2).unwrap();
/// assert_eq!(err.suggestion.as_deref(), Some("Try 'intro-to-ai'"));
/// ```
pub fn check_slug(slug: &str, file: &str, line: usize) -> Option<ContentError> {
    if is_valid_slug(slug) {
        return None;
    }
    let err = ContentError::error(
        file,
        format!("Invalid slug '{slug}': use lowercase letters, digits and single hyphens"),
    )
    .at_line(line);

    let fixed = suggest_slug(slug);
    if fixed.is_empty() {
        Some(err)
    } else {
        Some(err.with_suggestion(format!("Try '{fixed}'")))
    }
}

/// Lowercases and collapses every non-alphanumeric run into one hyphen.
fn suggest_slug(slug: &str) -> String {
    slug.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
