//! Identifier utilities.
//!
//! Slug and UUID syntax checks used by the content validators, plus the
//! kebab-case normalization used to compare heading keywords.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("Invalid slug regex")
});

/// Normalize an identifier to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Replaces underscores with hyphens
/// 4. Collapses multiple whitespace into single hyphens
///
/// # Examples
///
/// ```
/// use coursevault_core::util::ids::normalize_id;
///
/// assert_eq!(normalize_id("Learning Outcome"), "learning-outcome");
/// assert_eq!(normalize_id("video_excerpt"), "video-excerpt");
/// assert_eq!(normalize_id("  Article-Excerpt  "), "article-excerpt");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

/// Checks a slug against `^[a-z0-9]+(-[a-z0-9]+)*$`.
///
/// ```
/// use coursevault_core::util::ids::is_valid_slug;
///
/// assert!(is_valid_slug("intro-101"));
/// assert!(!is_valid_slug("-invalid"));
/// assert!(!is_valid_slug("Intro"));
/// ```
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Checks that `value` is a UUID in canonical hyphenated form.
///
/// The `uuid` crate also accepts braced, URN and unhyphenated spellings;
/// vault content must use the 36-character `8-4-4-4-12` form.
///
/// ```
/// use coursevault_core::util::ids::is_valid_uuid;
///
/// assert!(is_valid_uuid("550e8400-e29b-41d4-a716-446655440000"));
/// assert!(!is_valid_uuid("550e8400e29b41d4a716446655440000"));
/// assert!(!is_valid_uuid("not-a-uuid"));
/// ```
pub fn is_valid_uuid(value: &str) -> bool {
    value.len() == 36 && Uuid::try_parse(value).is_ok()
}

/// Canonical key for comparing UUIDs (lowercase, trimmed).
pub fn uuid_key(value: &str) -> String {
    value.trim().to_lowercase()
}
