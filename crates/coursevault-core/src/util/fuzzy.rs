//! Edit-distance matching for "did you mean" suggestions.
//!
//! This is the only place string distance is computed; the field-typo
//! detector and the missing-file suggester both call [`closest_match`].

/// Default maximum distance for field-name typo warnings.
pub const FIELD_TYPO_MAX_DISTANCE: usize = 2;

/// Default maximum distance for missing-file suggestions.
pub const FILE_SUGGESTION_MAX_DISTANCE: usize = 3;

/// Case-insensitive Damerau-Levenshtein distance.
///
/// ```
/// use coursevault_core::util::fuzzy::edit_distance;
///
/// assert_eq!(edit_distance("title", "titel"), 1);
/// assert_eq!(edit_distance("Source_URL", "source_url"), 0);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::damerau_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Returns the candidate closest to `needle` within `max_distance`.
///
/// Exact matches (distance 0) are returned too. Ties go to the earliest
/// candidate, so callers can list preferred candidates first.
///
/// ```
/// use coursevault_core::util::fuzzy::closest_match;
///
/// let fields = ["title", "slug", "contentId"];
/// assert_eq!(closest_match("contentid", fields, 2), Some("contentId"));
/// assert_eq!(closest_match("sulg", fields, 2), Some("slug"));
/// assert_eq!(closest_match("category", fields, 2), None);
/// ```
pub fn closest_match<'a, I>(needle: &str, candidates: I, max_distance: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(usize, &'a str)> = None;
    for candidate in candidates {
        let distance = edit_distance(needle, candidate);
        if distance > max_distance {
            continue;
        }
        match best {
            Some((d, _)) if d <= distance => {}
            _ => best = Some((distance, candidate)),
        }
    }
    best.map(|(_, candidate)| candidate)
}
