//! Wikilink target resolution against the content index.
//!
//! A target is tried, in order:
//!
//! 1. relative to the directory of the referencing file;
//! 2. relative to the vault root;
//! 3. as a file name matched anywhere in the vault, if exactly one file has it.
//!
//! `.md` is appended when missing. Anchors play no part in resolution.

use std::collections::BTreeSet;

use coursevault_content::WikiLink;
use coursevault_core::ContentError;
use coursevault_core::util::fuzzy::closest_match;
use coursevault_core::util::paths::{file_name, file_stem, join, parent_dir, with_md_extension};
use thiserror::Error;

use crate::index::ContentIndex;

/// Why a wikilink did not resolve to a single file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("Referenced file not found: '{target}'")]
    NotFound {
        target: String,
        /// Closest existing target, written the way the link was.
        suggestion: Option<String>,
    },

    #[error("Ambiguous reference '{target}': matches {}", .matches.join(", "))]
    Ambiguous { target: String, matches: Vec<String> },
}

impl LinkError {
    /// Converts into a diagnostic on the referencing file.
    pub fn into_content_error(self, file: &str, line: usize) -> ContentError {
        let err = ContentError::error(file, self.to_string()).at_line(line);
        match self {
            LinkError::NotFound {
                suggestion: Some(s),
                ..
            } => err.with_suggestion(format!("Did you mean '[[{s}]]'?")),
            LinkError::NotFound { .. } => err,
            LinkError::Ambiguous { .. } => {
                err.with_suggestion("Use the full path from the vault root")
            }
        }
    }
}

/// Resolves `link`, written in `from_file`, to an indexed vault path.
pub fn resolve_link(
    index: &ContentIndex,
    from_file: &str,
    link: &WikiLink,
    max_distance: usize,
) -> Result<String, LinkError> {
    let target = with_md_extension(link.target.trim());

    let relative = join(parent_dir(from_file), &target);
    if index.contains(&relative) {
        return Ok(relative);
    }
    if index.contains(&target) {
        return Ok(target);
    }

    let name = file_name(&target);
    let matches: Vec<&str> = index.paths().filter(|p| file_name(p) == name).collect();
    match matches.as_slice() {
        [single] => Ok((*single).to_string()),
        [] => Err(LinkError::NotFound {
            target: link.target.clone(),
            suggestion: suggest(index, from_file, &link.target, max_distance),
        }),
        many => Err(LinkError::Ambiguous {
            target: link.target.clone(),
            matches: many.iter().map(|p| (*p).to_string()).collect(),
        }),
    }
}

/// Closest file stem in the directories the target could have meant.
fn suggest(index: &ContentIndex, from_file: &str, target: &str, max_distance: usize) -> Option<String> {
    let target_dir = parent_dir(target);
    let dirs: BTreeSet<String> = [
        target_dir.to_string(),
        join(parent_dir(from_file), target_dir),
    ]
    .into_iter()
    .map(|d| d.trim_end_matches('/').to_string())
    .collect();

    let stems: Vec<&str> = index
        .paths()
        .filter(|p| dirs.contains(parent_dir(p)))
        .map(file_stem)
        .collect();

    closest_match(file_stem(target), stems.iter().copied(), max_distance)
        .map(|stem| join(target_dir, stem))
}
