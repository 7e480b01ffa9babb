//! Cross-file uniqueness checks, run once every file has parsed.

use std::collections::{BTreeSet, HashMap};

use coursevault_core::util::ids::uuid_key;
use coursevault_core::{ContentError, ContentKind};

use crate::document::Document;

/// Reports every UUID declared more than once across the whole vault.
///
/// All UUID-bearing fields share one namespace, so a module's `contentId`
/// colliding with a lens `id` is a duplicate. Comparison ignores case.
/// Documents are visited in the order given; each repeat is reported on
/// its own file and names the first declaration.
pub fn check_duplicate_ids<'a, I>(documents: I) -> Vec<ContentError>
where
    I: IntoIterator<Item = (&'a str, &'a Document)>,
{
    let mut first_seen: HashMap<String, (&'a str, &'static str)> = HashMap::new();
    let mut errors = Vec::new();

    for (path, document) in documents {
        for id in document.ids() {
            let key = uuid_key(id.value);
            match first_seen.get(&key) {
                Some(&(first_path, first_field)) => errors.push(
                    ContentError::error(
                        path,
                        format!(
                            "Duplicate id '{}' in {}: already used as {} in {}",
                            id.value, id.field, first_field, first_path
                        ),
                    )
                    .at_line(id.line)
                    .with_suggestion("Generate a new UUID for one of them"),
                ),
                None => {
                    first_seen.insert(key, (path, id.field));
                }
            }
        }
    }

    errors
}

/// Result of the slug check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugCheck {
    pub errors: Vec<ContentError>,
    /// Files whose slug repeats an earlier one and must be dropped.
    pub duplicates: BTreeSet<String>,
}

/// Finds slugs repeated within one content type.
pub fn check_duplicate_slugs<'a, I>(documents: I) -> SlugCheck
where
    I: IntoIterator<Item = (&'a str, &'a Document)>,
{
    let mut first_seen: HashMap<(ContentKind, &'a str), &'a str> = HashMap::new();
    let mut check = SlugCheck::default();

    for (path, document) in documents {
        let Some((slug, line)) = document.slug() else {
            continue;
        };
        let kind = document.kind();
        match first_seen.get(&(kind, slug)) {
            Some(first) => {
                check.errors.push(
                    ContentError::error(
                        path,
                        format!(
                            "Duplicate {} slug '{slug}': already used by {first}",
                            kind.label()
                        ),
                    )
                    .at_line(line),
                );
                check.duplicates.insert(path.to_string());
            }
            None => {
                first_seen.insert((kind, slug), path);
            }
        }
    }

    check
}
