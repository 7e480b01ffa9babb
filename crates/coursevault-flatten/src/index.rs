//! The set of parsed vault files that references resolve against.

use std::collections::BTreeMap;

use coursevault_content::Document;
use coursevault_core::{ContentKind, Tier};

/// One classified vault file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFile {
    pub kind: ContentKind,
    /// Taken from the frontmatter even when the body failed to parse.
    pub tier: Tier,
    /// The parsed document, or `None` when the file had errors.
    pub document: Option<Document>,
}

/// Parsed documents and sidecar files keyed by vault path.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    files: BTreeMap<String, IndexedFile>,
    sidecars: BTreeMap<String, String>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a classified `.md` file and its parse result.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        kind: ContentKind,
        tier: Tier,
        document: Option<Document>,
    ) {
        self.files.insert(
            path.into(),
            IndexedFile {
                kind,
                tier,
                document,
            },
        );
    }

    /// Records the raw text of a `.timestamps.json` sidecar.
    pub fn insert_sidecar(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.sidecars.insert(path.into(), text.into());
    }

    pub fn get(&self, path: &str) -> Option<&IndexedFile> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn sidecar(&self, path: &str) -> Option<&str> {
        self.sidecars.get(path).map(String::as_str)
    }

    /// All indexed `.md` paths, in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Every successfully parsed document with its path, in path order.
    pub fn documents(&self) -> impl Iterator<Item = (&str, &Document)> {
        self.files
            .iter()
            .filter_map(|(path, file)| file.document.as_ref().map(|doc| (path.as_str(), doc)))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
