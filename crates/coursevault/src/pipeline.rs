//! The top-level pipeline: file map in, flattened modules and courses out.

use std::collections::HashSet;

use coursevault_content::markdown::extract_frontmatter;
use coursevault_content::{
    Document, ParseOptions, check_duplicate_ids, check_duplicate_slugs, parse_document,
};
use coursevault_core::{Config, ContentError, FileMap, Severity, Tier, has_blocking_errors};
use coursevault_flatten::{ContentIndex, FlatCourse, FlatModule, FlattenOptions, Flattener};
use serde::{Deserialize, Serialize};

const SIDECAR_SUFFIX: &str = ".timestamps.json";

/// Everything one run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub modules: Vec<FlatModule>,
    pub courses: Vec<FlatCourse>,
    pub errors: Vec<ContentError>,
}

impl ProcessResult {
    /// Whether any `error`-severity entry blocks publishing.
    pub fn has_blocking_errors(&self) -> bool {
        has_blocking_errors(&self.errors)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.errors.iter().filter(|e| e.severity == severity).count()
    }
}

/// Runs parse, validate, flatten and bundle over a whole vault.
///
/// `files` maps `/`-separated vault-relative paths to file text: every `.md`
/// file plus any `.timestamps.json` sidecars. Never fails; the result holds
/// the modules and courses that could be built and every diagnostic, deduped
/// and ordered by stage, then by file path.
pub fn process_content(files: &FileMap, config: &Config) -> ProcessResult {
    let parse_options = ParseOptions::from(config);
    let mut index = ContentIndex::new();
    let mut parse_errors = Vec::new();

    // Parse
    for (path, text) in files {
        if path.ends_with(SIDECAR_SUFFIX) {
            index.insert_sidecar(path.as_str(), text.as_str());
            continue;
        }
        if !path.ends_with(".md") {
            log::debug!("Skipping non-markdown file {path}");
            continue;
        }
        let Some(kind) = config.layout.classify(path) else {
            log::debug!("Skipping {path}: not in a content directory");
            continue;
        };

        let (document, errors) = parse_document(kind, text, path, &parse_options).into_parts();
        let tier = document.as_ref().map_or_else(|| frontmatter_tier(text), Document::tier);
        if tier.is_ignored() {
            log::debug!("Ignoring {path} ({} diagnostic(s) dropped)", errors.len());
        } else {
            parse_errors.extend(errors);
        }
        index.insert(path.as_str(), kind, tier, document);
    }

    // Validate
    let active = || index.documents().filter(|(_, doc)| !doc.tier().is_ignored());
    let mut validation_errors = check_duplicate_ids(active());
    let slugs = check_duplicate_slugs(active());
    validation_errors.extend(slugs.errors);

    // Flatten and bundle
    let flattener = Flattener::new(&index, FlattenOptions::from(config));
    let mut flatten_errors = Vec::new();
    let mut modules = Vec::new();
    let mut courses = Vec::new();

    for (path, document) in active() {
        if slugs.duplicates.contains(path) {
            log::warn!("Dropping {path} from output: duplicate slug");
            continue;
        }
        match document {
            Document::Module(module) => {
                let (flat, errors) = flattener.flatten_module(path, module).into_parts();
                modules.extend(flat);
                flatten_errors.extend(errors);
            }
            Document::Course(course) => {
                let (flat, errors) = flattener.flatten_course(path, course).into_parts();
                courses.extend(flat);
                flatten_errors.extend(errors);
            }
            _ => {}
        }
    }

    let errors = dedupe(
        parse_errors
            .into_iter()
            .chain(validation_errors)
            .chain(flatten_errors),
    );

    log::info!(
        "Processed {} file(s): {} module(s), {} course(s), {} diagnostic(s)",
        index.len(),
        modules.len(),
        courses.len(),
        errors.len()
    );

    ProcessResult {
        modules,
        courses,
        errors,
    }
}

/// Tier of a file that failed to parse, read from whatever frontmatter it has.
fn frontmatter_tier(text: &str) -> Tier {
    extract_frontmatter(text).map_or(Tier::Production, |result| result.frontmatter.tier())
}

/// Drops repeated diagnostics, keeping the first of each.
fn dedupe(errors: impl IntoIterator<Item = ContentError>) -> Vec<ContentError> {
    let mut seen = HashSet::new();
    errors
        .into_iter()
        .filter(|e| seen.insert(e.clone()))
        .collect()
}
