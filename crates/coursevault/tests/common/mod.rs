//! Vault fixtures shared by the integration tests.

use coursevault::{Config, FileMap, ProcessResult, process_content};

pub const LO_ID: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
pub const LENS_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
pub const OTHER_ID: &str = "9b2e4c1a-3f5d-4e8b-a7c6-1d2e3f4a5b6c";

/// An in-memory vault under construction.
#[derive(Default)]
pub struct Vault {
    files: FileMap,
}

impl Vault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &str, text: impl Into<String>) -> Self {
        self.files.insert(path.to_string(), text.into());
        self
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    pub fn process(&self) -> ProcessResult {
        process_content(&self.files, &Config::default())
    }
}

/// A module whose only content is one learning outcome.
pub fn module(slug: &str, extra_frontmatter: &str, lo_target: &str) -> String {
    format!(
        "---\nslug: {slug}\ntitle: {slug}\n{extra_frontmatter}---\n# Learning Outcome:\nsource:: [[{lo_target}]]\n"
    )
}

pub fn learning_outcome(id: &str, extra_frontmatter: &str, lens_target: &str) -> String {
    format!("---\nid: {id}\n{extra_frontmatter}---\n## Lens:\nsource:: [[{lens_target}]]\n")
}

pub fn lens(id: &str, extra_frontmatter: &str, body: &str) -> String {
    format!("---\nid: {id}\n{extra_frontmatter}---\n{body}")
}

pub fn text_page(content: &str) -> String {
    format!("### Page: Intro\n#### Text\ncontent:: {content}\n")
}

pub const ARTICLE: &str = "---\ntitle: The Problem\nauthor: A. Writer\nsource_url: https://example.com/p\n---\nPreface.\n\nIt was the best of times. It was the worst of times.\n\nThe end.\n";

pub const VIDEO: &str = "---\ntitle: Talk\nchannel: Chan\nurl: https://youtu.be/x\n---\n0:00 - Hello.\n0:05 - Main point.\n0:10 - Bye.\n";

/// The standard module → LO → lens chain, with the given lens body.
pub fn chain(lens_body: &str) -> Vault {
    Vault::new()
        .file("modules/intro.md", module("intro", "", "learning outcomes/core"))
        .file(
            "learning outcomes/core.md",
            learning_outcome(LO_ID, "", "lenses/main"),
        )
        .file("lenses/main.md", lens(LENS_ID, "", lens_body))
}

pub fn messages(result: &ProcessResult) -> Vec<&str> {
    result.errors.iter().map(|e| e.message.as_str()).collect()
}
