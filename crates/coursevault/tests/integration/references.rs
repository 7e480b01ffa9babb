//! Reference resolution: cycles, missing files, courses.

use coursevault::content::Document;

use crate::common::{
    LENS_ID, LO_ID, Vault, chain, learning_outcome, lens, messages, module, text_page,
};

#[test]
fn test_cycle_reported_once_and_terminates() {
    let vault = chain("### Article: Loop\nsource:: [[modules/intro]]\n#### Article-excerpt\nfrom:: x\n");

    let result = vault.process();
    let cycles: Vec<_> = messages(&result)
        .into_iter()
        .filter(|m| m.starts_with("Circular reference detected"))
        .collect();
    assert_eq!(
        cycles,
        vec![
            "Circular reference detected: modules/intro.md -> learning outcomes/core.md -> lenses/main.md -> modules/intro.md"
        ]
    );
    assert_eq!(result.modules.len(), 1);
    assert!(result.modules[0].sections.is_empty());
}

#[test]
fn test_lens_reused_by_two_outcomes() {
    let module = "---\nslug: intro\ntitle: Intro\n---\n# Learning Outcome:\nsource:: [[learning outcomes/a]]\n\n# Learning Outcome:\nsource:: [[learning outcomes/b]]\n";
    let vault = Vault::new()
        .file("modules/intro.md", module)
        .file("learning outcomes/a.md", learning_outcome(LO_ID, "", "lenses/shared"))
        .file(
            "learning outcomes/b.md",
            learning_outcome("9b2e4c1a-3f5d-4e8b-a7c6-1d2e3f4a5b6c", "", "lenses/shared"),
        )
        .file("lenses/shared.md", lens(LENS_ID, "", &text_page("Shared")));

    let result = vault.process();
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let sections = &result.modules[0].sections;
    assert_eq!(sections.len(), 2);
    assert_ne!(sections[0].learning_outcome_id, sections[1].learning_outcome_id);
    assert_eq!(sections[0].lens_id, sections[1].lens_id);
}

#[test]
fn test_missing_reference_with_suggestion() {
    let vault = Vault::new()
        .file("modules/intro.md", module("intro", "", "learning outcomes/cor"))
        .file("learning outcomes/core.md", learning_outcome(LO_ID, "", "lenses/main"))
        .file("lenses/main.md", lens(LENS_ID, "", &text_page("x")));

    let result = vault.process();
    let err = &result.errors[0];
    assert_eq!(err.message, "Referenced file not found: 'learning outcomes/cor'");
    assert_eq!(err.file, "modules/intro.md");
    assert_eq!(err.line, Some(6));
    assert_eq!(
        err.suggestion.as_deref(),
        Some("Did you mean '[[learning outcomes/core]]'?")
    );
}

#[test]
fn test_broken_reference_target_reported_on_both_sides() {
    let vault = Vault::new()
        .file("modules/intro.md", module("intro", "", "learning outcomes/core"))
        .file("learning outcomes/core.md", "---\nid: 12\n---\n## Lens:\nsource:: [[lenses/x]]\n");

    let result = vault.process();
    let files: Vec<&str> = result.errors.iter().map(|e| e.file.as_str()).collect();
    assert!(files.contains(&"learning outcomes/core.md"));
    assert!(
        messages(&result).contains(&"Referenced file has errors: 'learning outcomes/core.md'")
    );
}

#[test]
fn test_course_progression() {
    let vault = chain(&text_page("x"))
        .file("modules/extra.md", "---\nslug: extra\ntitle: Extra\n---\n# Page: P\n## Text\ncontent:: y\n")
        .file(
            "courses/main.md",
            "---\nslug: main\ntitle: Main\n---\n# Module: [[modules/intro]]\n\n# Module: Extra\nsource:: [[extra]]\n",
        );

    let result = vault.process();
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.courses.len(), 1);
    assert_eq!(result.courses[0].progression, vec!["intro", "extra"]);
}

#[test]
fn test_parsing_is_idempotent() {
    let vault = chain(&text_page("Same every time"));
    let first = vault.process();
    let second = vault.process();
    assert_eq!(first, second);
    assert!(first.errors.is_empty());

    for (path, text) in vault.files() {
        let kind = coursevault::Config::default().layout.classify(path).unwrap();
        let options = coursevault::content::ParseOptions::default();
        let a = coursevault::content::parse_document(kind, text, path, &options);
        let b = coursevault::content::parse_document(kind, text, path, &options);
        assert_eq!(a, b);
        assert!(a.errors.is_empty(), "{path}: {:?}", a.errors);
        assert!(matches!(a.value, Some(Document::Module(_) | Document::LearningOutcome(_) | Document::Lens(_))));
    }
}
