//! Tier gating across reference edges.

use coursevault::{Segment, Severity, Tier};

use crate::common::{LENS_ID, LO_ID, Vault, learning_outcome, lens, module, text_page};

#[test]
fn test_wip_content_passes_through_with_error() {
    let vault = Vault::new()
        .file("modules/prod-mod.md", module("prod-mod", "", "learning outcomes/draft"))
        .file(
            "learning outcomes/draft.md",
            learning_outcome(LO_ID, "tags: [wip]\n", "lenses/draft-lens"),
        )
        .file(
            "lenses/draft-lens.md",
            lens(LENS_ID, "", &text_page("Hello from WIP content")),
        );

    let result = vault.process();

    let wip_errors: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.message.contains("WIP"))
        .collect();
    assert_eq!(wip_errors.len(), 1, "{:?}", result.errors);
    assert_eq!(wip_errors[0].file, "modules/prod-mod.md");
    assert_eq!(wip_errors[0].severity, Severity::Error);
    assert!(result.has_blocking_errors());

    let module = &result.modules[0];
    assert!(!module.sections.is_empty());
    assert!(module.sections[0].segments.iter().any(|s| matches!(
        s,
        Segment::Text { content, .. } if content.contains("Hello from WIP content")
    )));
}

#[test]
fn test_ignored_content_is_skipped_without_errors() {
    let vault = Vault::new()
        .file("modules/intro.md", module("intro", "", "learning outcomes/hidden"))
        .file(
            "learning outcomes/hidden.md",
            learning_outcome(LO_ID, "tags: [ignored]\n", "lenses/nowhere"),
        );

    let result = vault.process();
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert!(result.modules[0].sections.is_empty());
}

#[test]
fn test_ignored_file_diagnostics_are_dropped() {
    let vault = Vault::new().file(
        "lenses/scratch.md",
        "---\nid: not-a-uuid\ntags: [ignore]\n---\n### Bogus\n",
    );

    let result = vault.process();
    assert!(result.errors.is_empty(), "{:?}", result.errors);
}

#[test]
fn test_ignored_module_is_not_output() {
    let vault = Vault::new()
        .file(
            "modules/intro.md",
            "---\nslug: intro\ntitle: Intro\ntags: [ignored]\n---\n# Page: P\n## Text\ncontent:: x\n",
        );

    let result = vault.process();
    assert!(result.modules.is_empty());
}

#[test]
fn test_wip_module_is_output_with_its_tier() {
    let vault = Vault::new()
        .file(
            "modules/intro.md",
            module("intro", "tags: [wip]\n", "learning outcomes/core"),
        )
        .file(
            "learning outcomes/core.md",
            learning_outcome(LO_ID, "tags: [wip]\n", "lenses/main"),
        )
        .file("lenses/main.md", lens(LENS_ID, "", &text_page("Draft")));

    let result = vault.process();
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.modules[0].tier, Tier::Wip);
    assert_eq!(result.modules[0].sections.len(), 1);
}
