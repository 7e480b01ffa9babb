//! Cross-file validation and the serialized artifact.

use coursevault::Severity;

use crate::common::{LENS_ID, LO_ID, Vault, chain, learning_outcome, lens, messages, module, text_page};

#[test]
fn test_module_content_id_colliding_with_lens_id() {
    let vault = Vault::new()
        .file(
            "modules/intro.md",
            module("intro", &format!("contentId: \"{LENS_ID}\"\n"), "learning outcomes/core"),
        )
        .file("learning outcomes/core.md", learning_outcome(LO_ID, "", "lenses/main"))
        .file("lenses/main.md", lens(LENS_ID, "", &text_page("x")));

    let result = vault.process();
    let duplicates: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.message.starts_with("Duplicate id"))
        .collect();
    assert_eq!(duplicates.len(), 1, "{:?}", result.errors);
    assert_eq!(duplicates[0].file, "modules/intro.md");
    assert!(duplicates[0].message.contains("lenses/main.md"));
    assert!(duplicates[0].message.contains("contentId"));
}

#[test]
fn test_duplicate_ids_compare_case_insensitively() {
    let vault = chain(&text_page("x")).file(
        "lenses/copy.md",
        lens(&LENS_ID.to_uppercase(), "", &text_page("y")),
    );

    let result = vault.process();
    assert_eq!(
        result.errors.iter().filter(|e| e.message.starts_with("Duplicate id")).count(),
        1
    );
}

#[test]
fn test_duplicate_slug_drops_later_module() {
    let vault = chain(&text_page("x")).file(
        "modules/zz-copy.md",
        "---\nslug: intro\ntitle: Copy\n---\n# Page: P\n## Text\ncontent:: y\n",
    );

    let result = vault.process();
    assert_eq!(
        messages(&result),
        vec!["Duplicate module slug 'intro': already used by modules/intro.md"]
    );
    assert_eq!(result.errors[0].file, "modules/zz-copy.md");
    assert_eq!(result.modules.len(), 1);
    assert_eq!(result.modules[0].title, "intro");
}

#[test]
fn test_slug_format() {
    for (slug, valid) in [
        ("my-valid-slug", true),
        ("intro-101", true),
        ("\"!!!invalid@@@\"", false),
        ("\"-invalid\"", false),
        ("invalid-", false),
    ] {
        let vault = Vault::new().file(
            "modules/m.md",
            format!("---\nslug: {slug}\ntitle: M\n---\n# Page: P\n## Text\ncontent:: x\n"),
        );
        let result = vault.process();
        assert_eq!(result.has_blocking_errors(), !valid, "slug {slug}: {:?}", result.errors);
        assert_eq!(result.modules.len(), usize::from(valid));
    }
}

#[test]
fn test_field_typo_is_a_warning_only() {
    let vault = Vault::new().file(
        "modules/m.md",
        "---\nslug: m\ntitle: M\ndiscusion: https://forum.example/t/1\n---\n# Page: P\n## Text\ncontent:: x\n",
    );

    let result = vault.process();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].severity, Severity::Warning);
    assert!(!result.has_blocking_errors());
    assert_eq!(result.modules.len(), 1);
}

#[test]
fn test_errors_ordered_by_stage_then_path() {
    let vault = Vault::new()
        .file("modules/a.md", module("a", "", "learning outcomes/missing"))
        .file("modules/b.md", "---\ntitle: B\n---\n# Page: P\n## Text\ncontent:: x\n")
        .file("modules/c.md", module("a", "", "learning outcomes/missing"));

    let result = vault.process();
    let files: Vec<(&str, &str)> = result
        .errors
        .iter()
        .map(|e| (e.file.as_str(), e.message.split(':').next().unwrap_or("")))
        .collect();
    assert_eq!(
        files,
        vec![
            ("modules/b.md", "Missing required field 'slug' in module frontmatter"),
            ("modules/c.md", "Duplicate module slug 'a'"),
            ("modules/a.md", "Referenced file not found"),
        ]
    );
}

#[test]
fn test_artifact_json_shape() {
    let result = chain(&text_page("Hello")).process();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["errors"], serde_json::json!([]));
    assert_eq!(json["courses"], serde_json::json!([]));
    let module = &json["modules"][0];
    assert_eq!(module["slug"], "intro");
    assert_eq!(module["tier"], "production");
    let section = &module["sections"][0];
    assert_eq!(section["kind"], "page");
    assert_eq!(section["learning_outcome_id"], LO_ID);
    assert_eq!(section["lens_id"], LENS_ID);
    assert_eq!(section["segments"][0]["type"], "text");
    assert_eq!(section["segments"][0]["content"], "Hello");
}
