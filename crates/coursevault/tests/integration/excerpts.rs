//! Excerpt bundling through the whole pipeline.

use coursevault::Segment;
use coursevault::flatten::SourceMeta;

use crate::common::{ARTICLE, VIDEO, chain, messages};

#[test]
fn test_article_excerpts_with_collapsed_context() {
    let vault = chain(
        "### Article: Reading\nsource:: [[articles/problem]]\n#### Article-excerpt\nfrom:: \u{201C}It was the best\u{201D}\nto:: best of times.\n#### Article-excerpt\nfrom:: The end.\n",
    )
    .file("articles/problem.md", ARTICLE);

    let result = vault.process();
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    let section = &result.modules[0].sections[0];
    assert!(matches!(section.source, Some(SourceMeta::Article { ref title, .. }) if title == "The Problem"));
    assert_eq!(
        section.segments,
        vec![
            Segment::ArticleExcerpt {
                content: "It was the best of times.".to_string(),
                collapsed_before: Some("Preface.".to_string()),
                collapsed_after: None,
                optional: false,
            },
            Segment::ArticleExcerpt {
                content: "The end.".to_string(),
                collapsed_before: Some("It was the worst of times.".to_string()),
                collapsed_after: None,
                optional: false,
            },
        ]
    );
}

#[test]
fn test_ambiguous_anchor_blocks_only_its_segment() {
    let vault = chain(
        "### Article: Reading\nsource:: [[articles/problem]]\n#### Text\ncontent:: Read this.\n#### Article-excerpt\nfrom:: of times\n",
    )
    .file("articles/problem.md", ARTICLE);

    let result = vault.process();
    assert_eq!(messages(&result), vec!["Ambiguous anchor 'of times': found 2 times"]);
    assert_eq!(result.errors[0].file, "lenses/main.md");
    assert_eq!(result.errors[0].line, Some(8));

    let segments = &result.modules[0].sections[0].segments;
    assert_eq!(segments.len(), 1);
    assert!(matches!(segments[0], Segment::Text { .. }));
}

#[test]
fn test_video_excerpt_from_sidecar_words() {
    let vault = chain(
        "### Video: Watch\nsource:: [[video_transcripts/talk]]\n#### Video-excerpt\nfrom:: 0:05\nto:: 0:10\n",
    )
    .file("video_transcripts/talk.md", VIDEO)
    .file(
        "video_transcripts/talk.timestamps.json",
        r#"[{"text":"Hello","start":0.0},{"text":"main","start":5.0},{"text":"point","start":"0:07.5"},{"text":"bye","start":10.0},{"text":"later","start":10.2}]"#,
    );

    let result = vault.process();
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(
        result.modules[0].sections[0].segments,
        vec![Segment::VideoExcerpt {
            from: 5.0,
            to: 10.0,
            transcript: "main point bye".to_string(),
            optional: false,
        }]
    );
}

#[test]
fn test_video_excerpt_from_line_markers() {
    let vault = chain(
        "### Video: Watch\nsource:: [[video_transcripts/talk]]\n#### Video-excerpt\nfrom:: 0:05\nto:: 0:10\n",
    )
    .file("video_transcripts/talk.md", VIDEO);

    let result = vault.process();
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.modules[0].sections[0].segments[0].text(), "Main point.");
}

#[test]
fn test_video_timestamp_not_on_a_marker() {
    let vault = chain(
        "### Video: Watch\nsource:: [[video_transcripts/talk]]\n#### Video-excerpt\nfrom:: 0:03\nto:: 0:10\n",
    )
    .file("video_transcripts/talk.md", VIDEO);

    let result = vault.process();
    assert_eq!(messages(&result), vec!["Timestamp 0:03 not found in transcript"]);
}

#[test]
fn test_bad_sidecar_falls_back_to_markers() {
    let vault = chain(
        "### Video: Watch\nsource:: [[video_transcripts/talk]]\n#### Video-excerpt\nfrom:: 0:05\nto:: 0:10\n",
    )
    .file("video_transcripts/talk.md", VIDEO)
    .file("video_transcripts/talk.timestamps.json", "{not json");

    let result = vault.process();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].file, "video_transcripts/talk.timestamps.json");
    assert_eq!(result.modules[0].sections[0].segments[0].text(), "Main point.");
}

#[test]
fn test_bad_video_timestamp_blocks_only_its_segment() {
    let vault = chain(
        "### Page: Intro\n#### Text\ncontent:: Keep me\n### Video: Watch\nsource:: [[video_transcripts/talk]]\n#### Video-excerpt\nfrom:: 0:05\nto:: 0:10\n#### Video-excerpt\nto:: abc\n",
    )
    .file("video_transcripts/talk.md", VIDEO);

    let result = vault.process();
    assert_eq!(messages(&result), vec!["Invalid timestamp 'abc'"]);
    assert_eq!(result.errors[0].file, "lenses/main.md");
    assert_eq!(result.errors[0].line, Some(12));

    let sections = &result.modules[0].sections;
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].segments[0].text(), "Keep me");
    assert_eq!(sections[1].segments.len(), 1);
    assert_eq!(sections[1].segments[0].text(), "Main point.");
}
