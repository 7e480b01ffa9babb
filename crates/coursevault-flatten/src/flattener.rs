//! Module and course flattening.
//!
//! Flattening follows references Module → Learning Outcome → Lens →
//! Article/Video and inlines what it finds. Each reference edge is checked in
//! this order:
//!
//! 1. the link resolves to exactly one file;
//! 2. the file is not already on the current chain (cycle);
//! 3. the file has the expected content type;
//! 4. the file is not `ignored` (silently skipped otherwise);
//! 5. the file parsed without errors;
//! 6. a production referrer pointing at WIP content is reported, and the
//!    content is still inlined.
//!
//! Failing checks 1-5 drop that branch only. The chain is per path from the
//! root, so a lens reached through two learning outcomes is resolved twice.

use coursevault_bundle::{
    ExcerptRequest, bundle_article_with_collapsed, extract_video_excerpt, parse_word_timestamps,
};
use coursevault_content::document::{self, ModuleItem};
use coursevault_content::{Course, Document, LensSection, Module, PageSection, Reference, SourceSection};
use coursevault_core::util::fuzzy::FILE_SUGGESTION_MAX_DISTANCE;
use coursevault_core::util::paths::timestamps_sidecar;
use coursevault_core::{Config, ContentError, ContentKind, Outcome, Tier};

use crate::index::ContentIndex;
use crate::link::resolve_link;
use crate::output::{FlatCourse, FlatModule, Section, SectionKind, Segment, SourceMeta};

// ============================================================================
// Options
// ============================================================================

/// Flattener settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Largest edit distance offered as a "did you mean" for a missing file.
    pub file_max_distance: usize,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            file_max_distance: FILE_SUGGESTION_MAX_DISTANCE,
        }
    }
}

impl From<&Config> for FlattenOptions {
    fn from(config: &Config) -> Self {
        Self {
            file_max_distance: config.suggestions.file_max_distance,
        }
    }
}

// ============================================================================
// Walk state
// ============================================================================

/// The document a reference is written in.
struct Referrer<'p> {
    path: &'p str,
    kind: ContentKind,
    tier: Tier,
}

/// Files on the current root-to-node chain, plus everything reported so far.
struct Walk {
    chain: Vec<String>,
    errors: Vec<ContentError>,
}

impl Walk {
    fn new(root: &str) -> Self {
        Self {
            chain: vec![root.to_string()],
            errors: Vec::new(),
        }
    }

    fn into_outcome<T>(self, value: T) -> Outcome<T> {
        let mut outcome = Outcome::new(Some(value));
        outcome.extend(self.errors);
        outcome
    }
}

/// Ids and flags inherited from the references above a section.
#[derive(Debug, Clone, Default)]
struct Lineage {
    learning_outcome_id: Option<String>,
    lens_id: Option<String>,
    optional: bool,
}

// ============================================================================
// Flattener
// ============================================================================

/// Resolves modules and courses against a [`ContentIndex`].
pub struct Flattener<'a> {
    index: &'a ContentIndex,
    options: FlattenOptions,
}

impl<'a> Flattener<'a> {
    pub fn new(index: &'a ContentIndex, options: FlattenOptions) -> Self {
        Self { index, options }
    }

    /// Flattens one module into sections.
    ///
    /// Always returns a module; problems found along the way are in the
    /// outcome's errors.
    pub fn flatten_module(&self, path: &str, module: &Module) -> Outcome<FlatModule> {
        let mut walk = Walk::new(path);
        let owner = Referrer {
            path,
            kind: ContentKind::Module,
            tier: module.tier,
        };

        let mut sections = Vec::new();
        for item in &module.items {
            match item {
                ModuleItem::Page(page) => sections.push(page_section(page, &Lineage::default())),
                ModuleItem::LearningOutcome(reference) => {
                    self.learning_outcome(&mut walk, &owner, reference, &mut sections)
                }
            }
        }

        log::debug!(
            "Flattened module {}: {} section(s), {} problem(s)",
            path,
            sections.len(),
            walk.errors.len()
        );

        walk.into_outcome(FlatModule {
            slug: module.slug.clone(),
            title: module.title.clone(),
            content_id: module.content_id.as_ref().map(|id| id.value.clone()),
            discussion: module.discussion.clone(),
            tier: module.tier,
            sections,
        })
    }

    /// Flattens a course into its module progression.
    pub fn flatten_course(&self, path: &str, course: &Course) -> Outcome<FlatCourse> {
        let mut walk = Walk::new(path);
        let owner = Referrer {
            path,
            kind: ContentKind::Course,
            tier: course.tier,
        };

        let mut progression = Vec::new();
        for reference in &course.modules {
            if let Some((_, Document::Module(module))) =
                self.follow(&mut walk, &owner, reference, ContentKind::Module)
            {
                progression.push(module.slug.clone());
            }
        }

        walk.into_outcome(FlatCourse {
            slug: course.slug.clone(),
            title: course.title.clone(),
            progression,
        })
    }

    /// Checks one reference edge and returns the target when it may be
    /// descended into.
    fn follow(
        &self,
        walk: &mut Walk,
        from: &Referrer<'_>,
        reference: &Reference,
        expected: ContentKind,
    ) -> Option<(String, &'a Document)> {
        let path = match resolve_link(
            self.index,
            from.path,
            &reference.link,
            self.options.file_max_distance,
        ) {
            Ok(path) => path,
            Err(err) => {
                walk.errors.push(err.into_content_error(from.path, reference.line));
                return None;
            }
        };

        if walk.chain.contains(&path) {
            let chain = walk
                .chain
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(path.as_str()))
                .collect::<Vec<_>>()
                .join(" -> ");
            walk.errors.push(
                ContentError::error(from.path, format!("Circular reference detected: {chain}"))
                    .at_line(reference.line),
            );
            return None;
        }

        let index: &'a ContentIndex = self.index;
        let file = index.get(&path)?;
        if file.kind != expected {
            walk.errors.push(
                ContentError::error(
                    from.path,
                    format!(
                        "Wrong content type for '{path}': expected {expected}, found {}",
                        file.kind
                    ),
                )
                .at_line(reference.line),
            );
            return None;
        }

        if file.tier.is_ignored() {
            log::debug!("Skipping ignored {} {} referenced from {}", expected, path, from.path);
            return None;
        }

        let Some(document) = file.document.as_ref() else {
            walk.errors.push(
                ContentError::error(from.path, format!("Referenced file has errors: '{path}'"))
                    .at_line(reference.line)
                    .with_suggestion(format!("Fix the errors reported for '{path}'")),
            );
            return None;
        };

        if from.tier.violated_by(file.tier) {
            walk.errors.push(
                ContentError::error(
                    from.path,
                    format!(
                        "Production {} references WIP {} '{path}'",
                        from.kind, expected
                    ),
                )
                .at_line(reference.line)
                .with_suggestion(format!(
                    "Promote '{path}' to production or tag this {} as wip",
                    from.kind
                )),
            );
        }

        Some((path, document))
    }

    fn learning_outcome(
        &self,
        walk: &mut Walk,
        from: &Referrer<'_>,
        reference: &Reference,
        sections: &mut Vec<Section>,
    ) {
        let Some((path, Document::LearningOutcome(lo))) =
            self.follow(walk, from, reference, ContentKind::LearningOutcome)
        else {
            return;
        };

        walk.chain.push(path.clone());
        let referrer = Referrer {
            path: &path,
            kind: ContentKind::LearningOutcome,
            tier: lo.tier,
        };
        for lens in &lo.lenses {
            let lineage = Lineage {
                learning_outcome_id: Some(lo.id.value.clone()),
                lens_id: None,
                optional: reference.optional || lens.optional,
            };
            self.lens(walk, &referrer, lens, lineage, sections);
        }
        walk.chain.pop();
    }

    fn lens(
        &self,
        walk: &mut Walk,
        from: &Referrer<'_>,
        reference: &Reference,
        mut lineage: Lineage,
        sections: &mut Vec<Section>,
    ) {
        let Some((path, Document::Lens(lens))) =
            self.follow(walk, from, reference, ContentKind::Lens)
        else {
            return;
        };

        walk.chain.push(path.clone());
        let referrer = Referrer {
            path: &path,
            kind: ContentKind::Lens,
            tier: lens.tier,
        };
        lineage.lens_id = Some(lens.id.value.clone());

        for section in &lens.sections {
            let built = match section {
                LensSection::Page(page) => Some(page_section(page, &lineage)),
                LensSection::Article(source) => {
                    self.article_section(walk, &referrer, source, &lineage)
                }
                LensSection::Video(source) => self.video_section(walk, &referrer, source, &lineage),
            };
            sections.extend(built);
        }
        walk.chain.pop();
    }

    fn article_section(
        &self,
        walk: &mut Walk,
        from: &Referrer<'_>,
        source: &SourceSection,
        lineage: &Lineage,
    ) -> Option<Section> {
        let Some((_, Document::Article(article))) =
            self.follow(walk, from, &source.source, ContentKind::Article)
        else {
            return None;
        };

        let requests: Vec<ExcerptRequest<'_>> = source
            .segments
            .iter()
            .filter_map(|segment| match segment {
                document::Segment::ArticleExcerpt(excerpt) => Some(ExcerptRequest {
                    from: excerpt.from.as_deref(),
                    to: excerpt.to.as_deref(),
                }),
                _ => None,
            })
            .collect();
        let mut bundled = bundle_article_with_collapsed(&article.body, &requests).into_iter();

        let mut segments = Vec::new();
        for segment in &source.segments {
            match segment {
                document::Segment::ArticleExcerpt(excerpt) => match bundled.next() {
                    Some(Ok(b)) => segments.push(Segment::ArticleExcerpt {
                        content: b.content,
                        collapsed_before: b.collapsed_before,
                        collapsed_after: b.collapsed_after,
                        optional: excerpt.optional,
                    }),
                    Some(Err(err)) => walk
                        .errors
                        .push(err.into_content_error(from.path, excerpt.line)),
                    None => {}
                },
                other => segments.extend(plain_segment(other)),
            }
        }

        Some(Section {
            kind: SectionKind::Article,
            title: source.title.clone(),
            content_id: None,
            learning_outcome_id: lineage.learning_outcome_id.clone(),
            lens_id: lineage.lens_id.clone(),
            optional: lineage.optional || source.source.optional,
            source: Some(SourceMeta::Article {
                title: article.title.clone(),
                author: article.author.clone(),
                source_url: article.source_url.clone(),
                date: article.date.clone(),
            }),
            segments,
        })
    }

    fn video_section(
        &self,
        walk: &mut Walk,
        from: &Referrer<'_>,
        source: &SourceSection,
        lineage: &Lineage,
    ) -> Option<Section> {
        let Some((path, Document::VideoTranscript(video))) =
            self.follow(walk, from, &source.source, ContentKind::VideoTranscript)
        else {
            return None;
        };

        let sidecar = timestamps_sidecar(&path);
        let words = match self.index.sidecar(&sidecar).map(parse_word_timestamps) {
            Some(Ok(words)) => Some(words),
            Some(Err(err)) => {
                walk.errors.push(
                    ContentError::error(&sidecar, err.to_string())
                        .with_suggestion("Expected a JSON array of {\"text\", \"start\"} objects"),
                );
                None
            }
            None => None,
        };

        let mut segments = Vec::new();
        for segment in &source.segments {
            match segment {
                document::Segment::VideoExcerpt(excerpt) => {
                    match extract_video_excerpt(
                        &video.body,
                        &excerpt.from,
                        &excerpt.to,
                        words.as_deref(),
                    ) {
                        Ok(clip) => segments.push(Segment::VideoExcerpt {
                            from: clip.from,
                            to: clip.to,
                            transcript: clip.transcript,
                            optional: excerpt.optional,
                        }),
                        Err(err) => walk
                            .errors
                            .push(err.into_content_error(from.path, excerpt.line)),
                    }
                }
                other => segments.extend(plain_segment(other)),
            }
        }

        Some(Section {
            kind: SectionKind::Video,
            title: source.title.clone(),
            content_id: None,
            learning_outcome_id: lineage.learning_outcome_id.clone(),
            lens_id: lineage.lens_id.clone(),
            optional: lineage.optional || source.source.optional,
            source: Some(SourceMeta::Video {
                title: video.title.clone(),
                channel: video.channel.clone(),
                url: video.url.clone(),
            }),
            segments,
        })
    }
}

fn page_section(page: &PageSection, lineage: &Lineage) -> Section {
    Section {
        kind: SectionKind::Page,
        title: page.title.clone(),
        content_id: page.id.as_ref().map(|id| id.value.clone()),
        learning_outcome_id: lineage.learning_outcome_id.clone(),
        lens_id: lineage.lens_id.clone(),
        optional: lineage.optional || page.optional,
        source: None,
        segments: page.segments.iter().filter_map(plain_segment).collect(),
    }
}

/// Text and chat segments; excerpts need a source and return `None`.
fn plain_segment(segment: &document::Segment) -> Option<Segment> {
    match segment {
        document::Segment::Text(text) => Some(Segment::Text {
            content: text.content.clone(),
            optional: text.optional,
        }),
        document::Segment::Chat(chat) => Some(Segment::Chat {
            instructions: chat.instructions.clone(),
            hide_previous_content_from_user: chat.hide_previous_content_from_user,
            hide_previous_content_from_tutor: chat.hide_previous_content_from_tutor,
            optional: chat.optional,
        }),
        document::Segment::ArticleExcerpt(_) | document::Segment::VideoExcerpt(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursevault_content::markdown::extract_frontmatter;
    use coursevault_content::{ParseOptions, parse_document};

    const LO_ID: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
    const LENS_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    const MODULE: &str = "---\nslug: intro\ntitle: Intro\n---\n# Learning Outcome:\nsource:: [[learning_outcomes/core]]\n";

    fn lo(tags: &str) -> String {
        format!("---\nid: {LO_ID}\n{tags}---\n## Lens:\nsource:: [[lenses/main]]\n")
    }

    fn lens(tags: &str, body: &str) -> String {
        format!("---\nid: {LENS_ID}\n{tags}---\n{body}")
    }

    const ARTICLE: &str = "---\ntitle: The Problem\nauthor: A. Writer\nsource_url: https://example.com/p\n---\nPreface.\n\nIt was the best of times. It was the worst of times.\n\nThe end.\n";

    const VIDEO: &str = "---\ntitle: Talk\nchannel: Chan\nurl: https://youtu.be/x\n---\n0:00 - Hello.\n0:05 - Main point.\n0:10 - Bye.\n";

    fn index(files: &[(&str, ContentKind, &str)]) -> ContentIndex {
        let mut index = ContentIndex::new();
        for (path, kind, text) in files {
            let outcome = parse_document(*kind, text, path, &ParseOptions::default());
            let tier = extract_frontmatter(text).map_or(Tier::Production, |fm| fm.frontmatter.tier());
            index.insert(*path, *kind, tier, outcome.value);
        }
        index
    }

    fn flatten(index: &ContentIndex) -> Outcome<FlatModule> {
        let Some(Document::Module(module)) = index.get("modules/intro.md").and_then(|f| f.document.as_ref()) else {
            panic!("module did not parse");
        };
        Flattener::new(index, FlattenOptions::default()).flatten_module("modules/intro.md", module)
    }

    fn messages(outcome: &Outcome<FlatModule>) -> Vec<&str> {
        outcome.errors.iter().map(|e| e.message.as_str()).collect()
    }

    // ------------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------------

    #[test]
    fn test_full_chain_with_excerpts() {
        let lens_body = "### Page: Welcome\n#### Text\ncontent:: Hello\n\n### Article: Reading\nsource:: [[articles/problem]]\n#### Article-excerpt\nfrom:: It was the best\nto:: best of times.\n#### Chat\ninstructions:: Discuss\n\n### Video: Watch\nsource:: [[video_transcripts/talk]]\noptional:: true\n#### Video-excerpt\nfrom:: 0:05\nto:: 0:10\n";
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, MODULE),
            ("learning_outcomes/core.md", ContentKind::LearningOutcome, &lo("")),
            ("lenses/main.md", ContentKind::Lens, &lens("", lens_body)),
            ("articles/problem.md", ContentKind::Article, ARTICLE),
            ("video_transcripts/talk.md", ContentKind::VideoTranscript, VIDEO),
        ]);

        let outcome = flatten(&index);
        assert!(outcome.errors.is_empty(), "{:?}", outcome.errors);
        let module = outcome.value.unwrap();
        assert_eq!(module.sections.len(), 3);

        let page = &module.sections[0];
        assert_eq!(page.kind, SectionKind::Page);
        assert_eq!(page.learning_outcome_id.as_deref(), Some(LO_ID));
        assert_eq!(page.lens_id.as_deref(), Some(LENS_ID));
        assert_eq!(page.segments[0].text(), "Hello");

        let article = &module.sections[1];
        assert_eq!(article.kind, SectionKind::Article);
        assert!(matches!(article.source, Some(SourceMeta::Article { ref author, .. }) if author == "A. Writer"));
        match &article.segments[0] {
            Segment::ArticleExcerpt {
                content,
                collapsed_before,
                collapsed_after,
                ..
            } => {
                assert_eq!(content, "It was the best of times.");
                assert_eq!(collapsed_before.as_deref(), Some("Preface."));
                assert_eq!(
                    collapsed_after.as_deref(),
                    Some("It was the worst of times.\n\nThe end.")
                );
            }
            other => panic!("unexpected segment {other:?}"),
        }
        assert!(matches!(article.segments[1], Segment::Chat { .. }));

        let video = &module.sections[2];
        assert!(video.optional);
        assert_eq!(video.segments[0].text(), "Main point.");
    }

    #[test]
    fn test_video_prefers_sidecar_words() {
        let lens_body = "### Video: Watch\nsource:: [[video_transcripts/talk]]\n#### Video-excerpt\nfrom:: 0:05\nto:: 0:10\n";
        let mut index = index(&[
            ("modules/intro.md", ContentKind::Module, MODULE),
            ("learning_outcomes/core.md", ContentKind::LearningOutcome, &lo("")),
            ("lenses/main.md", ContentKind::Lens, &lens("", lens_body)),
            ("video_transcripts/talk.md", ContentKind::VideoTranscript, VIDEO),
        ]);
        index.insert_sidecar(
            "video_transcripts/talk.timestamps.json",
            r#"[{"text":"early","start":4.0},{"text":"main","start":5.0},{"text":"point","start":10.0},{"text":"late","start":10.5}]"#,
        );

        let outcome = flatten(&index);
        assert!(outcome.errors.is_empty(), "{:?}", outcome.errors);
        let module = outcome.value.unwrap();
        assert_eq!(module.sections[0].segments[0].text(), "main point");
    }

    #[test]
    fn test_missing_lo_is_reported_with_suggestion() {
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, MODULE),
            ("learning_outcomes/cor.md", ContentKind::LearningOutcome, &lo("")),
        ]);

        let outcome = flatten(&index);
        assert_eq!(messages(&outcome), vec!["Referenced file not found: 'learning_outcomes/core'"]);
        assert_eq!(outcome.errors[0].file, "modules/intro.md");
        assert_eq!(outcome.errors[0].line, Some(6));
        assert_eq!(
            outcome.errors[0].suggestion.as_deref(),
            Some("Did you mean '[[learning_outcomes/cor]]'?")
        );
        assert!(outcome.value.unwrap().sections.is_empty());
    }

    #[test]
    fn test_failed_reference_is_skipped() {
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, MODULE),
            ("learning_outcomes/core.md", ContentKind::LearningOutcome, "---\nid: nope\n---\n"),
        ]);

        let outcome = flatten(&index);
        assert_eq!(
            messages(&outcome),
            vec!["Referenced file has errors: 'learning_outcomes/core.md'"]
        );
    }

    #[test]
    fn test_wrong_content_type() {
        let lens_body = "### Article: A\nsource:: [[video_transcripts/talk]]\n#### Article-excerpt\nfrom:: Hello\n";
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, MODULE),
            ("learning_outcomes/core.md", ContentKind::LearningOutcome, &lo("")),
            ("lenses/main.md", ContentKind::Lens, &lens("", lens_body)),
            ("video_transcripts/talk.md", ContentKind::VideoTranscript, VIDEO),
        ]);

        let outcome = flatten(&index);
        assert_eq!(
            messages(&outcome),
            vec!["Wrong content type for 'video_transcripts/talk.md': expected article, found video transcript"]
        );
        assert_eq!(outcome.errors[0].file, "lenses/main.md");
        assert!(outcome.value.unwrap().sections.is_empty());
    }

    #[test]
    fn test_excerpt_error_blocks_only_that_segment() {
        let lens_body = "### Article: A\nsource:: [[articles/problem]]\n#### Article-excerpt\nfrom:: It was\n#### Article-excerpt\nfrom:: The end.\n";
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, MODULE),
            ("learning_outcomes/core.md", ContentKind::LearningOutcome, &lo("")),
            ("lenses/main.md", ContentKind::Lens, &lens("", lens_body)),
            ("articles/problem.md", ContentKind::Article, ARTICLE),
        ]);

        let outcome = flatten(&index);
        assert_eq!(messages(&outcome), vec!["Ambiguous anchor 'It was': found 2 times"]);
        assert_eq!(outcome.errors[0].file, "lenses/main.md");
        assert_eq!(outcome.errors[0].line, Some(6));

        let module = outcome.value.unwrap();
        assert_eq!(module.sections[0].segments.len(), 1);
        assert_eq!(module.sections[0].segments[0].text(), "The end.");
    }

    // ------------------------------------------------------------------------
    // Cycles
    // ------------------------------------------------------------------------

    #[test]
    fn test_cycle_back_to_module_reported_once() {
        let lens_body = "### Article: Loop\nsource:: [[modules/intro]]\n#### Article-excerpt\nfrom:: x\n";
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, MODULE),
            ("learning_outcomes/core.md", ContentKind::LearningOutcome, &lo("")),
            ("lenses/main.md", ContentKind::Lens, &lens("", lens_body)),
        ]);

        let outcome = flatten(&index);
        assert_eq!(
            messages(&outcome),
            vec![
                "Circular reference detected: modules/intro.md -> learning_outcomes/core.md -> lenses/main.md -> modules/intro.md"
            ]
        );
    }

    #[test]
    fn test_shared_lens_is_not_a_cycle() {
        let module = "---\nslug: intro\ntitle: Intro\n---\n# Learning Outcome:\nsource:: [[learning_outcomes/core]]\n\n# Learning Outcome:\nsource:: [[learning_outcomes/other]]\n";
        let other = "---\nid: 9b2e4c1a-3f5d-4e8b-a7c6-1d2e3f4a5b6c\n---\n## Lens:\nsource:: [[lenses/main]]\n";
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, module),
            ("learning_outcomes/core.md", ContentKind::LearningOutcome, &lo("")),
            ("learning_outcomes/other.md", ContentKind::LearningOutcome, other),
            ("lenses/main.md", ContentKind::Lens, &lens("", "### Page: P\n#### Text\ncontent:: Shared\n")),
        ]);

        let outcome = flatten(&index);
        assert!(outcome.errors.is_empty(), "{:?}", outcome.errors);
        assert_eq!(outcome.value.unwrap().sections.len(), 2);
    }

    // ------------------------------------------------------------------------
    // Tiers
    // ------------------------------------------------------------------------

    #[test]
    fn test_wip_child_passes_through_with_error() {
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, MODULE),
            ("learning_outcomes/core.md", ContentKind::LearningOutcome, &lo("tags: [wip]\n")),
            (
                "lenses/main.md",
                ContentKind::Lens,
                &lens("", "### Page: P\n#### Text\ncontent:: Hello from WIP content\n"),
            ),
        ]);

        let outcome = flatten(&index);
        assert_eq!(
            messages(&outcome),
            vec!["Production module references WIP learning outcome 'learning_outcomes/core.md'"]
        );
        assert_eq!(outcome.errors[0].file, "modules/intro.md");

        let module = outcome.value.unwrap();
        assert!(
            module.sections[0]
                .segments
                .iter()
                .any(|s| s.text().contains("Hello from WIP content"))
        );
    }

    #[test]
    fn test_ignored_child_skipped_silently() {
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, MODULE),
            ("learning_outcomes/core.md", ContentKind::LearningOutcome, &lo("tags: [ignored]\n")),
            ("lenses/main.md", ContentKind::Lens, &lens("", "### Page: P\n#### Text\ncontent:: Hidden\n")),
        ]);

        let outcome = flatten(&index);
        assert!(outcome.errors.is_empty());
        assert!(outcome.value.unwrap().sections.is_empty());
    }

    #[test]
    fn test_ignored_broken_child_skipped_silently() {
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, MODULE),
            ("learning_outcomes/core.md", ContentKind::LearningOutcome, "---\nid: nope\ntags: [ignored]\n---\n"),
        ]);

        let outcome = flatten(&index);
        assert!(outcome.errors.is_empty(), "{:?}", outcome.errors);
    }

    #[test]
    fn test_wip_parent_may_reference_wip() {
        let module = "---\nslug: intro\ntitle: Intro\ntags: [wip]\n---\n# Learning Outcome:\nsource:: [[learning_outcomes/core]]\n";
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, module),
            ("learning_outcomes/core.md", ContentKind::LearningOutcome, &lo("tags: [wip]\n")),
            ("lenses/main.md", ContentKind::Lens, &lens("", "### Page: P\n#### Text\ncontent:: x\n")),
        ]);

        let outcome = flatten(&index);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.value.unwrap().tier, Tier::Wip);
    }

    // ------------------------------------------------------------------------
    // Courses
    // ------------------------------------------------------------------------

    #[test]
    fn test_course_progression() {
        let course = "---\nslug: main\ntitle: Main\n---\n# Module: [[modules/intro]]\n\n# Module: [[modules/missing]]\n";
        let index = index(&[
            ("modules/intro.md", ContentKind::Module, MODULE),
            ("courses/main.md", ContentKind::Course, course),
        ]);
        let Some(Document::Course(parsed)) = index.get("courses/main.md").and_then(|f| f.document.as_ref()) else {
            panic!("course did not parse");
        };

        let outcome = Flattener::new(&index, FlattenOptions::default()).flatten_course("courses/main.md", parsed);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].message, "Referenced file not found: 'modules/missing'");
        assert_eq!(outcome.value.unwrap().progression, vec!["intro".to_string()]);
    }
}
