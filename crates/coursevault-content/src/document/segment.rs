//! Segments: the leaves of the content tree.

use std::fmt;

use crate::markdown::{parse_fields, split_sections};
use crate::schema::{
    ARTICLE_EXCERPT_SEGMENT, CHAT_SEGMENT, Schema, TEXT_SEGMENT, VIDEO_EXCERPT_SEGMENT,
};

use super::common::{Context, flag, text_value};

/// Start time of a video excerpt without a `from::` field.
pub const DEFAULT_VIDEO_FROM: &str = "0:00";

/// The four segment kinds and their heading names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Text,
    Chat,
    ArticleExcerpt,
    VideoExcerpt,
}

impl SegmentKind {
    /// Every kind, in heading-suggestion order.
    pub const ALL: [SegmentKind; 4] = [
        SegmentKind::Text,
        SegmentKind::Chat,
        SegmentKind::ArticleExcerpt,
        SegmentKind::VideoExcerpt,
    ];

    /// Heading text as authors write it.
    pub fn heading(self) -> &'static str {
        match self {
            SegmentKind::Text => "Text",
            SegmentKind::Chat => "Chat",
            SegmentKind::ArticleExcerpt => "Article-excerpt",
            SegmentKind::VideoExcerpt => "Video-excerpt",
        }
    }

    /// Looks up a kind by normalized heading keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "text" => Some(SegmentKind::Text),
            "chat" => Some(SegmentKind::Chat),
            "article-excerpt" => Some(SegmentKind::ArticleExcerpt),
            "video-excerpt" => Some(SegmentKind::VideoExcerpt),
            _ => None,
        }
    }

    /// Field schema for this kind.
    pub fn schema(self) -> &'static Schema {
        match self {
            SegmentKind::Text => &TEXT_SEGMENT,
            SegmentKind::Chat => &CHAT_SEGMENT,
            SegmentKind::ArticleExcerpt => &ARTICLE_EXCERPT_SEGMENT,
            SegmentKind::VideoExcerpt => &VIDEO_EXCERPT_SEGMENT,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// Authored prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub content: String,
    pub optional: bool,
    pub line: usize,
}

/// A tutor prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSegment {
    pub instructions: String,
    pub hide_previous_content_from_user: bool,
    pub hide_previous_content_from_tutor: bool,
    pub optional: bool,
    pub line: usize,
}

/// A span of the section's source article, bounded by text anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleExcerptSegment {
    pub from: Option<String>,
    pub to: Option<String>,
    pub optional: bool,
    pub line: usize,
}

/// A span of the section's source video, bounded by timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoExcerptSegment {
    pub from: String,
    pub to: String,
    pub optional: bool,
    pub line: usize,
}

/// One parsed segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(TextSegment),
    Chat(ChatSegment),
    ArticleExcerpt(ArticleExcerptSegment),
    VideoExcerpt(VideoExcerptSegment),
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Text(_) => SegmentKind::Text,
            Segment::Chat(_) => SegmentKind::Chat,
            Segment::ArticleExcerpt(_) => SegmentKind::ArticleExcerpt,
            Segment::VideoExcerpt(_) => SegmentKind::VideoExcerpt,
        }
    }

    /// 1-based line of the segment heading.
    pub fn line(&self) -> usize {
        match self {
            Segment::Text(s) => s.line,
            Segment::Chat(s) => s.line,
            Segment::ArticleExcerpt(s) => s.line,
            Segment::VideoExcerpt(s) => s.line,
        }
    }
}

/// Parses the segment headings at `level` inside a section body.
///
/// Returns the section's own field text (everything before the first
/// segment heading) with its first line, plus the segments that parsed.
/// Segments of a kind outside `allowed` are errors.
pub(crate) fn parse_segments(
    text: &str,
    first_line: usize,
    level: usize,
    allowed: &[SegmentKind],
    section_name: &str,
    cx: &mut Context<'_>,
) -> (String, usize, Vec<Segment>) {
    let split = split_sections(text, level, first_line);
    let mut segments = Vec::new();

    for section in &split.sections {
        let Some(kind) = SegmentKind::from_keyword(&section.keyword) else {
            let expected: Vec<&str> = allowed.iter().map(|k| k.heading()).collect();
            cx.unknown_heading("segment", &section.heading, section.line, &expected);
            continue;
        };

        if !allowed.contains(&kind) {
            cx.error(
                section.line,
                format!("{kind} segments are not allowed in {section_name} sections"),
            );
            continue;
        }

        let block = parse_fields(&section.content, section.content_line);
        cx.check_block(&block, kind.schema(), section.line);

        let optional = flag(&block, "optional");
        let line = section.line;
        let segment = match kind {
            SegmentKind::Text => Segment::Text(TextSegment {
                content: text_value(&block, "content").unwrap_or_default(),
                optional,
                line,
            }),
            SegmentKind::Chat => Segment::Chat(ChatSegment {
                instructions: text_value(&block, "instructions").unwrap_or_default(),
                hide_previous_content_from_user: flag(&block, "hidePreviousContentFromUser"),
                hide_previous_content_from_tutor: flag(&block, "hidePreviousContentFromTutor"),
                optional,
                line,
            }),
            SegmentKind::ArticleExcerpt => Segment::ArticleExcerpt(ArticleExcerptSegment {
                from: text_value(&block, "from"),
                to: text_value(&block, "to"),
                optional,
                line,
            }),
            SegmentKind::VideoExcerpt => {
                let from = text_value(&block, "from").unwrap_or_else(|| DEFAULT_VIDEO_FROM.into());
                // Timestamp format is checked at extraction time.
                let to = text_value(&block, "to").unwrap_or_default();
                Segment::VideoExcerpt(VideoExcerptSegment {
                    from,
                    to,
                    optional,
                    line,
                })
            }
        };
        segments.push(segment);
    }

    (split.preamble, split.preamble_line, segments)
}
