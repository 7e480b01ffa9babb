//! Video transcripts.

use coursevault_core::{Outcome, Tier};

use crate::schema::VIDEO_TRANSCRIPT;

use super::ParseOptions;
use super::common::{Context, read_prologue};

/// A transcript that lens sections excerpt from.
///
/// The body is either plain prose or lines prefixed with `M:SS -` /
/// `H:MM:SS -` markers. Word-level timing lives in a sidecar file and is
/// attached at bundling time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoTranscript {
    pub title: String,
    pub channel: String,
    pub url: String,
    pub tier: Tier,
    pub body: String,
    pub body_start_line: usize,
}

/// Parses a video transcript file.
pub fn parse_video_transcript(
    text: &str,
    file: &str,
    options: &ParseOptions,
) -> Outcome<VideoTranscript> {
    let mut cx = Context::new(file, options);
    let Some(prologue) = read_prologue(text, &VIDEO_TRANSCRIPT, &mut cx) else {
        return cx.fail();
    };
    if cx.has_errors() {
        return cx.fail();
    }
    let fm = &prologue.frontmatter;

    if prologue.body.trim().is_empty() {
        cx.warning(prologue.body_start_line, "Transcript body is empty");
    }

    cx.finish(VideoTranscript {
        title: fm.get_str("title").unwrap_or_default().trim().to_string(),
        channel: fm.get_str("channel").unwrap_or_default().trim().to_string(),
        url: fm.get_str("url").unwrap_or_default().trim().to_string(),
        tier: fm.tier(),
        body: prologue.body.to_string(),
        body_start_line: prologue.body_start_line,
    })
}
