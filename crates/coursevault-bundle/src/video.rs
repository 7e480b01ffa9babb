//! Video excerpts.
//!
//! Two strategies, picked by what the transcript has:
//!
//! - **Word timestamps** (a `<name>.timestamps.json` sidecar): every word
//!   whose start lies in `[from, to]` is kept.
//! - **Line markers** (`1:05 - text` lines in the body): every marked line
//!   in `[from, to)` is kept, and both bounds must land on a marker.
//!
//! A transcript with neither is plain prose and can only be excerpted from
//! `0:00`, which yields the whole text.

use std::sync::LazyLock;

use coursevault_core::util::timestamp::{format_timestamp, parse_timestamp};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::BundleError;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[?((?:\d+:)?\d{1,2}:\d{2}(?:\.\d+)?)\]?\s*-\s*(.*)$")
        .expect("Invalid transcript marker regex")
});

/// Tolerance when comparing a requested time with a marker.
const TIME_EPSILON: f64 = 1e-6;

/// One word from a sidecar timestamp file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTimestamp {
    pub text: String,
    /// Start time in seconds.
    #[serde(deserialize_with = "seconds")]
    pub start: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTime {
    Seconds(f64),
    Text(String),
}

fn seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match RawTime::deserialize(deserializer)? {
        RawTime::Seconds(s) => Ok(s),
        RawTime::Text(text) => parse_timestamp(&text)
            .or_else(|| text.trim().parse::<f64>().ok())
            .ok_or_else(|| serde::de::Error::custom(format!("invalid start time '{text}'"))),
    }
}

/// Decodes a sidecar file: a JSON array of `{text, start}` objects, where
/// `start` is seconds or a timestamp string.
///
/// ```rust
/// use coursevault_bundle::parse_word_timestamps;
///
/// let words = parse_word_timestamps(r#"[{"text": "Hi", "start": 0.5}, {"text": "there", "start": "0:01"}]"#).unwrap();
/// assert_eq!(words[1].start, 1.0);
/// ```
pub fn parse_word_timestamps(json: &str) -> Result<Vec<WordTimestamp>, BundleError> {
    serde_json::from_str(json).map_err(|e| BundleError::InvalidWordTimestamps(e.to_string()))
}

/// An extracted transcript span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoExcerpt {
    /// Start in seconds.
    pub from: f64,
    /// End in seconds.
    pub to: f64,
    pub transcript: String,
}

/// Extracts the transcript between `from` and `to`.
///
/// `from`/`to` accept `M:SS`, `MM:SS`, `H:MM:SS` and `M:SS.ms`.
pub fn extract_video_excerpt(
    body: &str,
    from: &str,
    to: &str,
    words: Option<&[WordTimestamp]>,
) -> Result<VideoExcerpt, BundleError> {
    let from_secs =
        parse_timestamp(from).ok_or_else(|| BundleError::InvalidTimestamp(from.trim().to_string()))?;
    let to_secs =
        parse_timestamp(to).ok_or_else(|| BundleError::InvalidTimestamp(to.trim().to_string()))?;
    if from_secs > to_secs {
        return Err(BundleError::OutOfOrder {
            from: from.trim().to_string(),
            to: to.trim().to_string(),
        });
    }

    let transcript = match words.filter(|w| !w.is_empty()) {
        Some(words) => {
            log::debug!("Excerpting {} timed words from {from_secs}s to {to_secs}s", words.len());
            from_words(words, from_secs, to_secs)?
        }
        None => from_markers(body, from_secs, to_secs)?,
    };

    Ok(VideoExcerpt {
        from: from_secs,
        to: to_secs,
        transcript,
    })
}

fn from_words(words: &[WordTimestamp], from: f64, to: f64) -> Result<String, BundleError> {
    let selected: Vec<&str> = words
        .iter()
        .filter(|w| w.start >= from - TIME_EPSILON && w.start <= to + TIME_EPSILON)
        .map(|w| w.text.trim())
        .filter(|t| !t.is_empty())
        .collect();

    if selected.is_empty() {
        return Err(empty(from, to));
    }
    Ok(selected.join(" "))
}

/// A marked transcript line and any unmarked lines that follow it.
struct Block {
    start: f64,
    text: String,
}

fn marker_blocks(body: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    for line in body.lines() {
        let marker = MARKER_RE.captures(line).and_then(|caps| {
            let time = parse_timestamp(caps.get(1)?.as_str())?;
            Some((time, caps.get(2).map_or("", |m| m.as_str()).trim().to_string()))
        });
        match (marker, blocks.last_mut()) {
            (Some((start, text)), _) => blocks.push(Block { start, text }),
            (None, Some(block)) if !line.trim().is_empty() => {
                if !block.text.is_empty() {
                    block.text.push(' ');
                }
                block.text.push_str(line.trim());
            }
            (None, _) => {}
        }
    }
    blocks
}

fn from_markers(body: &str, from: f64, to: f64) -> Result<String, BundleError> {
    let blocks = marker_blocks(body);

    if blocks.is_empty() {
        if from.abs() < TIME_EPSILON {
            return Ok(body.trim().to_string());
        }
        return Err(BundleError::UntimedTranscript(format_timestamp(from)));
    }

    let hits = |t: f64| blocks.iter().any(|b| (b.start - t).abs() < TIME_EPSILON);
    if !hits(from) {
        return Err(BundleError::TimestampNotFound(format_timestamp(from)));
    }
    if !hits(to) {
        return Err(BundleError::TimestampNotFound(format_timestamp(to)));
    }

    let selected: Vec<&str> = blocks
        .iter()
        .filter(|b| b.start >= from - TIME_EPSILON && b.start < to - TIME_EPSILON)
        .map(|b| b.text.as_str())
        .filter(|t| !t.is_empty())
        .collect();

    if selected.is_empty() {
        return Err(empty(from, to));
    }
    Ok(selected.join(" "))
}

fn empty(from: f64, to: f64) -> BundleError {
    BundleError::EmptyExcerpt {
        from: format_timestamp(from),
        to: format_timestamp(to),
    }
}
