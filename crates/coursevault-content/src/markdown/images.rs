//! Image references in article bodies.
//!
//! Standard markdown images are collected with `pulldown-cmark`, so images
//! inside code spans and code blocks are not picked up. Obsidian-style
//! `![[embed]]` images are found with a line scan because CommonMark does
//! not know about them; the article parser rejects those.
//!
//! ```rust
//! use coursevault_content::markdown::images::{extract_images, find_wiki_embeds};
//!
//! let body = "Intro\n\n![Diagram](https://example.com/d.png)\n\n![[local.png]]\n";
//! let images = extract_images(body, 5);
//! assert_eq!(images[0].url, "https://example.com/d.png");
//! assert_eq!(images[0].line, 7);
//!
//! assert_eq!(find_wiki_embeds(body, 5), vec![(9, "![[local.png]]".to_string())]);
//! ```

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use serde::Serialize;

/// A markdown image with the absolute file line it appears on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    /// Image URL as written.
    pub url: String,
    /// Alt text with inline formatting stripped.
    pub alt: String,
    /// 1-based file line.
    pub line: usize,
}

/// Collects `![alt](url)` images from `body`, whose first line is `first_line`.
pub fn extract_images(body: &str, first_line: usize) -> Vec<ImageRef> {
    let mut images = Vec::new();
    let mut current: Option<ImageRef> = None;

    for (event, range) in Parser::new(body).into_offset_iter() {
        match event {
            Event::Start(Tag::Image { dest_url, .. }) => {
                current = Some(ImageRef {
                    url: dest_url.to_string(),
                    alt: String::new(),
                    line: first_line + line_offset(body, range.start),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(image) = current.as_mut() {
                    image.alt.push_str(&text);
                }
            }
            Event::End(TagEnd::Image) => {
                if let Some(image) = current.take() {
                    images.push(image);
                }
            }
            _ => {}
        }
    }

    images
}

/// Finds `![[...]]` embeds outside fenced code, returning `(line, raw text)`.
pub fn find_wiki_embeds(body: &str, first_line: usize) -> Vec<(usize, String)> {
    let mut found = Vec::new();
    let mut in_fence = false;

    for (idx, line) in body.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        let mut rest = line;
        while let Some(start) = rest.find("![[") {
            let after = &rest[start..];
            let end = after.find("]]").map_or(after.len(), |e| e + 2);
            found.push((first_line + idx, after[..end].to_string()));
            rest = &after[end..];
        }
    }

    found
}

/// Number of newlines before byte `offset`.
fn line_offset(text: &str, offset: usize) -> usize {
    text[..offset].bytes().filter(|&b| b == b'\n').count()
}
