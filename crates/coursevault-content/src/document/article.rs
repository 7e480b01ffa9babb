//! Source articles.

use coursevault_core::{Outcome, Tier};

use crate::markdown::{ImageRef, extract_images, find_wiki_embeds};
use crate::schema::ARTICLE;

use super::ParseOptions;
use super::common::{Context, read_prologue};

/// An article that lens sections excerpt from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub author: String,
    pub source_url: String,
    pub date: Option<String>,
    pub tier: Tier,
    /// Markdown after the frontmatter, unmodified.
    pub body: String,
    pub body_start_line: usize,
    /// Images in the body, with absolute file lines.
    pub images: Vec<ImageRef>,
}

/// Parses an article file.
///
/// Markdown images are collected with their absolute line numbers.
/// Obsidian `![[...]]` embeds are not supported and reject the article.
pub fn parse_article(text: &str, file: &str, options: &ParseOptions) -> Outcome<Article> {
    let mut cx = Context::new(file, options);
    let Some(prologue) = read_prologue(text, &ARTICLE, &mut cx) else {
        return cx.fail();
    };
    if cx.has_errors() {
        return cx.fail();
    }
    let fm = &prologue.frontmatter;

    for (line, embed) in find_wiki_embeds(prologue.body, prologue.body_start_line) {
        cx.error(line, format!("Wiki-style image embed '{embed}' is not supported"))
            .suggestion = Some("Use a markdown image: ![alt](url)".to_string());
    }

    let images = extract_images(prologue.body, prologue.body_start_line);

    cx.finish(Article {
        title: fm.get_str("title").unwrap_or_default().trim().to_string(),
        author: fm.get_str("author").unwrap_or_default().trim().to_string(),
        source_url: fm.get_str("source_url").unwrap_or_default().trim().to_string(),
        date: fm.get_str("date").filter(|d| !d.trim().is_empty()),
        tier: fm.tier(),
        body: prologue.body.to_string(),
        body_start_line: prologue.body_start_line,
        images,
    })
}
