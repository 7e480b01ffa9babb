#![doc = include_str!("../README.md")]

pub mod article;
pub mod error;
mod text;
pub mod video;

pub use article::{
    ArticleExcerpt, BundledExcerpt, ExcerptRequest, bundle_article_with_collapsed,
    extract_article_excerpt,
};
pub use coursevault_core::util::timestamp::{format_timestamp, parse_timestamp};
pub use error::BundleError;
pub use video::{VideoExcerpt, WordTimestamp, extract_video_excerpt, parse_word_timestamps};
