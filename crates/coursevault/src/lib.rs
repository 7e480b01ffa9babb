#![doc = include_str!("../README.md")]

pub mod pipeline;

pub use coursevault_bundle as bundle;
pub use coursevault_content as content;
pub use coursevault_core as core;
pub use coursevault_flatten as flatten;

pub use coursevault_core::{Config, ContentError, FileMap, Severity, Tier};
pub use coursevault_flatten::{FlatCourse, FlatModule, Section, Segment};
pub use pipeline::{ProcessResult, process_content};
