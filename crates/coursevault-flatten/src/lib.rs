#![doc = include_str!("../README.md")]

pub mod flattener;
pub mod index;
pub mod link;
pub mod output;

pub use flattener::{FlattenOptions, Flattener};
pub use index::{ContentIndex, IndexedFile};
pub use link::{LinkError, resolve_link};
pub use output::{FlatCourse, FlatModule, Section, SectionKind, Segment, SourceMeta};
