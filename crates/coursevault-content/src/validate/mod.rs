//! Validators.
//!
//! Single-document checks ([`check_fields`], UUID and slug format) run
//! inside the parsers. The cross-file checks in [`duplicates`] run once
//! every document has parsed, since a duplicate can only be seen with the
//! whole vault in hand.

pub mod duplicates;
pub mod fields;
pub mod ids;

pub use duplicates::{SlugCheck, check_duplicate_ids, check_duplicate_slugs};
pub use fields::check_fields;
pub use ids::{check_field_uuid, check_frontmatter_uuid, check_slug};
