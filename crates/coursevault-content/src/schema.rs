//! Field schemas for every content type, section, and segment.
//!
//! Each schema is a small static record of required, optional, and boolean
//! fields. All field checking goes through one routine,
//! [`check_fields`](crate::validate::check_fields), driven by these records;
//! no parser keeps its own field list.
//!
//! Schemas are grouped into [`SchemaFamily`] values. A field unknown to a
//! schema is compared against every field of its family, so a stray
//! `source_url` in a lens's frontmatter is recognised as a real (if
//! misplaced) field, and `soruce_url` as a typo of it.

use coursevault_core::ContentKind;

/// Which kind of field map a schema describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaFamily {
    /// YAML frontmatter of a document.
    Frontmatter,
    /// `key::` fields directly under a section heading.
    Section,
    /// `key::` fields under a segment heading.
    Segment,
}

/// The fields one field map may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Name used in diagnostics ("module frontmatter", "Chat segment").
    pub name: &'static str,
    /// Family used for typo and applicability checks.
    pub family: SchemaFamily,
    /// Fields that must be present and non-empty.
    pub required: &'static [&'static str],
    /// Fields that may be present.
    pub optional: &'static [&'static str],
    /// Fields (among the above) whose value must be `true`/`false`.
    pub boolean: &'static [&'static str],
}

impl Schema {
    /// All fields this schema accepts, required first.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.required.iter().chain(self.optional.iter()).copied()
    }

    /// Returns `true` if the schema accepts `key`.
    pub fn knows(&self, key: &str) -> bool {
        self.fields().any(|f| f == key)
    }

    /// Returns `true` if `key` must hold a boolean.
    pub fn is_boolean(&self, key: &str) -> bool {
        self.boolean.contains(&key)
    }
}

// ============================================================================
// Frontmatter schemas
// ============================================================================

/// Module frontmatter.
pub const MODULE: Schema = Schema {
    name: "module frontmatter",
    family: SchemaFamily::Frontmatter,
    required: &["slug", "title"],
    optional: &["contentId", "id", "discussion", "tags"],
    boolean: &[],
};

/// Course frontmatter.
pub const COURSE: Schema = Schema {
    name: "course frontmatter",
    family: SchemaFamily::Frontmatter,
    required: &["slug", "title"],
    optional: &["tags"],
    boolean: &[],
};

/// Learning-outcome frontmatter.
pub const LEARNING_OUTCOME: Schema = Schema {
    name: "learning outcome frontmatter",
    family: SchemaFamily::Frontmatter,
    required: &["id"],
    optional: &["discussion", "tags"],
    boolean: &[],
};

/// Lens frontmatter.
pub const LENS: Schema = Schema {
    name: "lens frontmatter",
    family: SchemaFamily::Frontmatter,
    required: &["id"],
    optional: &["tags"],
    boolean: &[],
};

/// Article frontmatter.
pub const ARTICLE: Schema = Schema {
    name: "article frontmatter",
    family: SchemaFamily::Frontmatter,
    required: &["title", "author", "source_url"],
    optional: &["date", "tags"],
    boolean: &[],
};

/// Video-transcript frontmatter.
pub const VIDEO_TRANSCRIPT: Schema = Schema {
    name: "video transcript frontmatter",
    family: SchemaFamily::Frontmatter,
    required: &["title", "channel", "url"],
    optional: &["tags"],
    boolean: &[],
};

// ============================================================================
// Section schemas
// ============================================================================

/// `# Learning Outcome:` reference inside a module.
pub const OUTCOME_REFERENCE: Schema = Schema {
    name: "Learning Outcome section",
    family: SchemaFamily::Section,
    required: &["source"],
    optional: &["optional"],
    boolean: &["optional"],
};

/// `# Module:` reference inside a course (the link may sit in the heading).
pub const MODULE_REFERENCE: Schema = Schema {
    name: "Module section",
    family: SchemaFamily::Section,
    required: &[],
    optional: &["source", "optional"],
    boolean: &["optional"],
};

/// `## Lens:` reference inside a learning outcome.
pub const LENS_REFERENCE: Schema = Schema {
    name: "Lens section",
    family: SchemaFamily::Section,
    required: &["source"],
    optional: &["optional"],
    boolean: &["optional"],
};

/// `Page:` section (module or lens).
pub const PAGE_SECTION: Schema = Schema {
    name: "Page section",
    family: SchemaFamily::Section,
    required: &[],
    optional: &["id", "optional"],
    boolean: &["optional"],
};

/// `### Article:` section inside a lens.
pub const ARTICLE_SECTION: Schema = Schema {
    name: "Article section",
    family: SchemaFamily::Section,
    required: &["source"],
    optional: &["optional"],
    boolean: &["optional"],
};

/// `### Video:` section inside a lens.
pub const VIDEO_SECTION: Schema = Schema {
    name: "Video section",
    family: SchemaFamily::Section,
    required: &["source"],
    optional: &["optional"],
    boolean: &["optional"],
};

// ============================================================================
// Segment schemas
// ============================================================================

/// `Text` segment.
pub const TEXT_SEGMENT: Schema = Schema {
    name: "Text segment",
    family: SchemaFamily::Segment,
    required: &["content"],
    optional: &["optional"],
    boolean: &["optional"],
};

/// `Chat` segment.
pub const CHAT_SEGMENT: Schema = Schema {
    name: "Chat segment",
    family: SchemaFamily::Segment,
    required: &["instructions"],
    optional: &[
        "hidePreviousContentFromUser",
        "hidePreviousContentFromTutor",
        "optional",
    ],
    boolean: &[
        "hidePreviousContentFromUser",
        "hidePreviousContentFromTutor",
        "optional",
    ],
};

/// `Article-excerpt` segment.
pub const ARTICLE_EXCERPT_SEGMENT: Schema = Schema {
    name: "Article-excerpt segment",
    family: SchemaFamily::Segment,
    required: &[],
    optional: &["from", "to", "optional"],
    boolean: &["optional"],
};

/// `Video-excerpt` segment.
pub const VIDEO_EXCERPT_SEGMENT: Schema = Schema {
    name: "Video-excerpt segment",
    family: SchemaFamily::Segment,
    required: &["to"],
    optional: &["from", "optional"],
    boolean: &["optional"],
};

// ============================================================================
// Registry
// ============================================================================

const FRONTMATTER_SCHEMAS: &[&Schema] = &[
    &MODULE,
    &COURSE,
    &LEARNING_OUTCOME,
    &LENS,
    &ARTICLE,
    &VIDEO_TRANSCRIPT,
];

const SECTION_SCHEMAS: &[&Schema] = &[
    &OUTCOME_REFERENCE,
    &MODULE_REFERENCE,
    &LENS_REFERENCE,
    &PAGE_SECTION,
    &ARTICLE_SECTION,
    &VIDEO_SECTION,
];

const SEGMENT_SCHEMAS: &[&Schema] = &[
    &TEXT_SEGMENT,
    &CHAT_SEGMENT,
    &ARTICLE_EXCERPT_SEGMENT,
    &VIDEO_EXCERPT_SEGMENT,
];

/// Every schema in a family.
pub fn family_schemas(family: SchemaFamily) -> &'static [&'static Schema] {
    match family {
        SchemaFamily::Frontmatter => FRONTMATTER_SCHEMAS,
        SchemaFamily::Section => SECTION_SCHEMAS,
        SchemaFamily::Segment => SEGMENT_SCHEMAS,
    }
}

/// Every field known to a family, deduplicated, in registry order.
pub fn known_fields(family: SchemaFamily) -> Vec<&'static str> {
    let mut fields: Vec<&'static str> = Vec::new();
    for schema in family_schemas(family) {
        for field in schema.fields() {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
    }
    fields
}

/// Frontmatter schema for a content type.
pub fn frontmatter_schema(kind: ContentKind) -> &'static Schema {
    match kind {
        ContentKind::Module => &MODULE,
        ContentKind::Course => &COURSE,
        ContentKind::LearningOutcome => &LEARNING_OUTCOME,
        ContentKind::Lens => &LENS,
        ContentKind::Article => &ARTICLE,
        ContentKind::VideoTranscript => &VIDEO_TRANSCRIPT,
    }
}
