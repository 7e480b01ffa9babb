//! Content-maturity tiers.
//!
//! Every document carries a [`Tier`] derived from its own `tags`. The tier is
//! checked on each reference edge: production content pointing at WIP content
//! is a violation, and ignored content is skipped silently.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content-maturity classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Ready to publish.
    #[default]
    Production,
    /// Work in progress; previewable but must not be referenced from production.
    Wip,
    /// Deliberately excluded from output.
    Ignored,
}

impl Tier {
    /// Derives a tier from a document's tags.
    ///
    /// `ignore`/`ignored` wins over `wip`; anything else is production.
    /// Matching is case-insensitive and tolerates Obsidian-style `#tag`.
    ///
    /// ```rust
    /// use coursevault_core::Tier;
    ///
    /// assert_eq!(Tier::from_tags(["draft", "WIP"]), Tier::Wip);
    /// assert_eq!(Tier::from_tags(["#ignored", "wip"]), Tier::Ignored);
    /// assert_eq!(Tier::from_tags(Vec::<String>::new()), Tier::Production);
    /// ```
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tier = Tier::Production;
        for tag in tags {
            let tag = tag.as_ref().trim().trim_start_matches('#').to_lowercase();
            match tag.as_str() {
                "ignore" | "ignored" => return Tier::Ignored,
                "wip" => tier = Tier::Wip,
                _ => {}
            }
        }
        tier
    }

    /// Returns `true` when a `self`-tier document may not reference `child`.
    pub fn violated_by(self, child: Tier) -> bool {
        self == Tier::Production && child == Tier::Wip
    }

    /// Returns `true` for ignored content.
    pub fn is_ignored(self) -> bool {
        self == Tier::Ignored
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Production => f.write_str("production"),
            Tier::Wip => f.write_str("wip"),
            Tier::Ignored => f.write_str("ignored"),
        }
    }
}
