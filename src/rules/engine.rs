//! Archetype classification.
//!
//! Aggregation talks to classifiers through `ArchetypeClassifier`:
//! - `RuleSet` classifies by ordered first-match scan
//! - Any `Fn(&Deck) -> Classification` closure works too (tests, custom schemes)

use serde::{Deserialize, Serialize};

use crate::cards::Deck;

use super::set::RuleSet;

/// Variant name reported when no rule matches.
pub const FALLBACK_VARIANT: &str = "Miscellaneous / Other";

/// Category reported when no rule matches.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Result of classifying one deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// Specific variant (rule name).
    pub variant: String,
    /// Coarse category the variant belongs to.
    pub category: String,
    /// Set only by `Classification::fallback`, never inferred from the names.
    #[serde(default)]
    fallback: bool,
}

impl Classification {
    /// Create a classification.
    #[must_use]
    pub fn new(variant: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            category: category.into(),
            fallback: false,
        }
    }

    /// The classification given to decks no rule matches.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            fallback: true,
            ..Self::new(FALLBACK_VARIANT, FALLBACK_CATEGORY)
        }
    }

    /// Whether no rule matched. A rule that happens to use the fallback
    /// names still counts as a match.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// Assigns a deck to a variant and category.
///
/// Implementations must be total: every deck, including the empty deck,
/// gets a classification. They must also be safe to share across the
/// report job threads.
pub trait ArchetypeClassifier: Sync {
    /// Classify a deck.
    fn classify(&self, deck: &Deck) -> Classification;
}

impl ArchetypeClassifier for RuleSet {
    fn classify(&self, deck: &Deck) -> Classification {
        match self.find_match(deck) {
            Some((_, rule)) => Classification::new(&rule.name, rule.category()),
            None => Classification::fallback(),
        }
    }
}

impl<F> ArchetypeClassifier for F
where
    F: Fn(&Deck) -> Classification + Sync,
{
    fn classify(&self, deck: &Deck) -> Classification {
        self(deck)
    }
}
