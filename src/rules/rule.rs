//! Classification rules.
//!
//! A `Rule` names one archetype variant and describes it with three card
//! clauses. Each clause is vacuously satisfied when empty.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Deck};
use crate::error::RuleSetError;

/// One entry of a rule set.
///
/// ## Example
///
/// ```
/// use archetype_stats::cards::Deck;
/// use archetype_stats::rules::Rule;
///
/// let rule = Rule::new("Cerebro-3")
///     .with_archetype("Cerebro")
///     .with_core(["Cerebro", "Mystique"])
///     .with_banned(["Lasher"]);
///
/// let deck: Deck = ["Cerebro", "Mystique", "Scarlet Witch"].into_iter().collect();
/// assert!(rule.matches(&deck));
/// assert_eq!(rule.category(), "Cerebro");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Display name of the variant.
    pub name: String,

    /// Coarser category. Defaults to `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,

    /// Every one of these must be in the deck.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub core_cards: Vec<CardId>,

    /// At least one of these must be in the deck.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub at_least_one_of: Vec<CardId>,

    /// None of these may be in the deck.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub banned_cards: Vec<CardId>,
}

impl Rule {
    /// Create a rule that matches every deck.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            archetype: None,
            core_cards: Vec::new(),
            at_least_one_of: Vec::new(),
            banned_cards: Vec::new(),
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = Some(archetype.into());
        self
    }

    /// Add required cards.
    #[must_use]
    pub fn with_core<C: Into<CardId>>(mut self, cards: impl IntoIterator<Item = C>) -> Self {
        self.core_cards.extend(cards.into_iter().map(Into::into));
        self
    }

    /// Add cards of which at least one is required.
    #[must_use]
    pub fn with_any_of<C: Into<CardId>>(mut self, cards: impl IntoIterator<Item = C>) -> Self {
        self.at_least_one_of.extend(cards.into_iter().map(Into::into));
        self
    }

    /// Add banned cards.
    #[must_use]
    pub fn with_banned<C: Into<CardId>>(mut self, cards: impl IntoIterator<Item = C>) -> Self {
        self.banned_cards.extend(cards.into_iter().map(Into::into));
        self
    }

    /// The category this rule reports into.
    #[must_use]
    pub fn category(&self) -> &str {
        self.archetype.as_deref().unwrap_or(&self.name)
    }

    /// All core cards present.
    #[must_use]
    pub fn core_match(&self, deck: &Deck) -> bool {
        deck.contains_all(&self.core_cards)
    }

    /// No optional list, or at least one of its cards present.
    #[must_use]
    pub fn at_least_one_match(&self, deck: &Deck) -> bool {
        self.at_least_one_of.is_empty() || deck.contains_any(&self.at_least_one_of)
    }

    /// No banned card present.
    #[must_use]
    pub fn not_banned_match(&self, deck: &Deck) -> bool {
        !deck.contains_any(&self.banned_cards)
    }

    /// All three clauses hold.
    #[must_use]
    pub fn matches(&self, deck: &Deck) -> bool {
        self.core_match(deck) && self.at_least_one_match(deck) && self.not_banned_match(deck)
    }

    /// Human-readable description of the clauses.
    ///
    /// Empty clauses are omitted; a rule with no clauses explains to an
    /// empty string.
    #[must_use]
    pub fn explain(&self) -> String {
        let mut parts = Vec::new();
        if !self.core_cards.is_empty() {
            parts.push(format!("Must contain ALL of: [{}]", join(&self.core_cards)));
        }
        if !self.at_least_one_of.is_empty() {
            parts.push(format!(
                "Must contain AT LEAST ONE of: [{}]",
                join(&self.at_least_one_of)
            ));
        }
        if !self.banned_cards.is_empty() {
            parts.push(format!("Must NOT contain: [{}]", join(&self.banned_cards)));
        }
        parts.join("; ")
    }

    /// Check the rule is usable. `index` is its position in the set.
    pub(crate) fn validate(&self, index: usize) -> Result<(), RuleSetError> {
        if self.name.trim().is_empty() {
            return Err(RuleSetError::EmptyName { index });
        }
        if matches!(&self.archetype, Some(a) if a.trim().is_empty()) {
            return Err(RuleSetError::BlankArchetype {
                rule: self.name.clone(),
            });
        }
        if let Some(card) = self.core_cards.iter().find(|c| self.banned_cards.contains(c)) {
            return Err(RuleSetError::Contradiction {
                rule: self.name.clone(),
                card: card.to_string(),
            });
        }
        Ok(())
    }
}

fn join(cards: &[CardId]) -> String {
    cards
        .iter()
        .map(CardId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
