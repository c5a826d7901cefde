//! Decks as sets of card identifiers.
//!
//! Only presence matters: a deck either contains a card or it doesn't.
//! Quantities carried by upstream data are dropped at ingestion.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::CardId;

/// Number of distinct cards in a well-formed deck.
pub const DECK_SIZE: usize = 12;

/// An unordered set of cards.
///
/// Malformed decks (anything other than [`DECK_SIZE`] cards) are still
/// valid values; callers decide whether to warn about them.
///
/// ## Example
///
/// ```
/// use archetype_stats::cards::Deck;
///
/// let deck: Deck = ["Hela", "Agatha Harkness", "Red Shift"].into_iter().collect();
///
/// assert!(deck.contains("Hela"));
/// assert!(!deck.contains("Thor"));
/// assert_eq!(deck.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: FxHashSet<CardId>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card. Returns `false` if it was already present.
    pub fn insert(&mut self, card: impl Into<CardId>) -> bool {
        self.cards.insert(card.into())
    }

    /// Check whether the deck contains a card.
    #[must_use]
    pub fn contains(&self, card: &str) -> bool {
        self.cards.contains(card)
    }

    /// True if every card in `cards` is in the deck.
    ///
    /// Vacuously true for an empty input.
    #[must_use]
    pub fn contains_all<'a>(&self, cards: impl IntoIterator<Item = &'a CardId>) -> bool {
        cards.into_iter().all(|c| self.cards.contains(c))
    }

    /// True if at least one card in `cards` is in the deck.
    #[must_use]
    pub fn contains_any<'a>(&self, cards: impl IntoIterator<Item = &'a CardId>) -> bool {
        cards.into_iter().any(|c| self.cards.contains(c))
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the deck has exactly [`DECK_SIZE`] cards.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.cards.len() == DECK_SIZE
    }

    /// Iterate over the cards (arbitrary order).
    pub fn iter(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter()
    }

    /// Cards sorted by identifier, for stable logging and display.
    #[must_use]
    pub fn sorted(&self) -> Vec<&CardId> {
        let mut cards: Vec<_> = self.cards.iter().collect();
        cards.sort();
        cards
    }
}

impl<C: Into<CardId>> FromIterator<C> for Deck {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<C: Into<CardId>> Extend<C> for Deck {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.cards.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a CardId;
    type IntoIter = std::collections::hash_set::Iter<'a, CardId>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
