//! A single finishing position.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Deck};

/// One player's result.
///
/// `rank` decides cut membership (1 = best); the position of a standing in
/// its list means nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Player display name.
    pub name: String,

    /// Finishing rank.
    pub rank: u32,

    /// Cards played.
    #[serde(default)]
    pub deck: Deck,
}

impl Standing {
    /// Create a standing from any iterable of cards.
    #[must_use]
    pub fn new<C: Into<CardId>>(
        name: impl Into<String>,
        rank: u32,
        cards: impl IntoIterator<Item = C>,
    ) -> Self {
        Self::with_deck(name, rank, cards.into_iter().collect())
    }

    /// Create a standing from an existing deck.
    #[must_use]
    pub fn with_deck(name: impl Into<String>, rank: u32, deck: Deck) -> Self {
        Self {
            name: name.into(),
            rank,
            deck,
        }
    }
}
