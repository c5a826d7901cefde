//! Tournament API payload.
//!
//! The API reports each deck as a map from card name to an object with the
//! card's id and count. Only the keys are kept.

use rustc_hash::FxHashMap;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::cards::Deck;

use super::standing::Standing;

/// Deck object embedded in a standing, e.g.
/// `{"Decklist": {"Kraven": {"id": "#", "count": 1}}}`.
#[derive(Debug, Default, Deserialize)]
struct DeckObject {
    #[serde(rename = "Decklist", default, deserialize_with = "null_as_empty")]
    cards: FxHashMap<String, IgnoredAny>,
}

/// `null` reads as an empty deck, like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<FxHashMap<String, IgnoredAny>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// One row of the API's `standings` array.
#[derive(Debug, Deserialize)]
pub struct TournamentEntry {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    pub standing: u32,
    /// Raw deck code; not decoded.
    #[serde(default)]
    pub decklist: Option<String>,
    #[serde(rename = "deckObj", default)]
    deck: Option<DeckObject>,
}

impl TournamentEntry {
    /// The deck as a card set. Empty if the API sent no deck object.
    #[must_use]
    pub fn deck(&self) -> Deck {
        self.deck
            .as_ref()
            .map(|d| d.cards.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<TournamentEntry> for Standing {
    fn from(entry: TournamentEntry) -> Self {
        let deck = entry.deck();
        Standing::with_deck(entry.name, entry.standing, deck)
    }
}

/// Tournament results payload.
///
/// ## Example
///
/// ```
/// use archetype_stats::standings::Tournament;
///
/// let tournament = Tournament::from_json(r#"{
///     "TID": "qualifier-1",
///     "standings": [
///         {"name": "Alice", "standing": 1,
///          "deckObj": {"Decklist": {"Hela": {"id": "1", "count": 1}}}}
///     ]
/// }"#).unwrap();
///
/// let standings = tournament.into_standings();
/// assert!(standings[0].deck.contains("Hela"));
/// ```
#[derive(Debug, Deserialize)]
pub struct Tournament {
    #[serde(rename = "TID")]
    pub tid: String,
    #[serde(default)]
    pub standings: Vec<TournamentEntry>,
}

impl Tournament {
    /// Parse an API response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a valid tournament payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convert every entry to a `Standing`, keeping list order.
    #[must_use]
    pub fn into_standings(self) -> Vec<Standing> {
        self.standings.into_iter().map(Standing::from).collect()
    }
}
