//! Cards and decks.
//!
//! ## Key Types
//!
//! - `CardId`: Opaque card identifier
//! - `Deck`: Set of card identifiers (presence only, no quantities)

pub mod card;
pub mod deck;

pub use card::CardId;
pub use deck::{Deck, DECK_SIZE};
