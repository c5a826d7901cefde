//! Tournament standings.
//!
//! - `Standing`: player name, finishing rank, deck
//! - `Tournament`: the standings payload as served by the tournament API
//!
//! Fetching the payload is the caller's job; this module only parses it.

pub mod standing;
pub mod tournament;

pub use standing::Standing;
pub use tournament::{Tournament, TournamentEntry};
