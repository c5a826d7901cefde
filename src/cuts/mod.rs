//! Top-N cuts and per-cut aggregation.
//!
//! ## Key Types
//!
//! - `Cut` / `CutSet`: validated thresholds, baseline first
//! - `CutTable<T>`: one tally per cut
//! - `CardCounts` / `ArchetypeCounts`: the two aggregation shapes

pub mod aggregate;
pub mod threshold;

pub use aggregate::{
    aggregate_archetypes, aggregate_cards, ArchetypeCounts, ArchetypeTally, CardCounts,
    CardTally, CutTable, DataWarning,
};
pub use threshold::{Cut, CutSet};
