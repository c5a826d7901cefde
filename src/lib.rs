//! # archetype-stats
//!
//! Deck archetype classification and top-cut statistics for card game
//! tournaments.
//!
//! ## Pipeline
//!
//! standings → classify each deck (`rules`) → count per cut (`cuts`) →
//! flatten to tables (`report`) → write (`report::TableSink`).
//!
//! ## Design Principles
//!
//! 1. **Order is the contract**: rules are scanned in declaration order and
//!    the first match wins. Decks no rule matches fall back to
//!    "Miscellaneous / Other".
//!
//! 2. **Cuts overlap**: a cut N is "rank <= N". A standing counts toward
//!    every cut containing it, never toward just one.
//!
//! 3. **Reports are total and stable**: every row has a cell for every cut
//!    column (zero when absent), category totals come before their
//!    variants, and rows are explicitly sorted.
//!
//! 4. **No ambient state**: a `RuleSet` is an ordinary immutable value
//!    handed to whoever classifies.
//!
//! ## Modules
//!
//! - `cards`: Card identifiers and decks
//! - `standings`: Player results and the tournament API payload
//! - `rules`: Rules, rule sets and the classifier seam
//! - `cuts`: Cut thresholds and per-cut count tables
//! - `report`: Report tables, builders and sinks
//! - `config`: Report configuration
//! - `jobs`: Runs both reports concurrently
//! - `error`: Error types

pub mod cards;
pub mod config;
pub mod cuts;
pub mod error;
pub mod jobs;
pub mod report;
pub mod rules;
pub mod standings;

// Re-export commonly used types
pub use crate::cards::{CardId, Deck, DECK_SIZE};

pub use crate::standings::{Standing, Tournament};

pub use crate::rules::{
    ArchetypeClassifier, Classification, Rule, RuleSet,
    FALLBACK_CATEGORY, FALLBACK_VARIANT,
};

pub use crate::cuts::{
    aggregate_archetypes, aggregate_cards,
    ArchetypeCounts, ArchetypeTally, CardCounts, CardTally,
    Cut, CutSet, CutTable, DataWarning,
};

pub use crate::report::{
    archetype_report, card_report,
    Cell, CsvSink, JsonSink, RowOrder, Table, TableSink,
};

pub use crate::config::{ReportConfig, DEFAULT_CUTS};
pub use crate::jobs::{JobOutcome, JobSummary, ReportJobs};
pub use crate::error::{ConfigError, ReportError, RuleSetError};
