//! Error types.
//!
//! Structural problems (bad cut configuration, malformed rule files,
//! unwritable output) are errors. Data-quality issues in individual decks
//! are not; see [`crate::cuts::DataWarning`].

use thiserror::Error;

/// Invalid cut configuration. Rejected before any aggregation work starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("must include at least one cut of players")]
    NoCuts,
    #[error("cut thresholds must be positive")]
    ZeroCut,
    #[error("cut threshold {0} listed more than once")]
    DuplicateCut(u32),
}

/// Malformed rule definitions.
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("failed to parse rule definitions: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("rule #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("rule '{rule}' has a blank archetype")]
    BlankArchetype { rule: String },
    #[error("rule '{rule}' both requires and bans '{card}'")]
    Contradiction { rule: String, card: String },
}

/// Failure producing or writing one report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("writing csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("writing json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("writing to file: {0}")]
    Io(#[from] std::io::Error),
}
