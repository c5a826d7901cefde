//! Report configuration.
//!
//! `ReportConfig` holds everything a report run needs besides the data:
//! - which cuts to report (first one is the baseline)
//! - how to order rows
//! - file names used when writing into a directory
//!
//! Cuts are stored raw and validated when a run starts, so a bad list fails
//! the run before any aggregation work happens.

use serde::{Deserialize, Serialize};

use crate::cuts::CutSet;
use crate::error::ConfigError;
use crate::report::RowOrder;

/// Cuts used when none are configured: everyone, then top 64 / 32 / 16.
pub const DEFAULT_CUTS: [u32; 4] = [1024, 64, 32, 16];

/// Settings for one report run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Cut thresholds, baseline first.
    #[serde(default = "ReportConfig::default_cuts")]
    pub cuts: Vec<u32>,

    /// Row ordering for both reports.
    #[serde(default)]
    pub row_order: RowOrder,

    /// File name of the card report inside an output directory.
    #[serde(default = "ReportConfig::default_card_file")]
    pub card_file: String,

    /// File name of the archetype report inside an output directory.
    #[serde(default = "ReportConfig::default_deck_file")]
    pub deck_file: String,
}

impl ReportConfig {
    fn default_cuts() -> Vec<u32> {
        DEFAULT_CUTS.to_vec()
    }

    fn default_card_file() -> String {
        "cards.csv".to_string()
    }

    fn default_deck_file() -> String {
        "decks.csv".to_string()
    }

    /// Create a config with the given cuts and default everything else.
    #[must_use]
    pub fn new(cuts: impl IntoIterator<Item = u32>) -> Self {
        Self {
            cuts: cuts.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the cuts.
    #[must_use]
    pub fn with_cuts(mut self, cuts: impl IntoIterator<Item = u32>) -> Self {
        self.cuts = cuts.into_iter().collect();
        self
    }

    /// Set the row order.
    #[must_use]
    pub fn with_row_order(mut self, order: RowOrder) -> Self {
        self.row_order = order;
        self
    }

    /// Set the output file names.
    #[must_use]
    pub fn with_file_names(mut self, cards: impl Into<String>, decks: impl Into<String>) -> Self {
        self.card_file = cards.into();
        self.deck_file = decks.into();
        self
    }

    /// Validate the cut list.
    ///
    /// # Errors
    ///
    /// Returns the first problem with the configured cuts.
    pub fn cut_set(&self) -> Result<CutSet, ConfigError> {
        CutSet::new(self.cuts.iter().copied())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            cuts: Self::default_cuts(),
            row_order: RowOrder::default(),
            card_file: Self::default_card_file(),
            deck_file: Self::default_deck_file(),
        }
    }
}
