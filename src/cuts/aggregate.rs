//! Per-cut count tables.
//!
//! Each cut's table is computed over the standings inside that cut, so a
//! standing contributes to every cut containing its rank. Decks are
//! inspected (and classified) once per pass regardless of how many cuts
//! they land in.

use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Deck, DECK_SIZE};
use crate::rules::{ArchetypeClassifier, Classification};
use crate::standings::Standing;

use super::threshold::{Cut, CutSet};

/// Card → number of decks containing it.
pub type CardTally = FxHashMap<CardId, u32>;

/// Card frequency per cut.
pub type CardCounts = CutTable<CardTally>;

/// Category → variant → count per cut.
pub type ArchetypeCounts = CutTable<ArchetypeTally>;

/// Non-fatal problem found in a standing during aggregation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataWarning {
    /// Deck does not have the expected number of cards.
    MalformedDeck { player: String, size: usize },
    /// No explicit rule matched; the deck was counted as the fallback.
    Unclassified { player: String },
}

/// Category → variant → count for a single cut.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeTally {
    categories: FxHashMap<String, FxHashMap<String, u32>>,
}

impl ArchetypeTally {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one deck.
    pub fn increment(&mut self, classification: &Classification) {
        *self
            .categories
            .entry(classification.category.clone())
            .or_default()
            .entry(classification.variant.clone())
            .or_insert(0) += 1;
    }

    /// Count for a variant, zero if absent.
    #[must_use]
    pub fn count(&self, category: &str, variant: &str) -> u32 {
        self.categories
            .get(category)
            .and_then(|variants| variants.get(variant))
            .copied()
            .unwrap_or(0)
    }

    /// Sum over every variant in a category.
    #[must_use]
    pub fn category_total(&self, category: &str) -> u32 {
        self.categories
            .get(category)
            .map_or(0, |variants| variants.values().sum())
    }

    /// Variants seen for a category.
    #[must_use]
    pub fn variants(&self, category: &str) -> Option<&FxHashMap<String, u32>> {
        self.categories.get(category)
    }

    /// Iterate categories and their variant counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FxHashMap<String, u32>)> {
        self.categories.iter().map(|(c, v)| (c.as_str(), v))
    }

    /// Total decks counted.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.categories.values().flat_map(|v| v.values()).sum()
    }

    /// Check if nothing was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// One tally per cut, in `CutSet` order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutTable<T> {
    cuts: CutSet,
    tallies: Vec<T>,
    players: Vec<u32>,
    warnings: Vec<DataWarning>,
}

impl<T: Default> CutTable<T> {
    fn empty(cuts: &CutSet) -> Self {
        Self {
            cuts: cuts.clone(),
            tallies: cuts.iter().map(|_| T::default()).collect(),
            players: vec![0; cuts.len()],
            warnings: Vec::new(),
        }
    }
}

impl<T> CutTable<T> {
    /// The cuts this table was built for.
    #[must_use]
    pub fn cuts(&self) -> &CutSet {
        &self.cuts
    }

    /// Tally for the baseline cut.
    #[must_use]
    pub fn baseline(&self) -> &T {
        &self.tallies[0]
    }

    /// Tally for a cut, if it is part of the table.
    #[must_use]
    pub fn get(&self, cut: Cut) -> Option<&T> {
        self.cuts.position(cut).map(|i| &self.tallies[i])
    }

    /// Tallies for the comparison cuts, in order.
    #[must_use]
    pub fn rest(&self) -> &[T] {
        &self.tallies[1..]
    }

    /// Iterate `(cut, tally)` pairs, baseline first.
    pub fn iter(&self) -> impl Iterator<Item = (Cut, &T)> {
        self.cuts.iter().zip(self.tallies.iter())
    }

    /// Number of standings inside a cut.
    #[must_use]
    pub fn players(&self, cut: Cut) -> u32 {
        self.cuts.position(cut).map_or(0, |i| self.players[i])
    }

    /// Data-quality issues seen while building the table. Only the
    /// archetype pass records any, so a run reports each deck once.
    #[must_use]
    pub fn warnings(&self) -> &[DataWarning] {
        &self.warnings
    }

    /// Walk the standings once, handing each one to `visit` with the
    /// positions of the cuts containing it.
    fn fill(
        cuts: &CutSet,
        standings: &[Standing],
        mut visit: impl FnMut(&Standing, &[usize], &mut Vec<T>, &mut Vec<DataWarning>),
    ) -> Self
    where
        T: Default,
    {
        let mut table = Self::empty(cuts);
        for standing in standings {
            let inside = cuts.containing(standing.rank);
            if inside.is_empty() {
                continue;
            }
            for &i in &inside {
                table.players[i] += 1;
            }
            visit(standing, &inside, &mut table.tallies, &mut table.warnings);
        }
        table
    }
}

fn check_deck(standing: &Standing, warnings: &mut Vec<DataWarning>) {
    if !standing.deck.is_well_formed() {
        warn!(
            "Deck not made of {} cards: player={} size={}",
            DECK_SIZE,
            standing.name,
            standing.deck.len()
        );
        warnings.push(DataWarning::MalformedDeck {
            player: standing.name.clone(),
            size: standing.deck.len(),
        });
    }
}

fn count_cards(deck: &Deck, tally: &mut CardTally) {
    for card in deck {
        *tally.entry(card.clone()).or_insert(0) += 1;
    }
}

/// Count how many decks in each cut contain each card.
///
/// ## Example
///
/// ```
/// use archetype_stats::cuts::{aggregate_cards, CutSet};
/// use archetype_stats::standings::Standing;
///
/// let standings = vec![
///     Standing::new("a", 1, ["Hela", "Blade"]),
///     Standing::new("b", 9, ["Hela"]),
/// ];
/// let counts = aggregate_cards(&standings, &CutSet::new([16, 4]).unwrap());
///
/// assert_eq!(counts.baseline()["Hela"], 2);
/// assert_eq!(counts.rest()[0]["Hela"], 1);
/// ```
#[must_use]
pub fn aggregate_cards(standings: &[Standing], cuts: &CutSet) -> CardCounts {
    info!("parsing cards: num_players={}", standings.len());
    let table = CutTable::<CardTally>::fill(cuts, standings, |standing, inside, tallies, _| {
        for &i in inside {
            count_cards(&standing.deck, &mut tallies[i]);
        }
    });
    for (cut, tally) in table.iter() {
        debug!("{}: {} distinct cards", cut, tally.len());
    }
    table
}

/// Classify every deck and count `[category][variant]` per cut.
#[must_use]
pub fn aggregate_archetypes<C>(standings: &[Standing], cuts: &CutSet, classifier: &C) -> ArchetypeCounts
where
    C: ArchetypeClassifier + ?Sized,
{
    info!("classifying decks: num_players={}", standings.len());
    let table = CutTable::<ArchetypeTally>::fill(cuts, standings, |standing, inside, tallies, warnings| {
        check_deck(standing, warnings);
        let classification = classifier.classify(&standing.deck);
        if classification.is_fallback() {
            warn!(
                "deck classified as other: player={} deck={:?}",
                standing.name,
                standing.deck.sorted()
            );
            warnings.push(DataWarning::Unclassified {
                player: standing.name.clone(),
            });
        }
        for &i in inside {
            tallies[i].increment(&classification);
        }
    });
    for (cut, tally) in table.iter() {
        debug!("{}: {} decks in {} categories", cut, tally.total(), tally.categories.len());
    }
    table
}
