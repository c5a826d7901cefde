//! Aggregation and report property tests.
//!
//! These tests verify the invariants callers rely on when reading reports:
//! - counts never shrink as a cut widens
//! - every row has a value in every cut column
//! - category totals equal the sum of their variants
//! - runs are repeatable

use proptest::prelude::*;

use archetype_stats::cards::Deck;
use archetype_stats::cuts::{aggregate_archetypes, aggregate_cards, CutSet};
use archetype_stats::report::{archetype_report, card_report, RowOrder, Table, TOTAL_LABEL};
use archetype_stats::rules::{Rule, RuleSet};
use archetype_stats::standings::Standing;

fn rules() -> RuleSet {
    RuleSet::new(vec![
        Rule::new("C0 Pair").with_archetype("C0").with_core(["C0", "C1"]),
        Rule::new("C0 Splash").with_archetype("C0").with_core(["C0"]).with_banned(["C9"]),
        Rule::new("C2").with_core(["C2"]).with_any_of(["C3", "C4"]),
        Rule::new("C5").with_any_of(["C5", "C6"]),
    ])
    .unwrap()
}

fn standings_strategy() -> impl Strategy<Value = Vec<Standing>> {
    prop::collection::vec(
        (1u32..80, prop::collection::hash_set(0usize..10, 0..6)),
        0..40,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (rank, cards))| {
                let deck: Deck = cards.into_iter().map(|c| format!("C{}", c)).collect();
                Standing::with_deck(format!("p{}", i), rank, deck)
            })
            .collect()
    })
}

fn cuts_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::hash_set(1u32..100, 1..5).prop_map(|set| set.into_iter().collect())
}

fn counts_of(table: &Table, row: usize, first: usize) -> Vec<u32> {
    table.rows()[row][first..]
        .iter()
        .map(|cell| cell.as_count().unwrap())
        .collect()
}

/// Sorting rows by their labels to compare runs without relying on order.
fn sorted_records(table: &Table) -> Vec<Vec<String>> {
    let mut records: Vec<_> = table.records().collect();
    records.sort();
    records
}

/// A category present only beyond a baseline that is the widest cut can
/// never appear: nothing exists beyond the widest cut.
#[test]
fn test_no_rows_beyond_widest_baseline() {
    let standings = vec![
        Standing::new("p1", 1, ["C0", "C1"]),
        Standing::new("p2", 50, ["C2", "C3"]),
    ];
    let cuts = CutSet::new([64, 32, 1]).unwrap();
    let table = archetype_report(&aggregate_archetypes(&standings, &cuts, &rules()), RowOrder::Name);

    let categories: Vec<_> = table
        .rows()
        .iter()
        .filter(|r| r[1].as_text() == Some(TOTAL_LABEL))
        .map(|r| r[0].to_string())
        .collect();
    assert_eq!(categories, vec!["C0", "C2"]);
}

/// With a narrow baseline, rows still come only from the baseline cut.
#[test]
fn test_narrow_baseline_limits_rows() {
    let standings = vec![
        Standing::new("p1", 1, ["C0", "C1"]),
        Standing::new("p2", 50, ["C2", "C3"]),
    ];
    let cuts = CutSet::new([8, 64]).unwrap();
    let table = archetype_report(&aggregate_archetypes(&standings, &cuts, &rules()), RowOrder::Name);

    assert!(table.find(&["C2"]).is_none());
    let total = table.find(&["C0", TOTAL_LABEL]).unwrap();
    assert_eq!(total[2].as_count(), Some(1));
    assert_eq!(total[3].as_count(), Some(1));
}

proptest! {
    /// Counts at a narrower cut never exceed counts at a wider one.
    #[test]
    fn prop_cut_monotonicity(standings in standings_strategy(), raw in cuts_strategy()) {
        let cuts = CutSet::new(raw).unwrap();
        let cards = aggregate_cards(&standings, &cuts);
        let decks = aggregate_archetypes(&standings, &cuts, &rules());

        for narrow in cuts.iter() {
            for wide in cuts.iter().filter(|w| *w > narrow) {
                let (n, w) = (cards.get(narrow).unwrap(), cards.get(wide).unwrap());
                for (card, count) in n {
                    prop_assert!(*count <= w.get(card).copied().unwrap_or(0));
                }

                let (n, w) = (decks.get(narrow).unwrap(), decks.get(wide).unwrap());
                for (category, variants) in n.iter() {
                    for (variant, count) in variants {
                        prop_assert!(*count <= w.count(category, variant));
                    }
                }
                prop_assert!(decks.players(narrow) <= decks.players(wide));
            }
        }
    }

    /// Every row has exactly one cell per header column, all counts filled.
    #[test]
    fn prop_zero_fill_complete(standings in standings_strategy(), raw in cuts_strategy()) {
        let cuts = CutSet::new(raw).unwrap();
        let cards = card_report(&aggregate_cards(&standings, &cuts), RowOrder::CountDesc);
        let decks = archetype_report(&aggregate_archetypes(&standings, &cuts, &rules()), RowOrder::CountDesc);

        prop_assert_eq!(cards.header().len(), 1 + cuts.len());
        prop_assert_eq!(decks.header().len(), 2 + cuts.len());
        for row in 0..cards.len() {
            prop_assert_eq!(counts_of(&cards, row, 1).len(), cuts.len());
        }
        for row in 0..decks.len() {
            prop_assert_eq!(counts_of(&decks, row, 2).len(), cuts.len());
        }
    }

    /// Each Total row is the column-wise sum of the variant rows after it.
    #[test]
    fn prop_total_rows_sum_variants(standings in standings_strategy(), raw in cuts_strategy()) {
        let cuts = CutSet::new(raw).unwrap();
        let table = archetype_report(&aggregate_archetypes(&standings, &cuts, &rules()), RowOrder::CountDesc);

        let mut row = 0;
        while row < table.len() {
            prop_assert_eq!(table.rows()[row][1].as_text(), Some(TOTAL_LABEL));
            let category = table.rows()[row][0].to_string();
            let totals = counts_of(&table, row, 2);

            let mut sums = vec![0u32; cuts.len()];
            row += 1;
            while row < table.len() && table.rows()[row][1].as_text() != Some(TOTAL_LABEL) {
                prop_assert_eq!(table.rows()[row][0].to_string(), category.clone());
                for (sum, n) in sums.iter_mut().zip(counts_of(&table, row, 2)) {
                    *sum += n;
                }
                row += 1;
            }
            prop_assert_eq!(totals, sums);
        }
    }

    /// Shuffling the standings list or running twice changes nothing.
    #[test]
    fn prop_idempotent(standings in standings_strategy(), raw in cuts_strategy()) {
        let cuts = CutSet::new(raw).unwrap();
        let rules = rules();

        let first = archetype_report(&aggregate_archetypes(&standings, &cuts, &rules), RowOrder::CountDesc);
        let second = archetype_report(&aggregate_archetypes(&standings, &cuts, &rules), RowOrder::CountDesc);
        prop_assert_eq!(&first, &second);

        let mut reversed = standings.clone();
        reversed.reverse();
        let third = archetype_report(&aggregate_archetypes(&reversed, &cuts, &rules), RowOrder::CountDesc);
        prop_assert_eq!(sorted_records(&first), sorted_records(&third));

        let cards = card_report(&aggregate_cards(&standings, &cuts), RowOrder::Name);
        let again = card_report(&aggregate_cards(&reversed, &cuts), RowOrder::Name);
        prop_assert_eq!(cards, again);
    }
}
