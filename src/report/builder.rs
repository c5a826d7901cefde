//! Flatten count tables into report tables.
//!
//! Rows come from the baseline cut. Every comparison column is filled for
//! every row, with `0` where the key is absent at that cut. Row order is
//! decided here, never by hash map iteration.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cuts::{ArchetypeCounts, CardCounts, CutSet};

use super::table::{Cell, Row, Table};

/// Derivation label of a category's total row.
pub const TOTAL_LABEL: &str = "Total";

/// Stable row ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// Baseline count descending, then name ascending.
    #[default]
    CountDesc,
    /// Name ascending.
    Name,
}

impl RowOrder {
    fn sort<T>(self, entries: &mut [(&str, u32, T)]) {
        match self {
            RowOrder::CountDesc => {
                entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            }
            RowOrder::Name => entries.sort_by(|a, b| a.0.cmp(b.0)),
        }
    }
}

fn header(labels: &[&str], cuts: &CutSet) -> Vec<String> {
    labels
        .iter()
        .map(|l| (*l).to_string())
        .chain(std::iter::once("Count".to_string()))
        .chain(cuts.rest().iter().map(|c| c.label()))
        .collect()
}

/// Card frequency report.
///
/// Header `Name, Count, Top {T2}, ...`; one row per card seen at the
/// baseline cut.
#[must_use]
pub fn card_report(counts: &CardCounts, order: RowOrder) -> Table {
    let mut table = Table::new(header(&["Name"], counts.cuts()));

    let mut cards: Vec<_> = counts
        .baseline()
        .iter()
        .map(|(card, &count)| (card.as_str(), count, ()))
        .collect();
    order.sort(&mut cards);

    for (card, count, ()) in cards {
        let mut row: Row = SmallVec::new();
        row.push(Cell::from(card));
        row.push(Cell::Count(count));
        for tally in counts.rest() {
            row.push(Cell::Count(tally.get(card).copied().unwrap_or(0)));
        }
        table.push(row);
    }
    table
}

/// Archetype report.
///
/// Header `Category, Derivation, Count, Top {T2}, ...`. For each category
/// seen at the baseline cut: a `Total` row, then one row per variant. Each
/// total cell is the sum of the variant rows below it.
#[must_use]
pub fn archetype_report(counts: &ArchetypeCounts, order: RowOrder) -> Table {
    let mut table = Table::new(header(&["Category", "Derivation"], counts.cuts()));
    let width = counts.cuts().len();

    let mut categories: Vec<_> = counts
        .baseline()
        .iter()
        .map(|(category, variants)| {
            let mut rows: Vec<_> = variants
                .iter()
                .map(|(variant, &count)| {
                    let mut columns: SmallVec<[u32; 4]> = SmallVec::new();
                    columns.push(count);
                    columns.extend(counts.rest().iter().map(|t| t.count(category, variant)));
                    (variant.as_str(), count, columns)
                })
                .collect();
            order.sort(&mut rows);

            let mut totals: SmallVec<[u32; 4]> = SmallVec::from_elem(0, width);
            for (_, _, columns) in &rows {
                for (total, n) in totals.iter_mut().zip(columns) {
                    *total += n;
                }
            }
            (category, totals[0], (totals, rows))
        })
        .collect();
    order.sort(&mut categories);

    for (category, _, (totals, rows)) in categories {
        table.push(archetype_row(category, TOTAL_LABEL, &totals));
        for (variant, _, columns) in rows {
            table.push(archetype_row(category, variant, &columns));
        }
    }
    table
}

fn archetype_row(category: &str, derivation: &str, columns: &[u32]) -> Row {
    let mut row: Row = SmallVec::new();
    row.push(Cell::from(category));
    row.push(Cell::from(derivation));
    row.extend(columns.iter().map(|&n| Cell::Count(n)));
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cuts::{aggregate_archetypes, aggregate_cards};
    use crate::rules::{Rule, RuleSet};
    use crate::standings::Standing;

    fn count(row: &Row, column: usize) -> u32 {
        row[column].as_count().unwrap()
    }

    #[test]
    fn test_card_report_header() {
        let counts = aggregate_cards(&[], &CutSet::new([1024, 64, 32, 16]).unwrap());
        let table = card_report(&counts, RowOrder::default());
        assert_eq!(table.header(), &["Name", "Count", "Top 64", "Top 32", "Top 16"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_card_report_zero_fill() {
        let standings = vec![
            Standing::new("p1", 1, ["A"]),
            Standing::new("p2", 10, ["A", "B"]),
        ];
        let counts = aggregate_cards(&standings, &CutSet::new([16, 4]).unwrap());
        let table = card_report(&counts, RowOrder::Name);

        let b = table.find(&["B"]).unwrap();
        assert_eq!(count(b, 1), 1);
        assert_eq!(count(b, 2), 0);
    }

    #[test]
    fn test_card_report_ordering() {
        let standings = vec![
            Standing::new("p1", 1, ["B", "C"]),
            Standing::new("p2", 2, ["A", "C"]),
        ];
        let counts = aggregate_cards(&standings, &CutSet::new([16]).unwrap());

        let by_count: Vec<_> = card_report(&counts, RowOrder::CountDesc)
            .records()
            .map(|r| r[0].clone())
            .collect();
        assert_eq!(by_count, vec!["C", "A", "B"]);

        let by_name: Vec<_> = card_report(&counts, RowOrder::Name)
            .records()
            .map(|r| r[0].clone())
            .collect();
        assert_eq!(by_name, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_archetype_report_totals_first() {
        let rules = RuleSet::new(vec![
            Rule::new("Cerebro-2").with_archetype("Cerebro").with_core(["Cerebro", "Lasher"]),
            Rule::new("Cerebro-3").with_archetype("Cerebro").with_core(["Cerebro"]),
        ])
        .unwrap();
        let standings = vec![
            Standing::new("p1", 1, ["Cerebro", "Lasher"]),
            Standing::new("p2", 2, ["Cerebro"]),
            Standing::new("p3", 3, ["Cerebro"]),
            Standing::new("p4", 40, ["Cerebro", "Lasher"]),
        ];
        let counts = aggregate_archetypes(&standings, &CutSet::new([64, 2]).unwrap(), &rules);
        let table = archetype_report(&counts, RowOrder::CountDesc);

        assert_eq!(table.header(), &["Category", "Derivation", "Count", "Top 2"]);
        let records: Vec<_> = table.records().collect();
        assert_eq!(
            records,
            vec![
                vec!["Cerebro", "Total", "4", "2"],
                vec!["Cerebro", "Cerebro-2", "2", "1"],
                vec!["Cerebro", "Cerebro-3", "2", "1"],
            ]
        );
    }

    #[test]
    fn test_archetype_report_category_order() {
        let rules = RuleSet::new(vec![Rule::new("Thors").with_core(["Thor"])]).unwrap();
        let standings = vec![
            Standing::new("p1", 1, ["Thor"]),
            Standing::new("p2", 2, ["X"]),
            Standing::new("p3", 3, ["Y"]),
        ];
        let counts = aggregate_archetypes(&standings, &CutSet::new([8]).unwrap(), &rules);

        let table = archetype_report(&counts, RowOrder::CountDesc);
        assert_eq!(table.rows()[0][0].as_text(), Some("Other"));

        let table = archetype_report(&counts, RowOrder::Name);
        assert_eq!(table.rows()[0][0].as_text(), Some("Other"));
        assert_eq!(table.rows()[2][0].as_text(), Some("Thors"));
    }

    #[test]
    fn test_archetype_report_missing_category_at_smaller_cut() {
        let rules = RuleSet::new(vec![Rule::new("Thors").with_core(["Thor"])]).unwrap();
        let standings = vec![
            Standing::new("p1", 1, ["X"]),
            Standing::new("p2", 30, ["Thor"]),
        ];
        let counts = aggregate_archetypes(&standings, &CutSet::new([32, 16]).unwrap(), &rules);
        let table = archetype_report(&counts, RowOrder::Name);

        let total = table.find(&["Thors", TOTAL_LABEL]).unwrap();
        assert_eq!(count(total, 2), 1);
        assert_eq!(count(total, 3), 0);
    }
}
