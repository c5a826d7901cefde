//! Tabular report model.
//!
//! A `Table` is a header plus rows of cells. Every row has exactly one cell
//! per header column. Writers turn it into CSV, JSON or anything else.

use serde::Serialize;
use smallvec::SmallVec;

/// One cell of a report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Label (card, category, derivation).
    Text(String),
    /// Count of decks.
    Count(u32),
}

impl Cell {
    /// Get as a count if this is a `Count` cell.
    #[must_use]
    pub fn as_count(&self) -> Option<u32> {
        match self {
            Cell::Count(n) => Some(*n),
            Cell::Text(_) => None,
        }
    }

    /// Get as text if this is a `Text` cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Count(_) => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Count(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self {
        Cell::Count(n)
    }
}

/// A report row. Most reports have a handful of cut columns.
pub type Row = SmallVec<[Cell; 8]>;

/// Header plus rows, in presentation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given header.
    #[must_use]
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// Panics if the row width does not match the header.
    pub fn push(&mut self, row: Row) {
        assert_eq!(
            row.len(),
            self.header.len(),
            "row has {} cells but header has {} columns",
            row.len(),
            self.header.len()
        );
        self.rows.push(row);
    }

    /// Column names.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Rows in presentation order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// First row whose leading text cells equal `key`.
    ///
    /// `table.find(&["Cerebro", "Total"])` finds the Cerebro total row of an
    /// archetype report.
    #[must_use]
    pub fn find(&self, key: &[&str]) -> Option<&Row> {
        self.rows.iter().find(|row| {
            key.len() <= row.len()
                && key
                    .iter()
                    .zip(row.iter())
                    .all(|(k, cell)| cell.as_text() == Some(*k))
        })
    }

    /// Rows rendered as strings, header excluded.
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
    }
}
