//! Report tables and their destinations.
//!
//! - `card_report` / `archetype_report`: flatten count tables into rows
//! - `Table`: header plus rows of `Cell`s
//! - `TableSink`: where finished tables go (`CsvSink`, `JsonSink`)

pub mod builder;
pub mod sink;
pub mod table;

pub use builder::{archetype_report, card_report, RowOrder, TOTAL_LABEL};
pub use sink::{CsvSink, JsonSink, TableSink};
pub use table::{Cell, Row, Table};
