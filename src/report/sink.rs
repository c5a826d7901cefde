//! Report destinations.
//!
//! A `TableSink` persists a finished table. Failures are reported to the
//! caller of that one report and never retried here.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ReportError;

use super::table::Table;

/// Somewhere a report table can be written.
pub trait TableSink {
    /// Write the whole table, header first.
    fn write_table(&mut self, table: &Table) -> Result<(), ReportError>;
}

/// In-memory sink, used by callers that render tables themselves.
impl TableSink for Vec<Table> {
    fn write_table(&mut self, table: &Table) -> Result<(), ReportError> {
        self.push(table.clone());
        Ok(())
    }
}

impl<S: TableSink + ?Sized> TableSink for &mut S {
    fn write_table(&mut self, table: &Table) -> Result<(), ReportError> {
        (**self).write_table(table)
    }
}

/// Writes tables as CSV.
///
/// ## Example
///
/// ```
/// use archetype_stats::report::{CsvSink, Table, TableSink};
///
/// let mut out = Vec::new();
/// let table = Table::new(vec!["Name".into(), "Count".into()]);
/// CsvSink::new(&mut out).write_table(&table).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "Name,Count\n");
/// ```
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    /// Wrap any writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl CsvSink<File> {
    /// Create (or truncate) a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for writing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> TableSink for CsvSink<W> {
    fn write_table(&mut self, table: &Table) -> Result<(), ReportError> {
        self.writer.write_record(table.header())?;
        for record in table.records() {
            self.writer.write_record(&record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes tables as pretty-printed JSON, one document per table.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    /// Wrap any writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl JsonSink<File> {
    /// Create (or truncate) a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for writing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> TableSink for JsonSink<W> {
    fn write_table(&mut self, table: &Table) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut self.writer, table)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
