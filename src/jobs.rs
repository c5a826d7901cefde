//! Report jobs.
//!
//! A run produces two independent reports from one standings snapshot:
//! card frequency and archetype breakdown. They run on two scoped threads
//! that only read the shared standings and classifier, and each owns its
//! count table and sink. One report failing to write does not affect the
//! other.

use std::fs;
use std::path::Path;
use std::thread;

use log::{error, info};
use serde::Serialize;

use crate::config::ReportConfig;
use crate::cuts::{aggregate_archetypes, aggregate_cards, CutSet, DataWarning};
use crate::error::{ConfigError, ReportError};
use crate::report::{archetype_report, card_report, CsvSink, Table, TableSink};
use crate::rules::ArchetypeClassifier;
use crate::standings::Standing;

/// What a successful job produced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JobSummary {
    /// Data rows written (header excluded).
    pub rows: usize,
    /// Standings inside the baseline cut.
    pub players: u32,
    /// Data-quality issues seen while aggregating.
    pub warnings: Vec<DataWarning>,
}

/// Per-report results of a run.
#[derive(Debug)]
pub struct JobOutcome {
    pub cards: Result<JobSummary, ReportError>,
    pub decks: Result<JobSummary, ReportError>,
}

impl JobOutcome {
    /// Both reports were written.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.cards.is_ok() && self.decks.is_ok()
    }

    /// Collapse into the first error, if any.
    ///
    /// # Errors
    ///
    /// Returns the card report's error first, then the archetype report's.
    pub fn into_result(self) -> Result<(JobSummary, JobSummary), ReportError> {
        Ok((self.cards?, self.decks?))
    }
}

/// Build the card report without writing it.
///
/// # Errors
///
/// Returns an error if the configured cuts are invalid.
pub fn build_card_report(standings: &[Standing], config: &ReportConfig) -> Result<Table, ConfigError> {
    let cuts = config.cut_set()?;
    Ok(card_report(&aggregate_cards(standings, &cuts), config.row_order))
}

/// Build the archetype report without writing it.
///
/// # Errors
///
/// Returns an error if the configured cuts are invalid.
pub fn build_archetype_report<C>(
    standings: &[Standing],
    classifier: &C,
    config: &ReportConfig,
) -> Result<Table, ConfigError>
where
    C: ArchetypeClassifier + ?Sized,
{
    let cuts = config.cut_set()?;
    let counts = aggregate_archetypes(standings, &cuts, classifier);
    Ok(archetype_report(&counts, config.row_order))
}

/// Runs both reports for a classifier and configuration.
///
/// ## Example
///
/// ```
/// use archetype_stats::config::ReportConfig;
/// use archetype_stats::jobs::ReportJobs;
/// use archetype_stats::report::Table;
/// use archetype_stats::rules::RuleSet;
/// use archetype_stats::standings::Standing;
///
/// let rules = RuleSet::embedded().unwrap();
/// let jobs = ReportJobs::new(&rules, ReportConfig::new([16, 1]));
/// let standings = vec![Standing::new("Alice", 1, ["Thor", "Beta Ray Bill"])];
///
/// let mut cards: Vec<Table> = Vec::new();
/// let mut decks: Vec<Table> = Vec::new();
/// let outcome = jobs.run(&standings, &mut cards, &mut decks).unwrap();
///
/// assert!(outcome.is_ok());
/// assert_eq!(decks[0].find(&["Thors", "Total"]).unwrap()[2].as_count(), Some(1));
/// ```
pub struct ReportJobs<'a, C: ArchetypeClassifier + ?Sized> {
    classifier: &'a C,
    config: ReportConfig,
}

impl<'a, C: ArchetypeClassifier + ?Sized> ReportJobs<'a, C> {
    /// Create a runner.
    pub fn new(classifier: &'a C, config: ReportConfig) -> Self {
        Self { classifier, config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Produce both reports and hand them to the given sinks.
    ///
    /// # Errors
    ///
    /// Returns a config error, before any work, if the cuts are invalid.
    /// Write failures are reported per job in the `JobOutcome`.
    pub fn run<A, B>(&self, standings: &[Standing], cards: A, decks: B) -> Result<JobOutcome, ConfigError>
    where
        A: TableSink + Send,
        B: TableSink + Send,
    {
        let cuts = self.config.cut_set()?;
        Ok(self.run_with(standings, &cuts, move || Ok(cards), move || Ok(decks)))
    }

    /// Produce both reports as CSV files inside `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the cuts are invalid or the directory cannot be
    /// created. Failures opening or writing either file are reported per job.
    pub fn run_to_dir(&self, standings: &[Standing], dir: impl AsRef<Path>) -> Result<JobOutcome, ReportError> {
        let cuts = self.config.cut_set()?;
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let card_path = dir.join(&self.config.card_file);
        let deck_path = dir.join(&self.config.deck_file);
        Ok(self.run_with(
            standings,
            &cuts,
            move || CsvSink::create(card_path),
            move || CsvSink::create(deck_path),
        ))
    }

    fn run_with<A, B>(
        &self,
        standings: &[Standing],
        cuts: &CutSet,
        open_cards: impl FnOnce() -> Result<A, ReportError> + Send,
        open_decks: impl FnOnce() -> Result<B, ReportError> + Send,
    ) -> JobOutcome
    where
        A: TableSink,
        B: TableSink,
    {
        info!("starting report jobs: num_players={} cuts={:?}", standings.len(), self.config.cuts);
        thread::scope(|s| {
            let cards = s.spawn(|| self.card_job(standings, cuts, open_cards));
            let decks = s.spawn(|| self.deck_job(standings, cuts, open_decks));
            JobOutcome {
                cards: finish("cards", cards.join()),
                decks: finish("decks", decks.join()),
            }
        })
    }

    fn card_job<S: TableSink>(
        &self,
        standings: &[Standing],
        cuts: &CutSet,
        open: impl FnOnce() -> Result<S, ReportError>,
    ) -> Result<JobSummary, ReportError> {
        let counts = aggregate_cards(standings, cuts);
        let table = card_report(&counts, self.config.row_order);
        open()?.write_table(&table)?;
        Ok(JobSummary {
            rows: table.len(),
            players: counts.players(cuts.baseline()),
            warnings: counts.warnings().to_vec(),
        })
    }

    fn deck_job<S: TableSink>(
        &self,
        standings: &[Standing],
        cuts: &CutSet,
        open: impl FnOnce() -> Result<S, ReportError>,
    ) -> Result<JobSummary, ReportError> {
        let counts = aggregate_archetypes(standings, cuts, self.classifier);
        let table = archetype_report(&counts, self.config.row_order);
        open()?.write_table(&table)?;
        Ok(JobSummary {
            rows: table.len(),
            players: counts.players(cuts.baseline()),
            warnings: counts.warnings().to_vec(),
        })
    }
}

fn finish(
    job: &str,
    joined: thread::Result<Result<JobSummary, ReportError>>,
) -> Result<JobSummary, ReportError> {
    let result = joined.unwrap_or_else(|panic| std::panic::resume_unwind(panic));
    match &result {
        Ok(summary) => info!("job finished: job={} rows={}", job, summary.rows),
        Err(err) => error!("job failed: job={} error={}", job, err),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Rule, RuleSet};

    struct FailingSink;

    impl TableSink for FailingSink {
        fn write_table(&mut self, _: &Table) -> Result<(), ReportError> {
            Err(ReportError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    fn rules() -> RuleSet {
        RuleSet::new(vec![Rule::new("ABC").with_core(["A", "B", "C"])]).unwrap()
    }

    fn standings() -> Vec<Standing> {
        vec![
            Standing::new("p1", 1, ["A", "B", "C"]),
            Standing::new("p2", 2, ["A", "D"]),
            Standing::new("p3", 20, ["A", "B", "C"]),
        ]
    }

    #[test]
    fn test_run_writes_both_reports() {
        let rules = rules();
        let jobs = ReportJobs::new(&rules, ReportConfig::new([16, 1]));
        let mut cards: Vec<Table> = Vec::new();
        let mut decks: Vec<Table> = Vec::new();

        let (card_summary, deck_summary) = jobs
            .run(&standings(), &mut cards, &mut decks)
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(card_summary.rows, 4);
        assert_eq!(card_summary.players, 2);
        assert_eq!(deck_summary.rows, 4);
        assert!(card_summary.warnings.is_empty());
        let malformed = deck_summary
            .warnings
            .iter()
            .filter(|w| matches!(w, DataWarning::MalformedDeck { .. }))
            .count();
        assert_eq!(malformed, 2);
        assert_eq!(cards.len(), 1);
        assert_eq!(decks.len(), 1);
    }

    #[test]
    fn test_config_error_before_work() {
        let rules = rules();
        let jobs = ReportJobs::new(&rules, ReportConfig::new([]));
        let mut cards: Vec<Table> = Vec::new();
        let mut decks: Vec<Table> = Vec::new();

        let err = jobs.run(&standings(), &mut cards, &mut decks).unwrap_err();
        assert_eq!(err, ConfigError::NoCuts);
        assert!(cards.is_empty());
        assert!(decks.is_empty());
    }

    #[test]
    fn test_failure_is_isolated() {
        let rules = rules();
        let jobs = ReportJobs::new(&rules, ReportConfig::new([16]));
        let mut decks: Vec<Table> = Vec::new();

        let outcome = jobs.run(&standings(), FailingSink, &mut decks).unwrap();
        assert!(!outcome.is_ok());
        assert!(matches!(outcome.cards, Err(ReportError::Io(_))));
        assert!(outcome.decks.is_ok());
        assert_eq!(decks.len(), 1);
    }

    #[test]
    fn test_build_helpers() {
        let config = ReportConfig::new([16, 1]);
        let cards = build_card_report(&standings(), &config).unwrap();
        assert_eq!(cards.find(&["A"]).unwrap()[1].as_count(), Some(2));

        let decks = build_archetype_report(&standings(), &rules(), &config).unwrap();
        assert_eq!(decks.find(&["ABC", "Total"]).unwrap()[2].as_count(), Some(1));

        let bad = ReportConfig::new([0]);
        assert_eq!(build_card_report(&standings(), &bad), Err(ConfigError::ZeroCut));
    }
}
