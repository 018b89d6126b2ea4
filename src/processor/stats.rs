//! Per-file outcomes and run statistics

use std::fmt;

/// What happened to one walked file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    /// Header inserted or replaced; written unless in dry-run
    Updated { replaced_header: bool },
    /// Header already correct; nothing written
    Unchanged,
    /// Excluded by a filter or an unknown file type
    Skipped(&'static str),
    /// I/O, encoding, or comment style failure
    Errored(String),
}

/// Statistics from a processing run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Files that reached the rewriter stage
    pub processed: usize,
    pub updated: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl Stats {
    /// Tally an outcome without counting the file as processed
    pub fn record(&mut self, outcome: &ProcessingOutcome) {
        match outcome {
            ProcessingOutcome::Updated { .. } => self.updated += 1,
            ProcessingOutcome::Unchanged | ProcessingOutcome::Skipped(_) => self.skipped += 1,
            ProcessingOutcome::Errored(_) => self.errors += 1,
        }
    }

    /// Tally an outcome for a file that reached the rewriter stage
    pub fn record_processed(&mut self, outcome: &ProcessingOutcome) {
        self.processed += 1;
        self.record(outcome);
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} files ({} updated, {} skipped, {} errors)",
            self.processed, self.updated, self.skipped, self.errors
        )
    }
}
