//! Output system for pathfix
//!
//! Styled status messages plus the per-file verbose report. The run summary
//! is printed as plain text so it stays easy to grep.

use crate::processor::{ProcessingOutcome, Stats};
use console::style;
use std::path::Path;

/// Output handler for consistent CLI formatting
#[derive(Debug, Clone, Copy)]
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose: verbose && !quiet,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Report a file dropped during the walk
    pub fn file_skipped(&self, path: &Path, reason: &str) {
        self.verbose(&format!("Skipping {}: {}", reason, path.display()));
    }

    /// Report the outcome of one processed file
    pub fn file_outcome(&self, path: &Path, outcome: &ProcessingOutcome, dry_run: bool) {
        if !self.verbose {
            return;
        }

        match outcome {
            ProcessingOutcome::Updated { replaced_header } => {
                let action = if *replaced_header { "replace" } else { "add" };
                if dry_run {
                    println!("{} Would {} header: {}", style("~").yellow(), action, path.display());
                } else {
                    let done = if *replaced_header { "Replaced" } else { "Added" };
                    println!("{} {} header: {}", style("✔").green(), done, path.display());
                }
            }
            ProcessingOutcome::Unchanged => {
                self.verbose(&format!("No changes needed: {}", path.display()));
            }
            ProcessingOutcome::Skipped(reason) => self.file_skipped(path, reason),
            ProcessingOutcome::Errored(message) => {
                self.error(&format!("Error processing file {}: {}", path.display(), message));
            }
        }
    }

    /// Print the run summary, always shown
    pub fn summary(&self, stats: &Stats, dry_run: bool) {
        println!("{stats}");
        if dry_run {
            println!("This was a dry run. No files were modified.");
        }
    }
}
