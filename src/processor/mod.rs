//! Directory walk and per-file header processing
//!
//! The processor walks the root once, dropping hidden entries, ignored paths
//! and unknown file types, then rewrites the remaining files with the
//! selected [`ExecutionStrategy`]. Outcomes are tallied by the collecting
//! thread only.

pub mod stats;

pub use stats::{ProcessingOutcome, Stats};

use crate::cli::Output;
use crate::config::PathfixConfig;
use crate::filters::{
    BinaryFilter, Candidate, Filter, FilterDecision, HiddenFilter, IgnoreFilter, IgnoreRules,
    first_skip, is_hidden,
};
use crate::header::{self, CommentStyle};
use crate::parallel::ExecutionStrategy;
use crate::shared::paths::relative_slash_path;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Ignore file read from the walk root
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Below this many candidate files the run stays sequential
const MIN_FILES_FOR_PARALLEL: usize = 50;

/// Share of CPU cores used for workers
const THREAD_PERCENTAGE: u8 = 75;

/// Runtime options that are not part of the configuration document
#[derive(Debug, Clone, Default)]
pub struct ProcessorOptions {
    /// Compute changes without writing them
    pub dry_run: bool,
    /// Worker cap; 0 picks from CPU count, 1 forces sequential
    pub jobs: usize,
}

/// A file that passed every walk-time filter
#[derive(Debug, Clone)]
struct WorkItem {
    path: PathBuf,
    relative: String,
    style: CommentStyle,
}

/// Header processor for one root directory
pub struct Processor {
    root: PathBuf,
    config: PathfixConfig,
    options: ProcessorOptions,
}

impl Processor {
    pub fn new(root: PathBuf, config: PathfixConfig, options: ProcessorOptions) -> Self {
        Self {
            root,
            config,
            options,
        }
    }

    /// Walk the root and process every eligible file
    ///
    /// Fails only when the ignore file exists but cannot be read; every
    /// per-file problem is counted in the returned statistics.
    pub fn process(&self, output: &Output) -> Result<Stats> {
        let filters = self.path_filters()?;
        let mut stats = Stats::default();

        let work_items = self.collect_work_items(&filters, output, &mut stats);
        let strategy = self.execution_strategy(work_items.len());
        tracing::debug!("Processing {} files with {:?}", work_items.len(), strategy);

        let results = strategy.execute(work_items, |item| {
            (item.path.clone(), self.process_file(item))
        })?;

        for (path, outcome) in &results {
            output.file_outcome(path, outcome, self.options.dry_run);
            stats.record_processed(outcome);
        }

        tracing::info!("{}", stats);
        Ok(stats)
    }

    /// Filters applied to every walked file, in order
    fn path_filters(&self) -> Result<Vec<Box<dyn Filter>>> {
        let mut filters: Vec<Box<dyn Filter>> = Vec::new();

        if !self.config.include_hidden {
            filters.push(Box::new(HiddenFilter));
        }

        if !self.config.include_git_ignored {
            let mut rules = IgnoreRules::from_file(&self.root.join(GITIGNORE_FILE))
                .context("Error loading .gitignore")?;
            rules.extend(&self.config.additional_ignores);
            tracing::debug!("Using {} ignore rules", rules.len());
            filters.push(Box::new(IgnoreFilter::new(rules)));
        }

        Ok(filters)
    }

    fn collect_work_items(
        &self,
        filters: &[Box<dyn Filter>],
        output: &Output,
        stats: &mut Stats,
    ) -> Vec<WorkItem> {
        let include_hidden = self.config.include_hidden;
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| include_hidden || !is_hidden_dir(entry));

        let mut work_items = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    stats.record(&ProcessingOutcome::Errored(e.to_string()));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(relative) = relative_slash_path(&self.root, path) else {
                let outcome = ProcessingOutcome::Errored("path is outside the root".to_string());
                output.file_outcome(path, &outcome, self.options.dry_run);
                stats.record(&outcome);
                continue;
            };

            let candidate = Candidate::new(path, &relative);
            if let FilterDecision::Skip(reason) = first_skip(filters, &candidate) {
                output.file_skipped(path, reason);
                stats.record(&ProcessingOutcome::Skipped(reason));
                continue;
            }

            let Some(style) = self.config.style_for(path) else {
                output.file_skipped(path, "unsupported file type");
                stats.record(&ProcessingOutcome::Skipped("unsupported file type"));
                continue;
            };

            work_items.push(WorkItem {
                path: path.to_path_buf(),
                relative,
                style: style.clone(),
            });
        }

        work_items
    }

    fn execution_strategy(&self, file_count: usize) -> ExecutionStrategy {
        if self.options.jobs == 1 {
            return ExecutionStrategy::Sequential;
        }

        let workers =
            ExecutionStrategy::calculate_optimal_workers(self.options.jobs, THREAD_PERCENTAGE);
        ExecutionStrategy::auto(file_count, MIN_FILES_FOR_PARALLEL, workers)
    }

    fn process_file(&self, item: &WorkItem) -> ProcessingOutcome {
        self.try_process_file(item)
            .unwrap_or_else(|e| ProcessingOutcome::Errored(format!("{e:#}")))
    }

    fn try_process_file(&self, item: &WorkItem) -> Result<ProcessingOutcome> {
        let candidate = Candidate::new(&item.path, &item.relative);
        if let FilterDecision::Skip(reason) = BinaryFilter.filter(&candidate) {
            return Ok(ProcessingOutcome::Skipped(reason));
        }

        let bytes = fs::read(&item.path).context("Failed to read file")?;
        let content = String::from_utf8(bytes).context("File is not valid UTF-8")?;

        let rewrite = header::rewrite(
            &content,
            &item.relative,
            &item.style,
            &self.config.comment_prefix,
        )?;

        if rewrite.content == content {
            return Ok(ProcessingOutcome::Unchanged);
        }

        if !self.options.dry_run {
            fs::write(&item.path, &rewrite.content).context("Failed to write file")?;
        }

        Ok(ProcessingOutcome::Updated {
            replaced_header: rewrite.replaced_existing,
        })
    }
}

/// Hidden directory below the root; the root itself is never pruned
fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && is_hidden(&entry.file_name().to_string_lossy())
}
