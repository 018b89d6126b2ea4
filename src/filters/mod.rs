//! Filters deciding which walked files reach the header rewriter
//!
//! Each filter looks at one candidate file and either lets it through or
//! names the reason it was skipped. Path filters (hidden entries, ignore
//! rules) run during the walk; the binary filter runs right before a file is
//! read.

pub mod binary;
pub mod hidden;
pub mod ignore;

pub use binary::{BinaryFilter, is_binary};
pub use hidden::{HiddenFilter, is_hidden};
pub use ignore::{IgnoreFilter, IgnoreRule, IgnoreRules};

use std::path::Path;

/// A walked file as seen by the filters
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Absolute path on disk
    pub path: &'a Path,
    /// Forward-slash path relative to the walk root
    pub relative: &'a str,
}

impl<'a> Candidate<'a> {
    pub fn new(path: &'a Path, relative: &'a str) -> Self {
        Self { path, relative }
    }
}

/// Decision for whether to process or skip a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Continue processing this file
    Process,
    /// Skip this file with a reason
    Skip(&'static str),
}

/// Common trait for all filters
pub trait Filter: Send + Sync {
    /// Apply the filter to a candidate
    fn filter(&self, candidate: &Candidate<'_>) -> FilterDecision;

    /// Get the name of this filter for debugging/logging
    fn name(&self) -> &'static str;
}

/// Run filters in order, stopping at the first skip
pub fn first_skip(filters: &[Box<dyn Filter>], candidate: &Candidate<'_>) -> FilterDecision {
    for filter in filters {
        if let FilterDecision::Skip(reason) = filter.filter(candidate) {
            tracing::trace!("{} skipped {}: {}", filter.name(), candidate.relative, reason);
            return FilterDecision::Skip(reason);
        }
    }
    FilterDecision::Process
}
