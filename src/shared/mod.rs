//! Shared utilities
//!
//! Small helpers used by both the filters and the header rewriter.

pub mod paths;
