//! # pathfix - path headers for source trees
//!
//! Walks a directory and keeps the first line of every recognised source
//! file a comment naming that file's path relative to the root:
//!
//! ```text
//! // File: src/app/main.go
//! package main
//! ```
//!
//! Hidden entries and paths matched by the root `.gitignore` are left alone
//! unless configured otherwise. Running twice changes nothing.
//!
//! ## Building blocks
//!
//! - [`filters`]: gitignore-style matching plus hidden and binary checks
//! - [`header`]: comment styles and the idempotent header rewrite
//! - [`config`]: JSON and environment configuration with the built-in style table
//! - [`processor`]: the walk, per-file outcomes and run statistics

pub mod cli;
pub mod config;
pub mod filters;
pub mod header;
pub mod parallel;
pub mod processor;
pub mod shared;

pub use cli::{Cli, Output};
pub use config::PathfixConfig;
pub use header::{CommentForm, CommentStyle, HeaderError, rewrite};
pub use processor::{Processor, ProcessorOptions, Stats};
