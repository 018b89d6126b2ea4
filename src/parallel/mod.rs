//! Generic parallel execution framework
//!
//! Per-file work is independent, so the processor hands its candidate list
//! to an [`ExecutionStrategy`]: small runs stay on the calling thread, larger
//! ones fan out to a crossbeam worker pool. Results come back to a single
//! collector, which is the only writer of the run statistics.
//!
//! ```rust
//! use pathfix::parallel::ExecutionStrategy;
//!
//! let workers = ExecutionStrategy::calculate_optimal_workers(0, 75);
//! let strategy = ExecutionStrategy::auto(36, 50, workers);
//! assert!(matches!(strategy, ExecutionStrategy::Sequential));
//! ```

pub mod core;

pub use self::core::{ExecutionStrategy, ParallelExecutor, SequentialExecutor};
