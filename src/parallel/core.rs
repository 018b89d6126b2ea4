use anyhow::Result;
use crossbeam::channel::{Receiver, Sender, bounded};

/// Worker pool processing items over bounded crossbeam channels
pub struct ParallelExecutor {
    max_workers: usize,
    buffer_size: usize,
}

impl ParallelExecutor {
    pub fn new(max_workers: usize) -> Self {
        let max_workers = max_workers.max(1);
        Self {
            max_workers,
            buffer_size: max_workers * 2,
        }
    }

    /// Execute work items in parallel using a producer-consumer pattern
    ///
    /// Results arrive in completion order, not input order.
    pub fn execute<T, R, F>(&self, work_items: Vec<T>, processor: F) -> Result<Vec<R>>
    where
        T: Send,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        if work_items.is_empty() {
            return Ok(Vec::new());
        }

        let actual_workers = std::cmp::min(self.max_workers, work_items.len());
        let (work_tx, work_rx): (Sender<T>, Receiver<T>) = bounded(self.buffer_size);
        let (result_tx, result_rx): (Sender<R>, Receiver<R>) = bounded(self.buffer_size);
        let processor = &processor;

        crossbeam::thread::scope(|s| {
            for _ in 0..actual_workers {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();

                s.spawn(move |_| {
                    while let Ok(work_item) = work_rx.recv() {
                        if result_tx.send(processor(&work_item)).is_err() {
                            break; // Collector dropped
                        }
                    }
                });
            }

            // Producer thread: send work to workers
            s.spawn(move |_| {
                for work_item in work_items {
                    if work_tx.send(work_item).is_err() {
                        break; // Workers dropped
                    }
                }
            });

            // Drop our handles so the collector ends when workers finish
            drop(work_rx);
            drop(result_tx);

            result_rx.iter().collect::<Vec<R>>()
        })
        .map_err(|_| anyhow::anyhow!("Thread panic occurred during parallel execution"))
    }
}

/// Sequential execution strategy for small workloads
pub struct SequentialExecutor;

impl SequentialExecutor {
    pub fn execute<T, R, F>(work_items: Vec<T>, processor: F) -> Vec<R>
    where
        F: Fn(&T) -> R,
    {
        work_items.iter().map(processor).collect()
    }
}

/// Execution strategy enum for choosing between parallel and sequential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionStrategy {
    Sequential,
    Parallel { workers: usize },
}

impl ExecutionStrategy {
    pub fn execute<T, R, F>(&self, work_items: Vec<T>, processor: F) -> Result<Vec<R>>
    where
        T: Send,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        match self {
            ExecutionStrategy::Sequential => Ok(SequentialExecutor::execute(work_items, processor)),
            ExecutionStrategy::Parallel { workers } => {
                ParallelExecutor::new(*workers).execute(work_items, processor)
            }
        }
    }

    /// Parallel once the workload reaches `min_items_for_parallel`
    pub fn auto(work_items_count: usize, min_items_for_parallel: usize, optimal_workers: usize) -> Self {
        if work_items_count >= min_items_for_parallel && optimal_workers > 1 {
            ExecutionStrategy::Parallel {
                workers: optimal_workers,
            }
        } else {
            ExecutionStrategy::Sequential
        }
    }

    /// Workers available from CPU cores and an optional user cap
    ///
    /// `max_threads_config` of 0 means no cap. Always at least 1.
    pub fn calculate_optimal_workers(max_threads_config: usize, thread_percentage: u8) -> usize {
        let available_cores = num_cpus::get();

        let workers_by_percentage =
            std::cmp::max(1, (available_cores * thread_percentage as usize) / 100);

        if max_threads_config > 0 {
            std::cmp::min(max_threads_config, workers_by_percentage)
        } else {
            workers_by_percentage
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_executor() {
        let results = SequentialExecutor::execute(vec![1, 2, 3, 4, 5], |x| x * 2);
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_parallel_executor() {
        let executor = ParallelExecutor::new(2);
        let mut results = executor.execute(vec![1, 2, 3, 4, 5], |x| x * 2).unwrap();

        // Results may be in different order due to parallel execution
        results.sort();
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_parallel_executor_borrows_environment() {
        let offset = 10;
        let executor = ParallelExecutor::new(4);
        let mut results = executor
            .execute((0..100).collect(), |x: &i32| x + offset)
            .unwrap();

        results.sort();
        assert_eq!(results, (10..110).collect::<Vec<_>>());
    }

    #[test]
    fn test_execution_strategy() {
        let sequential = ExecutionStrategy::Sequential;
        let seq_results = sequential.execute(vec![1, 2, 3], |x| x * 3).unwrap();
        assert_eq!(seq_results, vec![3, 6, 9]);

        let parallel = ExecutionStrategy::Parallel { workers: 2 };
        let mut par_results = parallel.execute(vec![1, 2, 3], |x| x * 3).unwrap();
        par_results.sort();
        assert_eq!(par_results, vec![3, 6, 9]);
    }

    #[test]
    fn test_auto_strategy() {
        assert_eq!(ExecutionStrategy::auto(5, 10, 8), ExecutionStrategy::Sequential);
        assert_eq!(
            ExecutionStrategy::auto(50, 10, 8),
            ExecutionStrategy::Parallel { workers: 8 }
        );
        // A single worker never pays for a pool
        assert_eq!(ExecutionStrategy::auto(500, 10, 1), ExecutionStrategy::Sequential);
    }

    #[test]
    fn test_calculate_optimal_workers() {
        assert!(ExecutionStrategy::calculate_optimal_workers(0, 75) >= 1);
        assert!(ExecutionStrategy::calculate_optimal_workers(2, 100) <= 2);
    }
}
