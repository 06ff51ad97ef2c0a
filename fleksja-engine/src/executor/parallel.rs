//! Parallel execution strategy
//!
//! Every thread of a dedicated pool runs one worker loop. Workers pull line
//! indices from a shared cursor until it passes the end, so a slow line only
//! holds up the worker that took it. Each worker owns its context for the
//! whole batch; the cursor is the only shared mutable state.

use super::worker::Worker;
use super::{ExecutionMode, Executor, WorkerReport};
use crate::chunker::LinePair;
use crate::error::{EngineError, Result};
use fleksja_core::{AnalyzerFactory, TagEnricher};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fixed-size worker pool
#[derive(Debug, Clone)]
pub struct ParallelExecutor {
    threads: usize,
}

impl ParallelExecutor {
    /// Create an executor with `threads` workers (at least one)
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
        }
    }

    /// Number of workers
    pub fn threads(&self) -> usize {
        self.threads
    }
}

impl Executor for ParallelExecutor {
    fn execute<F: AnalyzerFactory>(
        &self,
        pairs: &[LinePair<'_>],
        enricher: &TagEnricher,
        factory: &F,
    ) -> Result<Vec<WorkerReport>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("fleksja-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        let cursor = AtomicUsize::new(0);
        let reports = pool.broadcast(|ctx| {
            let mut worker = Worker::new(factory, enricher);
            loop {
                let index = cursor.fetch_add(1, Ordering::Relaxed);
                let Some(pair) = pairs.get(index) else {
                    break;
                };
                worker.run(pair);
            }
            log::trace!("worker {} done", ctx.index());
            worker.finish()
        });

        Ok(reports)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
