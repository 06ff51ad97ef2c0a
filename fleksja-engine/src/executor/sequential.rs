//! Sequential execution strategy

use super::worker::Worker;
use super::{ExecutionMode, Executor, WorkerReport};
use crate::chunker::LinePair;
use crate::error::Result;
use fleksja_core::{AnalyzerFactory, TagEnricher};

/// One worker processing every line in order
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute<F: AnalyzerFactory>(
        &self,
        pairs: &[LinePair<'_>],
        enricher: &TagEnricher,
        factory: &F,
    ) -> Result<Vec<WorkerReport>> {
        let mut worker = Worker::new(factory, enricher);
        for pair in pairs {
            worker.run(pair);
        }
        Ok(vec![worker.finish()])
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
