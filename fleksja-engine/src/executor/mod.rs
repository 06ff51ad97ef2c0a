//! Execution strategies for line pairs

use crate::chunker::LinePair;
use crate::error::Result;
use fleksja_core::morph::CacheStats;
use fleksja_core::{AnalyzerFactory, ChunkOutput, TagEnricher};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;
mod worker;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One worker, lines in order
    Sequential,
    /// Worker pool with a shared dispatch cursor
    Parallel,
    /// Pick by batch size
    Auto,
}

/// A line that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkFailure {
    /// Zero-based line index
    pub index: usize,
    /// What went wrong
    pub reason: String,
}

/// Result of one line
pub type ChunkOutcome = std::result::Result<ChunkOutput, ChunkFailure>;

/// Everything one worker hands back when it runs out of lines
#[derive(Debug, Default)]
pub struct WorkerReport {
    /// `(line index, outcome)` in the order the worker processed them
    pub outcomes: Vec<(usize, ChunkOutcome)>,
    /// Number of word forms in the worker's cache at the end
    pub cache_size: usize,
    /// The worker's cache counters
    pub cache_stats: CacheStats,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Process every line pair, one report per worker
    fn execute<F: AnalyzerFactory>(
        &self,
        pairs: &[LinePair<'_>],
        enricher: &TagEnricher,
        factory: &F,
    ) -> Result<Vec<WorkerReport>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Select a concrete mode from the number of line pairs
pub fn auto_select(chunk_count: usize, threshold: usize) -> ExecutionMode {
    if chunk_count < 2 || chunk_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_select() {
        assert_eq!(auto_select(0, 0), ExecutionMode::Sequential);
        assert_eq!(auto_select(1, 0), ExecutionMode::Sequential);
        assert_eq!(auto_select(50, 64), ExecutionMode::Sequential);

        #[cfg(feature = "parallel")]
        assert_eq!(auto_select(64, 64), ExecutionMode::Parallel);
    }
}
