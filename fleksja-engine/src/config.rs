//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::executor::{auto_select, ExecutionMode};
use serde::{Deserialize, Serialize};

/// What happens to the batch when a line fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Emit the failed line's anonymized text unchanged and carry on
    #[default]
    Isolate,
    /// Fail the whole batch on the first failed line
    Abort,
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of worker threads (None = available cores minus one)
    pub threads: Option<usize>,
    /// Minimum number of line pairs for parallel processing in auto mode
    pub parallel_threshold: usize,
    /// Failure handling
    pub failure_policy: FailurePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Auto,
            threads: None,
            parallel_threshold: 64,
            failure_policy: FailurePolicy::Isolate,
        }
    }
}

impl EngineConfig {
    /// Single worker, lines in order
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Self::default()
        }
    }

    /// Always use the worker pool
    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            threads,
            ..Self::default()
        }
    }

    /// Check values that cannot be expressed in the types
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "worker thread count must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Worker count actually used
    pub fn worker_threads(&self) -> usize {
        self.threads
            .unwrap_or_else(|| num_cpus::get().saturating_sub(1))
            .max(1)
    }

    /// Concrete mode for a batch of `chunk_count` line pairs
    pub fn resolve_mode(&self, chunk_count: usize) -> ExecutionMode {
        match self.execution_mode {
            ExecutionMode::Auto if self.worker_threads() == 1 => ExecutionMode::Sequential,
            ExecutionMode::Auto => auto_select(chunk_count, self.parallel_threshold),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => ExecutionMode::Sequential,
            mode => mode,
        }
    }
}
