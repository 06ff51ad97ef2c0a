//! Engine error types

use fleksja_core::{AnalyzerError, CoreError};
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core error (label configuration, analyzer)
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// The worker pool could not be started
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// A chunk failed under the abort policy
    #[error("line {} failed, batch aborted: {reason}", index + 1)]
    BatchAborted {
        /// Zero-based index of the first failed line
        index: usize,
        /// Why the line failed
        reason: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

impl From<AnalyzerError> for EngineError {
    fn from(err: AnalyzerError) -> Self {
        EngineError::Core(CoreError::Analyzer(err))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
