//! Error types for the core crate

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a morphological analyzer
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The analyzer could not interpret a word
    #[error("lookup failed for '{word}': {reason}")]
    Lookup {
        /// Word that was being analysed
        word: String,
        /// Underlying reason
        reason: String,
    },

    /// The analyzer backend is not available (e.g. dictionary missing)
    #[error("analyzer unavailable: {0}")]
    Unavailable(String),

    /// Malformed dictionary source
    #[error("{path}:{line}: {reason}")]
    Dictionary {
        /// Dictionary file
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// I/O error while reading dictionary data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Core-level errors
#[derive(Debug, Error)]
pub enum CoreError {
    /// Label configuration loading or validation error
    #[error("configuration error: {0}")]
    Config(String),

    /// Analyzer construction or lookup error
    #[error("analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
