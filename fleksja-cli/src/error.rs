//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from the engine
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CliError::FileNotFound("słownik.tsv".to_string());
        assert_eq!(error.to_string(), "File not found: słownik.tsv");

        let error = CliError::ConfigError("unknown policy".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown policy");

        let error = CliError::ProcessingError("line 3 failed".to_string());
        assert_eq!(error.to_string(), "Processing error: line 3 failed");
    }

    #[test]
    fn test_wraps_into_anyhow() {
        let result: CliResult<()> = Err(CliError::FileNotFound("a.txt".into()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "File not found: a.txt");
    }
}
