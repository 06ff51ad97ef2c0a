//! Configuration module

use anyhow::{Context, Result};
use fleksja_engine::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::StatsFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Label configuration file (default: embedded Polish labels)
    pub labels: Option<PathBuf>,

    /// What to do with lines that fail
    pub failure_policy: FailurePolicy,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Statistics format
    pub stats: StatsFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            stats: StatsFormat::Text,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Minimum number of lines before the worker pool is used
    pub parallel_threshold: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            parallel_threshold: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.processing.failure_policy, FailurePolicy::Isolate);
        assert!(config.processing.labels.is_none());
        assert_eq!(config.performance.worker_threads, 0);
        assert_eq!(config.output.stats, StatsFormat::Text);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[processing]
labels = "labels.toml"
failure_policy = "abort"

[performance]
worker_threads = 3

[output]
stats = "json"
"#
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.processing.labels, Some(PathBuf::from("labels.toml")));
        assert_eq!(config.processing.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.performance.worker_threads, 3);
        assert_eq!(config.performance.parallel_threshold, 64);
        assert_eq!(config.output.stats, StatsFormat::Json);
    }

    #[test]
    fn test_bad_file_has_context() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[performance]\nworker_threads = \"many\"\n").unwrap();
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
