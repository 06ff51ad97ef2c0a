//! Enrich command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{self, StatsFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use fleksja_core::morph::DictionaryFactory;
use fleksja_core::LabelConfig;
use fleksja_engine::{Enricher, ExecutionMode, FailurePolicy};
use std::path::PathBuf;

/// Arguments for the enrich command
#[derive(Debug, Args)]
pub struct EnrichArgs {
    /// Original (non-anonymized) text
    #[arg(short = 's', long, value_name = "FILE")]
    pub original: PathBuf,

    /// Anonymized text with placeholders
    #[arg(short, long, value_name = "FILE")]
    pub anonymized: PathBuf,

    /// Morphological dictionary dump (tab-separated)
    #[arg(short, long, value_name = "FILE", env = "FLEKSJA_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Label configuration file (default: built-in Polish labels)
    #[arg(long, value_name = "FILE")]
    pub labels: Option<PathBuf>,

    /// Number of worker threads (default: available cores minus one)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Process lines in order on a single worker
    #[arg(long, conflicts_with = "threads")]
    pub sequential: bool,

    /// Fail the whole run on the first failed line
    #[arg(long)]
    pub fail_fast: bool,

    /// Statistics format, written to stderr
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub stats: Option<StatsFormat>,

    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress logging, progress and statistics
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl EnrichArgs {
    /// Execute the enrich command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting placeholder enrichment");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let enricher = self.build_enricher(&config)?;

        FileReader::require_file(&self.dictionary)?;
        let original = FileReader::read_text(&self.original)?;
        let anonymized = FileReader::read_text(&self.anonymized)?;
        let factory = DictionaryFactory::new(&self.dictionary);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(original.lines().count().min(anonymized.lines().count()));

        let result = enricher.process(&original, &anonymized, &factory);
        let output = match result {
            Ok(output) => output,
            Err(e) => {
                progress.abandon();
                return Err(CliError::ProcessingError(e.to_string()).into());
            }
        };
        progress.finish(format!(
            "Enriched {} of {} placeholders",
            output.stats.enriched, output.stats.placeholders
        ));

        output::write_text(self.output.as_deref(), &output.text)?;

        if !self.quiet {
            let format = self.stats.unwrap_or(config.output.stats);
            format
                .formatter(std::io::stderr().lock())
                .write_stats(&output.stats)
                .context("Failed to write statistics")?;
        }

        Ok(())
    }

    /// Engine from flags, falling back to the configuration file
    fn build_enricher(&self, config: &CliConfig) -> Result<Enricher> {
        let labels_path = self.labels.as_ref().or(config.processing.labels.as_ref());
        let labels = match labels_path {
            Some(path) => LabelConfig::from_file(path)
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
            None => LabelConfig::default(),
        };

        let threads = self.threads.or(match config.performance.worker_threads {
            0 => None,
            n => Some(n),
        });
        let (mode, threads) = if self.sequential {
            (ExecutionMode::Sequential, Some(1))
        } else {
            (ExecutionMode::Auto, threads)
        };
        let failure_policy = if self.fail_fast {
            FailurePolicy::Abort
        } else {
            config.processing.failure_policy
        };

        Enricher::builder()
            .labels(labels)
            .execution_mode(mode)
            .threads(threads)
            .parallel_threshold(config.performance.parallel_threshold)
            .failure_policy(failure_policy)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when called more than once.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
