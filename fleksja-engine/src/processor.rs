//! Engine entry point and builder

use crate::assembler::ResultAssembler;
use crate::chunker::LineChunker;
use crate::config::{EngineConfig, FailurePolicy};
use crate::error::Result;
#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;
use crate::executor::{ChunkFailure, ExecutionMode, Executor, SequentialExecutor};
use fleksja_core::morph::CacheStats;
use fleksja_core::{AnalyzerFactory, LabelConfig, TagEnricher};
use serde::Serialize;
use std::time::Instant;

/// Enriches whole anonymized documents against their originals
#[derive(Debug, Clone)]
pub struct Enricher {
    config: EngineConfig,
    tagger: TagEnricher,
}

/// Output text with statistics
#[derive(Debug, Clone)]
pub struct EngineOutput {
    /// Anonymized text with enriched placeholders
    pub text: String,
    /// What happened while producing it
    pub stats: ProcessingStats,
}

/// Processing statistics
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingStats {
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Workers that processed at least one line
    pub workers: usize,
    /// Line pairs processed
    pub lines: usize,
    /// Original lines past the end of the anonymized text
    pub dropped_original_lines: usize,
    /// Anonymized lines past the end of the original text
    pub dropped_anonymized_lines: usize,
    /// Placeholders seen
    pub placeholders: usize,
    /// Placeholders that received inflection
    pub enriched: usize,
    /// Sum of the workers' final cache sizes
    pub cache_size: usize,
    /// Merged cache counters
    pub cache: CacheStats,
    /// Lines emitted unchanged because they failed
    pub failures: Vec<ChunkFailure>,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

impl Enricher {
    /// Create an enricher with default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            tagger: TagEnricher::default(),
        }
    }

    /// Start building an enricher
    pub fn builder() -> EnricherBuilder {
        EnricherBuilder::new()
    }

    /// Engine configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Enrich `anonymized` line by line against `original`
    ///
    /// Every worker builds its own analyzer from `factory`. Only as many lines
    /// as the shorter text has are processed.
    pub fn process<F: AnalyzerFactory>(
        &self,
        original: &str,
        anonymized: &str,
        factory: &F,
    ) -> Result<EngineOutput> {
        let start = Instant::now();
        let plan = LineChunker::new().pair(original, anonymized);
        let mode = self.config.resolve_mode(plan.len());
        log::info!("enriching {} lines ({mode:?})", plan.len());

        let reports = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => {
                let executor = ParallelExecutor::new(self.config.worker_threads());
                log::debug!("starting {} workers", executor.threads());
                executor.execute(plan.pairs(), &self.tagger, factory)?
            }
            _ => SequentialExecutor.execute(plan.pairs(), &self.tagger, factory)?,
        };

        let assembly =
            ResultAssembler::new(self.config.failure_policy).assemble(plan.pairs(), reports)?;
        if !assembly.failures.is_empty() {
            log::warn!(
                "{} of {} lines failed and were left unchanged",
                assembly.failures.len(),
                plan.len()
            );
        }

        let stats = ProcessingStats {
            execution_mode: mode,
            workers: assembly.active_workers,
            lines: plan.len(),
            dropped_original_lines: plan.dropped_original(),
            dropped_anonymized_lines: plan.dropped_anonymized(),
            placeholders: assembly.placeholders,
            enriched: assembly.enriched,
            cache_size: assembly.cache_size,
            cache: assembly.cache_stats,
            failures: assembly.failures,
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        log::info!(
            "enriched {} of {} placeholders in {:.1} ms",
            stats.enriched,
            stats.placeholders,
            stats.processing_time_ms
        );

        Ok(EngineOutput {
            text: assembly.text,
            stats,
        })
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Enricher`]
#[derive(Debug, Clone, Default)]
pub struct EnricherBuilder {
    config: EngineConfig,
    labels: Option<LabelConfig>,
}

impl EnricherBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a label configuration instead of the embedded one
    pub fn labels(mut self, labels: LabelConfig) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the worker count (None = available cores minus one)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the minimum batch size for parallel processing in auto mode
    pub fn parallel_threshold(mut self, lines: usize) -> Self {
        self.config.parallel_threshold = lines;
        self
    }

    /// Set the failure policy
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    /// Replace the whole engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the enricher
    pub fn build(self) -> Result<Enricher> {
        self.config.validate()?;
        let tagger = match &self.labels {
            Some(labels) => {
                labels.validate()?;
                TagEnricher::new(labels)
            }
            None => TagEnricher::default(),
        };
        Ok(Enricher {
            config: self.config,
            tagger,
        })
    }
}
