//! Result assembly
//!
//! Workers finish lines in any order; the assembler puts each outcome back
//! at its line index and joins the text, so output order always follows
//! input order.

use crate::chunker::LinePair;
use crate::config::FailurePolicy;
use crate::error::{EngineError, Result};
use crate::executor::{ChunkFailure, ChunkOutcome, WorkerReport};
use fleksja_core::morph::CacheStats;

/// Joined output of one batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    /// Output text, lines in input order
    pub text: String,
    /// Placeholders seen on successfully processed lines
    pub placeholders: usize,
    /// Placeholders that received inflection
    pub enriched: usize,
    /// Failed lines in index order
    pub failures: Vec<ChunkFailure>,
    /// Sum of the workers' final cache sizes
    pub cache_size: usize,
    /// Merged cache counters
    pub cache_stats: CacheStats,
    /// Workers that processed at least one line
    pub active_workers: usize,
}

/// Places outcomes by index and applies the failure policy
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultAssembler {
    policy: FailurePolicy,
}

impl ResultAssembler {
    /// Create an assembler for a failure policy
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    /// Join worker reports for `pairs`
    ///
    /// Under [`FailurePolicy::Isolate`] a failed line contributes its
    /// anonymized text unchanged. Under [`FailurePolicy::Abort`] the first
    /// failed line, by index, fails the batch.
    pub fn assemble(&self, pairs: &[LinePair<'_>], reports: Vec<WorkerReport>) -> Result<Assembly> {
        let mut assembly = Assembly::default();
        let mut slots: Vec<Option<ChunkOutcome>> = vec![None; pairs.len()];

        for report in reports {
            if !report.outcomes.is_empty() {
                assembly.active_workers += 1;
            }
            assembly.cache_size += report.cache_size;
            assembly.cache_stats.merge(&report.cache_stats);
            for (index, outcome) in report.outcomes {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = Some(outcome);
                }
            }
        }

        for (pair, slot) in pairs.iter().zip(slots) {
            let outcome = slot.unwrap_or_else(|| {
                Err(ChunkFailure {
                    index: pair.index,
                    reason: "line was never processed".into(),
                })
            });
            match outcome {
                Ok(output) => {
                    assembly.text.push_str(&output.text);
                    assembly.placeholders += output.placeholders;
                    assembly.enriched += output.enriched;
                }
                Err(failure) => {
                    if self.policy == FailurePolicy::Abort {
                        return Err(EngineError::BatchAborted {
                            index: failure.index,
                            reason: failure.reason,
                        });
                    }
                    assembly.text.push_str(pair.anonymized);
                    assembly.failures.push(failure);
                }
            }
        }

        Ok(assembly)
    }
}
