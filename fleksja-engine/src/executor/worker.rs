//! The loop body shared by every executor

use super::{ChunkFailure, ChunkOutcome, WorkerReport};
use crate::chunker::LinePair;
use fleksja_core::{process_chunk, AnalyzerFactory, ChunkOutput, TagEnricher, WorkerContext};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// One worker: a lazily created context and the outcomes collected so far
pub(crate) struct Worker<'a, F: AnalyzerFactory> {
    factory: &'a F,
    enricher: &'a TagEnricher,
    context: Option<WorkerContext<F::Analyzer>>,
    report: WorkerReport,
}

impl<'a, F: AnalyzerFactory> Worker<'a, F> {
    pub(crate) fn new(factory: &'a F, enricher: &'a TagEnricher) -> Self {
        Self {
            factory,
            enricher,
            context: None,
            report: WorkerReport::default(),
        }
    }

    /// Process one line pair and record its outcome
    pub(crate) fn run(&mut self, pair: &LinePair<'_>) {
        let outcome: ChunkOutcome = self.process(pair).map_err(|reason| {
            log::error!("line {} failed: {reason}", pair.index + 1);
            ChunkFailure {
                index: pair.index,
                reason,
            }
        });
        self.report.outcomes.push((pair.index, outcome));
    }

    fn process(&mut self, pair: &LinePair<'_>) -> Result<ChunkOutput, String> {
        // Creation is retried on the next line when it fails.
        let context = match self.context.take() {
            Some(context) => context,
            None => {
                let factory = self.factory;
                panic::catch_unwind(AssertUnwindSafe(|| WorkerContext::from_factory(factory)))
                    .map_err(|payload| {
                        format!(
                            "cannot create worker context: panicked: {}",
                            panic_message(payload.as_ref())
                        )
                    })?
                    .map_err(|e| format!("cannot create worker context: {e}"))?
            }
        };
        let context = self.context.insert(context);

        let enricher = self.enricher;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            process_chunk(enricher, context, pair.original, pair.anonymized)
        }));

        result.map_err(|payload| {
            // A context that saw a panic is not trusted for later lines.
            self.context = None;
            format!("panicked: {}", panic_message(payload.as_ref()))
        })
    }

    /// Hand back the outcomes and final cache state
    pub(crate) fn finish(mut self) -> WorkerReport {
        if let Some(context) = &self.context {
            self.report.cache_size = context.cache_size();
            self.report.cache_stats = context.cache_stats();
        }
        log::debug!(
            "worker finished {} lines, {} cached word forms",
            self.report.outcomes.len(),
            self.report.cache_size
        );
        self.report
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleksja_core::morph::Dictionary;
    use fleksja_core::AnalyzerError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn pair<'a>(index: usize, original: &'a str, anonymized: &'a str) -> LinePair<'a> {
        LinePair {
            index,
            original,
            anonymized,
        }
    }

    #[test]
    fn test_context_created_once() {
        let created = AtomicUsize::new(0);
        let factory = || -> Result<Dictionary, AnalyzerError> {
            created.fetch_add(1, Ordering::SeqCst);
            Ok(Dictionary::new().with_entry("Annę", "Anna", "subst:sg:acc:f", &[]))
        };
        let enricher = TagEnricher::default();

        let mut worker = Worker::new(&factory, &enricher);
        worker.run(&pair(0, "Annę\n", "[name]\n"));
        worker.run(&pair(1, "Annę\n", "[name]\n"));
        let report = worker.finish();

        assert_eq!(created.load(Ordering::SeqCst), 1);
        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.cache_size, 1);
        assert_eq!(report.cache_stats.hits, 1);
    }

    #[test]
    fn test_failed_creation_is_retried() {
        let attempts = AtomicUsize::new(0);
        let factory = || -> Result<Dictionary, AnalyzerError> {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(AnalyzerError::Unavailable("warming up".into()))
            } else {
                Ok(Dictionary::new())
            }
        };
        let enricher = TagEnricher::default();

        let mut worker = Worker::new(&factory, &enricher);
        worker.run(&pair(0, "a\n", "a\n"));
        worker.run(&pair(1, "b\n", "b\n"));
        let report = worker.finish();

        let (index, first) = &report.outcomes[0];
        assert_eq!(*index, 0);
        assert!(first
            .as_ref()
            .unwrap_err()
            .reason
            .contains("cannot create worker context"));
        assert_eq!(report.outcomes[1].1.as_ref().unwrap().text, "b\n");
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic payload");
    }
}
