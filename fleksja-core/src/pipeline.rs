//! One chunk, end to end: tokenize both sides, align, rewrite placeholders

use crate::align::{align, OpKind};
use crate::enrich::TagEnricher;
use crate::error::Result;
use crate::morph::{Analyzer, AnalyzerFactory, CacheStats, MorphCache};
use crate::tokenizer::tokenize;

/// Everything a worker owns across the chunks it processes
///
/// Created once per worker and passed explicitly into every
/// [`process_chunk`] call; never shared between workers.
#[derive(Debug)]
pub struct WorkerContext<A> {
    cache: MorphCache<A>,
    chunks_processed: usize,
}

impl<A: Analyzer> WorkerContext<A> {
    /// Context around an existing analyzer
    pub fn new(analyzer: A) -> Self {
        Self {
            cache: MorphCache::new(analyzer),
            chunks_processed: 0,
        }
    }

    /// Context around a freshly created analyzer
    pub fn from_factory<F>(factory: &F) -> Result<Self>
    where
        F: AnalyzerFactory<Analyzer = A> + ?Sized,
    {
        Ok(Self::new(factory.create()?))
    }

    /// The worker's cache
    pub fn cache(&self) -> &MorphCache<A> {
        &self.cache
    }

    /// Number of cached word forms
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Cache counters
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Chunks processed with this context
    pub fn chunks_processed(&self) -> usize {
        self.chunks_processed
    }
}

/// Result of processing one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkOutput {
    /// Anonymized text with enriched placeholders
    pub text: String,
    /// Placeholders found on the anonymized side
    pub placeholders: usize,
    /// Placeholders that received any inflection
    pub enriched: usize,
}

/// Enrich the placeholders of one anonymized chunk against its original
pub fn process_chunk<A: Analyzer>(
    enricher: &TagEnricher,
    context: &mut WorkerContext<A>,
    original: &str,
    anonymized: &str,
) -> ChunkOutput {
    let orig_tokens = tokenize(original);
    let anon_tokens = tokenize(anonymized);
    let naming = enricher.naming();

    let mut text = String::with_capacity(anonymized.len() + 32);
    let mut enriched = 0;

    for op in align(&anon_tokens, &orig_tokens) {
        match op.kind {
            OpKind::Equal | OpKind::Delete => {
                for token in &anon_tokens[op.anon.clone()] {
                    text.push_str(token.text);
                }
            }
            OpKind::Insert => {}
            OpKind::Replace => {
                for (offset, token) in anon_tokens[op.anon.clone()].iter().enumerate() {
                    let index = op.orig.start + offset;
                    match enricher.enrich(token, &orig_tokens, index, &mut context.cache) {
                        Some(placeholder) => {
                            if placeholder.is_enriched() {
                                enriched += 1;
                            }
                            placeholder.write_to(&mut text, naming);
                        }
                        None => text.push_str(token.text),
                    }
                }
            }
        }
    }

    context.chunks_processed += 1;
    ChunkOutput {
        text,
        placeholders: anon_tokens.iter().filter(|t| t.is_placeholder()).count(),
        enriched,
    }
}
