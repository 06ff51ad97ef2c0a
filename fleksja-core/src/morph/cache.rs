//! Per-worker memoization of dictionary lookups

use super::{Analyzer, MorphCandidate};
use serde::Serialize;
use std::collections::HashMap;

/// Lookup counters for one cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups forwarded to the analyzer
    pub misses: u64,
    /// Analyzer calls that failed and were cached as empty
    pub failures: u64,
}

impl CacheStats {
    /// Add another set of counters
    pub fn merge(&mut self, other: &CacheStats) {
        self.hits += other.hits;
        self.misses += other.misses;
        self.failures += other.failures;
    }
}

/// An analyzer together with its memo table
///
/// Failed lookups are stored as empty lists, so a word that makes the
/// analyzer fail is attempted at most once per cache.
#[derive(Debug)]
pub struct MorphCache<A> {
    analyzer: A,
    entries: HashMap<String, Vec<MorphCandidate>>,
    stats: CacheStats,
}

impl<A: Analyzer> MorphCache<A> {
    /// Wrap an analyzer
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Candidates for a word form, from the cache when possible
    pub fn analyse(&mut self, word: &str) -> &[MorphCandidate] {
        if self.entries.contains_key(word) {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            let candidates = match self.analyzer.analyse(word) {
                Ok(candidates) => candidates,
                Err(err) => {
                    log::error!("morphological lookup failed: {err}");
                    self.stats.failures += 1;
                    Vec::new()
                }
            };
            self.entries.insert(word.to_string(), candidates);
        }
        self.entries.get(word).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of cached word forms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookup counters
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// The wrapped analyzer
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }
}
