//! Placeholder enrichment
//!
//! Given a placeholder and the index of the original token it was aligned
//! to, recover the original span, look it up and decide what to attach:
//!
//! | policy      | span                        | emitted                   |
//! |-------------|-----------------------------|---------------------------|
//! | `city`      | run of capitalised tokens   | `[label][case]`           |
//! | `sex`       | one token                   | `[label][case]`           |
//! | `inflected` | one token                   | `[label][gender][case]`   |
//!
//! Anything that cannot be resolved leaves the placeholder unchanged.

mod placeholder;
pub mod policy;

pub use placeholder::EnrichedPlaceholder;
pub use policy::{clean_word, extract_case, extract_gender};

use crate::config::{LabelConfig, PolicyKind};
use crate::morph::{Analyzer, CaseNaming, MorphCache, TagMatching};
use crate::tokenizer::Token;
use std::collections::HashMap;

/// Applies label policies to placeholders
#[derive(Debug, Clone)]
pub struct TagEnricher {
    policies: HashMap<String, PolicyKind>,
    cleanup: Vec<char>,
    matching: TagMatching,
    naming: CaseNaming,
    feminine_suffix: String,
}

impl TagEnricher {
    /// Build from a label configuration
    pub fn new(config: &LabelConfig) -> Self {
        Self {
            policies: config
                .labels
                .iter()
                .map(|rule| (rule.name.clone(), rule.policy))
                .collect(),
            cleanup: config.enrichment.cleanup_chars.chars().collect(),
            matching: config.enrichment.tag_matching,
            naming: config.enrichment.case_naming,
            feminine_suffix: config.enrichment.feminine_lemma_suffix.clone(),
        }
    }

    /// Policy for a label, `None` when the label is not allow-listed
    pub fn policy(&self, label: &str) -> Option<PolicyKind> {
        self.policies.get(label).copied()
    }

    /// Case naming used when rendering
    pub fn naming(&self) -> CaseNaming {
        self.naming
    }

    /// Resolve a placeholder aligned to `original[index]`
    ///
    /// Non-placeholder tokens, labels outside the allow-list and indexes past
    /// the end of `original` all yield an unchanged placeholder.
    pub fn enrich<'t, A: Analyzer>(
        &self,
        placeholder: &Token<'t>,
        original: &[Token<'_>],
        index: usize,
        cache: &mut MorphCache<A>,
    ) -> Option<EnrichedPlaceholder<'t>> {
        let label = placeholder.label()?;
        let unchanged = EnrichedPlaceholder::unchanged(label);
        let Some(policy) = self.policy(label) else {
            return Some(unchanged);
        };
        if index >= original.len() {
            log::debug!("[{label}] aligned past the end of the original line");
            return Some(unchanged);
        }

        let enriched = match policy {
            PolicyKind::City => {
                let words = self.city_span(&original[index..]);
                policy::resolve_city(&words, cache, self.matching).map(|case| {
                    EnrichedPlaceholder {
                        case: Some(case),
                        ..unchanged
                    }
                })
            }
            PolicyKind::Sex => self
                .single_word(&original[index])
                .and_then(|word| policy::resolve_sex(&word, cache, self.matching))
                .map(|case| EnrichedPlaceholder {
                    case: Some(case),
                    ..unchanged
                }),
            PolicyKind::Inflected => self
                .single_word(&original[index])
                .and_then(|word| {
                    policy::resolve_inflected(&word, cache, self.matching, &self.feminine_suffix)
                })
                .and_then(|(gender, case)| {
                    Some(EnrichedPlaceholder {
                        gender: Some(gender?),
                        case: Some(case),
                        ..unchanged
                    })
                }),
        };

        Some(enriched.unwrap_or(unchanged))
    }

    /// Cleaned original token, `None` when nothing is left after cleaning
    fn single_word(&self, token: &Token<'_>) -> Option<String> {
        let word = clean_word(token.text, &self.cleanup);
        (!word.is_empty()).then_some(word)
    }

    /// Cleaned words of the capitalised run starting at the first token.
    /// Whitespace between words does not end the run.
    fn city_span(&self, tokens: &[Token<'_>]) -> Vec<String> {
        let mut words = Vec::new();
        for token in tokens {
            if token.is_whitespace() {
                continue;
            }
            let word = clean_word(token.text, &self.cleanup);
            match word.chars().next() {
                Some(first) if first.is_uppercase() => words.push(word),
                _ => break,
            }
        }
        words
    }
}

impl Default for TagEnricher {
    fn default() -> Self {
        Self::new(crate::config::default_config())
    }
}
