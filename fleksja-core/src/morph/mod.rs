//! Morphological analysis
//!
//! The dictionary itself is an external capability reached through the
//! [`Analyzer`] trait. Each worker builds its own analyzer through an
//! [`AnalyzerFactory`] and wraps it in a [`MorphCache`], which it owns for
//! the rest of its life.

pub mod cache;
pub mod dictionary;
pub mod tag;

pub use cache::{CacheStats, MorphCache};
pub use dictionary::{Dictionary, DictionaryFactory};
pub use tag::{Case, CaseNaming, Gender, MorphTag, Number, PartOfSpeech, TagMatching};

use crate::error::AnalyzerError;

/// Name-category flag that marks geographic names
pub const GEOGRAPHIC_NAME: &str = "nazwa_geograficzna";

/// One interpretation of a surface word form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphCandidate {
    /// Lemma, possibly with a homonym suffix (`zamek:s1`)
    pub lemma: String,
    /// Parsed morphosyntactic tag
    pub tag: MorphTag,
    /// Name categories and qualifiers attached by the dictionary
    pub flags: Vec<String>,
}

impl MorphCandidate {
    /// Create a candidate from a lemma, a raw tag string and flags
    pub fn new(lemma: impl Into<String>, tag: &str, flags: Vec<String>) -> Self {
        Self {
            lemma: lemma.into(),
            tag: MorphTag::parse(tag),
            flags,
        }
    }

    /// Lemma without a homonym suffix
    pub fn lemma_base(&self) -> &str {
        match self.lemma.split_once(':') {
            Some((base, _)) if !base.is_empty() => base,
            _ => &self.lemma,
        }
    }

    /// Whether the dictionary classifies this reading as a geographic name
    pub fn is_geographic_name(&self) -> bool {
        self.flags.iter().any(|flag| flag == GEOGRAPHIC_NAME)
    }
}

/// A morphological dictionary
///
/// Implementations return candidates in the order the dictionary produces
/// them; callers rely on that order.
pub trait Analyzer {
    /// Analyse one surface word form
    fn analyse(&self, word: &str) -> Result<Vec<MorphCandidate>, AnalyzerError>;
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    fn analyse(&self, word: &str) -> Result<Vec<MorphCandidate>, AnalyzerError> {
        (**self).analyse(word)
    }
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn analyse(&self, word: &str) -> Result<Vec<MorphCandidate>, AnalyzerError> {
        (**self).analyse(word)
    }
}

/// Builds one analyzer per worker
pub trait AnalyzerFactory: Sync {
    /// Analyzer type produced
    type Analyzer: Analyzer;

    /// Create a fresh analyzer instance
    fn create(&self) -> Result<Self::Analyzer, AnalyzerError>;
}

impl<F, A> AnalyzerFactory for F
where
    F: Fn() -> Result<A, AnalyzerError> + Sync,
    A: Analyzer,
{
    type Analyzer = A;

    fn create(&self) -> Result<A, AnalyzerError> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemma_base_strips_homonym_suffix() {
        let candidate = MorphCandidate::new("zamek:s1", "subst:sg:nom:m3", Vec::new());
        assert_eq!(candidate.lemma_base(), "zamek");

        let candidate = MorphCandidate::new("Anna", "subst:sg:acc:f", Vec::new());
        assert_eq!(candidate.lemma_base(), "Anna");

        let candidate = MorphCandidate::new(":", "interp", Vec::new());
        assert_eq!(candidate.lemma_base(), ":");
    }

    #[test]
    fn test_geographic_flag() {
        let candidate = MorphCandidate::new(
            "Kraków",
            "subst:sg:gen:m3",
            vec![GEOGRAPHIC_NAME.to_string()],
        );
        assert!(candidate.is_geographic_name());
        assert!(!MorphCandidate::new("dom", "subst:sg:nom:m3", Vec::new()).is_geographic_name());
    }

    #[test]
    fn test_closure_factory() {
        let factory = || Ok::<_, AnalyzerError>(Dictionary::new());
        let analyzer = factory.create().unwrap();
        assert!(analyzer.analyse("cokolwiek").unwrap().is_empty());
    }
}
