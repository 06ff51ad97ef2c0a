//! In-memory morphological dictionary
//!
//! Loads the tab-separated dump format produced by Polish morphological
//! generators:
//!
//! ```text
//! form<TAB>lemma<TAB>tag[<TAB>names[<TAB>qualifiers]]
//! ```
//!
//! `names` and `qualifiers` are `|`-separated lists; an empty column or `_`
//! means none. Lines starting with `#` and blank lines are skipped.

use super::{Analyzer, AnalyzerFactory, MorphCandidate};
use crate::error::AnalyzerError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Word form → candidate list
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<MorphCandidate>>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate for a word form, after any existing ones
    pub fn insert(&mut self, form: impl Into<String>, candidate: MorphCandidate) {
        self.entries.entry(form.into()).or_default().push(candidate);
    }

    /// Builder-style [`Dictionary::insert`]
    pub fn with_entry(mut self, form: &str, lemma: &str, tag: &str, flags: &[&str]) -> Self {
        let flags = flags.iter().map(|f| f.to_string()).collect();
        self.insert(form, MorphCandidate::new(lemma, tag, flags));
        self
    }

    /// Load a dump file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AnalyzerError::Unavailable(format!("cannot open {}: {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Load dump lines from a reader; `source` is used in error messages
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Self, AnalyzerError> {
        let mut dictionary = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut columns = line.split('\t');
            let (Some(form), Some(lemma), Some(tag)) =
                (columns.next(), columns.next(), columns.next())
            else {
                return Err(AnalyzerError::Dictionary {
                    path: source.to_path_buf(),
                    line: index + 1,
                    reason: "expected at least 3 tab-separated columns".to_string(),
                });
            };
            if form.is_empty() || tag.is_empty() {
                return Err(AnalyzerError::Dictionary {
                    path: source.to_path_buf(),
                    line: index + 1,
                    reason: "empty form or tag".to_string(),
                });
            }

            let flags = columns.flat_map(split_list).collect();
            dictionary.insert(form, MorphCandidate::new(lemma, tag, flags));
        }

        log::debug!(
            "loaded {} word forms from {}",
            dictionary.len(),
            source.display()
        );
        Ok(dictionary)
    }

    /// Number of distinct word forms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn split_list(column: &str) -> impl Iterator<Item = String> + '_ {
    column
        .split('|')
        .map(str::trim)
        .filter(|item| !item.is_empty() && *item != "_")
        .map(str::to_string)
}

impl Analyzer for Dictionary {
    /// Exact form first, then the lower-cased form for sentence-initial
    /// capitals.
    fn analyse(&self, word: &str) -> Result<Vec<MorphCandidate>, AnalyzerError> {
        if let Some(candidates) = self.entries.get(word) {
            return Ok(candidates.clone());
        }
        let lower = word.to_lowercase();
        if lower != word {
            if let Some(candidates) = self.entries.get(&lower) {
                return Ok(candidates.clone());
            }
        }
        Ok(Vec::new())
    }
}

/// Loads a fresh [`Dictionary`] from a dump file for every worker
#[derive(Debug, Clone)]
pub struct DictionaryFactory {
    path: PathBuf,
}

impl DictionaryFactory {
    /// Create a factory for the given dump file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Dump file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnalyzerFactory for DictionaryFactory {
    type Analyzer = Dictionary;

    fn create(&self) -> Result<Dictionary, AnalyzerError> {
        Dictionary::from_path(&self.path)
    }
}
