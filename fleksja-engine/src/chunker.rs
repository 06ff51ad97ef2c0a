//! Line pairing
//!
//! The unit of work is one line of the original text together with the line
//! at the same index of the anonymized text. Line terminators stay attached
//! to their line so that joining processed lines restores the layout.

/// One original line and its anonymized counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePair<'a> {
    /// Zero-based line index
    pub index: usize,
    /// Original line, terminator included
    pub original: &'a str,
    /// Anonymized line, terminator included
    pub anonymized: &'a str,
}

/// Paired lines plus what was left over on the longer side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkPlan<'a> {
    pairs: Vec<LinePair<'a>>,
    dropped_original: usize,
    dropped_anonymized: usize,
}

impl<'a> ChunkPlan<'a> {
    /// Paired lines in order
    pub fn pairs(&self) -> &[LinePair<'a>] {
        &self.pairs
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there is nothing to process
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Original lines without an anonymized counterpart
    pub fn dropped_original(&self) -> usize {
        self.dropped_original
    }

    /// Anonymized lines without an original counterpart
    pub fn dropped_anonymized(&self) -> usize {
        self.dropped_anonymized
    }
}

/// Splits both texts into lines and pairs them by index
#[derive(Debug, Clone, Copy, Default)]
pub struct LineChunker;

impl LineChunker {
    /// Create a chunker
    pub fn new() -> Self {
        Self
    }

    /// Pair lines, truncating to the shorter text
    pub fn pair<'a>(&self, original: &'a str, anonymized: &'a str) -> ChunkPlan<'a> {
        let original_lines: Vec<&str> = split_lines(original).collect();
        let anonymized_lines: Vec<&str> = split_lines(anonymized).collect();
        let paired = original_lines.len().min(anonymized_lines.len());

        let plan = ChunkPlan {
            pairs: original_lines
                .iter()
                .copied()
                .zip(anonymized_lines.iter().copied())
                .enumerate()
                .map(|(index, (original, anonymized))| LinePair {
                    index,
                    original,
                    anonymized,
                })
                .collect(),
            dropped_original: original_lines.len() - paired,
            dropped_anonymized: anonymized_lines.len() - paired,
        };

        if plan.dropped_original > 0 || plan.dropped_anonymized > 0 {
            log::warn!(
                "line counts differ ({} original, {} anonymized); only the first {paired} lines are processed",
                original_lines.len(),
                anonymized_lines.len(),
            );
        }
        plan
    }
}

/// Lines with their `\n` or `\r\n` terminator
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminators_stay_with_lines() {
        let plan = LineChunker::new().pair("a\r\nb\nc", "x\r\ny\nz");
        let originals: Vec<&str> = plan.pairs().iter().map(|p| p.original).collect();
        let anonymized: Vec<&str> = plan.pairs().iter().map(|p| p.anonymized).collect();
        assert_eq!(originals, ["a\r\n", "b\n", "c"]);
        assert_eq!(anonymized, ["x\r\n", "y\n", "z"]);
        assert_eq!(plan.pairs()[2].index, 2);
    }

    #[test]
    fn test_truncates_to_shorter_side() {
        let plan = LineChunker::new().pair("one\ntwo\nthree\n", "one\n");
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.dropped_original(), 2);
        assert_eq!(plan.dropped_anonymized(), 0);

        let plan = LineChunker::new().pair("one\n", "one\ntwo\n");
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.dropped_original(), 0);
        assert_eq!(plan.dropped_anonymized(), 1);
    }

    #[test]
    fn test_empty_input() {
        let plan = LineChunker::new().pair("", "");
        assert!(plan.is_empty());

        let plan = LineChunker::new().pair("", "a\nb\n");
        assert!(plan.is_empty());
        assert_eq!(plan.dropped_anonymized(), 2);
    }

    #[test]
    fn test_blank_lines_are_pairs() {
        let plan = LineChunker::new().pair("\n\n", "\n\n");
        assert_eq!(plan.len(), 2);
        assert!(plan.pairs().iter().all(|p| p.original == "\n"));
    }
}
