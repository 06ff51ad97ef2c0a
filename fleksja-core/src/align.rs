//! Token-level edit-distance alignment
//!
//! Computes a minimal Levenshtein alignment that turns the anonymized token
//! sequence into the original one and reports it as runs of operations over
//! half-open index ranges, in the style of `difflib` opcodes.
//!
//! Ties are broken while tracing back from the end of both sequences: a match
//! is taken first, then deletion, then insertion, then substitution. Because
//! gaps are preferred over substitutions when walking backwards, a single
//! placeholder that stands for several original tokens is aligned to the
//! first of them.

use std::ops::Range;

/// Kind of an alignment operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Tokens are identical on both sides
    Equal,
    /// Anonymized tokens stand where different original tokens were
    Replace,
    /// Tokens present only on the anonymized side
    Delete,
    /// Tokens present only on the original side
    Insert,
}

/// A run of one kind of edit over contiguous ranges of both sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentOp {
    /// Operation kind
    pub kind: OpKind,
    /// Range into the anonymized sequence
    pub anon: Range<usize>,
    /// Range into the original sequence
    pub orig: Range<usize>,
}

impl AlignmentOp {
    fn new(kind: OpKind, anon: Range<usize>, orig: Range<usize>) -> Self {
        Self { kind, anon, orig }
    }

    /// Number of edits this operation accounts for
    pub fn cost(&self) -> usize {
        match self.kind {
            OpKind::Equal => 0,
            OpKind::Replace | OpKind::Delete => self.anon.len(),
            OpKind::Insert => self.orig.len(),
        }
    }
}

/// Align `anon` against `orig`
pub fn align<T: PartialEq>(anon: &[T], orig: &[T]) -> Vec<AlignmentOp> {
    let prefix = anon
        .iter()
        .zip(orig.iter())
        .take_while(|(a, o)| a == o)
        .count();
    let suffix = anon[prefix..]
        .iter()
        .rev()
        .zip(orig[prefix..].iter().rev())
        .take_while(|(a, o)| a == o)
        .count();

    let a = &anon[prefix..anon.len() - suffix];
    let o = &orig[prefix..orig.len() - suffix];

    let mut builder = OpBuilder::default();
    builder.push_run(OpKind::Equal, prefix);
    for step in edit_path(a, o) {
        builder.push(step);
    }
    builder.push_run(OpKind::Equal, suffix);
    builder.finish()
}

/// Total number of edits in an alignment
pub fn distance(ops: &[AlignmentOp]) -> usize {
    ops.iter().map(AlignmentOp::cost).sum()
}

/// Full dynamic program over the trimmed middle part, returning the edit
/// steps in forward order.
///
/// Costs are kept in two rolling rows; the backtrace step of every cell is
/// decided while filling the table and stored as one byte. Memory is still
/// `(a + 1) * (o + 1)` bytes for the untrimmed middle of a line pair, so a
/// paragraph of 10 000 tokens on each side needs about 100 MB per worker.
fn edit_path<T: PartialEq>(a: &[T], o: &[T]) -> Vec<OpKind> {
    if a.is_empty() {
        return vec![OpKind::Insert; o.len()];
    }
    if o.is_empty() {
        return vec![OpKind::Delete; a.len()];
    }

    let cols = o.len() + 1;
    let mut prev: Vec<u32> = (0..cols as u32).collect();
    let mut row = vec![0u32; cols];
    // Row 0 can only be reached by insertions.
    let mut trace = vec![OpKind::Insert; (a.len() + 1) * cols];
    for i in 1..=a.len() {
        row[0] = i as u32;
        trace[i * cols] = OpKind::Delete;
        for j in 1..=o.len() {
            let same = a[i - 1] == o[j - 1];
            let substitution = prev[j - 1] + u32::from(!same);
            let deletion = prev[j] + 1;
            let insertion = row[j - 1] + 1;
            let here = substitution.min(deletion).min(insertion);
            row[j] = here;
            trace[i * cols + j] = if same && prev[j - 1] == here {
                OpKind::Equal
            } else if deletion == here {
                OpKind::Delete
            } else if insertion == here {
                OpKind::Insert
            } else {
                OpKind::Replace
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }

    let mut steps = Vec::with_capacity(a.len().max(o.len()));
    let (mut i, mut j) = (a.len(), o.len());
    while i > 0 || j > 0 {
        let step = trace[i * cols + j];
        match step {
            OpKind::Equal | OpKind::Replace => {
                i -= 1;
                j -= 1;
            }
            OpKind::Delete => i -= 1,
            OpKind::Insert => j -= 1,
        }
        steps.push(step);
    }
    steps.reverse();
    steps
}

/// Merges single steps into ranged operations
#[derive(Default)]
struct OpBuilder {
    ops: Vec<AlignmentOp>,
    anon_pos: usize,
    orig_pos: usize,
}

impl OpBuilder {
    fn push(&mut self, kind: OpKind) {
        let (da, d_o) = match kind {
            OpKind::Equal | OpKind::Replace => (1, 1),
            OpKind::Delete => (1, 0),
            OpKind::Insert => (0, 1),
        };
        self.advance(kind, da, d_o);
    }

    fn push_run(&mut self, kind: OpKind, len: usize) {
        if len > 0 {
            self.advance(kind, len, len);
        }
    }

    fn advance(&mut self, kind: OpKind, da: usize, d_o: usize) {
        let anon_end = self.anon_pos + da;
        let orig_end = self.orig_pos + d_o;
        match self.ops.last_mut() {
            Some(last) if last.kind == kind => {
                last.anon.end = anon_end;
                last.orig.end = orig_end;
            }
            _ => self.ops.push(AlignmentOp::new(
                kind,
                self.anon_pos..anon_end,
                self.orig_pos..orig_end,
            )),
        }
        self.anon_pos = anon_end;
        self.orig_pos = orig_end;
    }

    fn finish(self) -> Vec<AlignmentOp> {
        self.ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identical_sequences() {
        let ops = align(&chars("abc"), &chars("abc"));
        assert_eq!(ops, vec![AlignmentOp::new(OpKind::Equal, 0..3, 0..3)]);
        assert_eq!(distance(&ops), 0);
    }

    #[test]
    fn test_empty_sequences() {
        assert!(align::<char>(&[], &[]).is_empty());
        assert_eq!(
            align(&chars(""), &chars("ab")),
            vec![AlignmentOp::new(OpKind::Insert, 0..0, 0..2)]
        );
        assert_eq!(
            align(&chars("ab"), &chars("")),
            vec![AlignmentOp::new(OpKind::Delete, 0..2, 0..0)]
        );
    }

    #[test]
    fn test_single_replacement() {
        let ops = align(&chars("axc"), &chars("abc"));
        assert_eq!(
            ops,
            vec![
                AlignmentOp::new(OpKind::Equal, 0..1, 0..1),
                AlignmentOp::new(OpKind::Replace, 1..2, 1..2),
                AlignmentOp::new(OpKind::Equal, 2..3, 2..3),
            ]
        );
    }

    #[test]
    fn test_placeholder_aligns_to_first_token_of_span() {
        let anon = tokenize("Jechał do [city].");
        let orig = tokenize("Jechał do Nowego Sącza.");
        let anon_text: Vec<&str> = anon.iter().map(|t| t.text).collect();
        let orig_text: Vec<&str> = orig.iter().map(|t| t.text).collect();

        let ops = align(&anon_text, &orig_text);
        assert_eq!(
            ops,
            vec![
                AlignmentOp::new(OpKind::Equal, 0..4, 0..4),
                AlignmentOp::new(OpKind::Replace, 4..5, 4..5),
                AlignmentOp::new(OpKind::Insert, 5..5, 5..7),
                AlignmentOp::new(OpKind::Equal, 5..6, 7..8),
            ]
        );
        assert_eq!(orig_text[4], "Nowego");
    }

    #[test]
    fn test_two_placeholders_keep_their_positions() {
        let anon = ["[name]", " ", "[surname]", " ", "przyszedł"];
        let orig = ["Jan", " ", "Kowalski", " ", "przyszedł"];
        let ops = align(&anon, &orig);
        assert_eq!(
            ops,
            vec![
                AlignmentOp::new(OpKind::Replace, 0..1, 0..1),
                AlignmentOp::new(OpKind::Equal, 1..2, 1..2),
                AlignmentOp::new(OpKind::Replace, 2..3, 2..3),
                AlignmentOp::new(OpKind::Equal, 3..5, 3..5),
            ]
        );
    }

    #[test]
    fn test_ranges_cover_both_sequences() {
        let anon = chars("kitten sat");
        let orig = chars("sitting on a mat");
        let ops = align(&anon, &orig);

        let mut anon_pos = 0;
        let mut orig_pos = 0;
        for op in &ops {
            assert_eq!(op.anon.start, anon_pos);
            assert_eq!(op.orig.start, orig_pos);
            if op.kind == OpKind::Replace || op.kind == OpKind::Equal {
                assert_eq!(op.anon.len(), op.orig.len());
            }
            anon_pos = op.anon.end;
            orig_pos = op.orig.end;
        }
        assert_eq!(anon_pos, anon.len());
        assert_eq!(orig_pos, orig.len());
    }

    #[test]
    fn test_long_line_with_distant_placeholders() {
        let words: Vec<String> = (0..3000).map(|i| format!("w{i}")).collect();
        let mut orig = words.clone();
        let mut anon = words;
        orig[10] = "Kraków".to_string();
        anon[10] = "[city]".to_string();
        orig[2990] = "Annę".to_string();
        anon[2990] = "[name]".to_string();

        let ops = align(&anon, &orig);
        assert_eq!(distance(&ops), 2);
        assert_eq!(ops[1], AlignmentOp::new(OpKind::Replace, 10..11, 10..11));
        assert_eq!(ops[3], AlignmentOp::new(OpKind::Replace, 2990..2991, 2990..2991));
    }

    #[test]
    fn test_distance_is_minimal() {
        assert_eq!(distance(&align(&chars("kitten"), &chars("sitting"))), 3);
        assert_eq!(distance(&align(&chars("flaw"), &chars("lawn"))), 2);
    }
}
