//! Label policies
//!
//! Each policy walks the candidate list in dictionary order and stops at the
//! first reading it accepts. A reading without a resolvable case is never
//! accepted.

use crate::morph::{Analyzer, Case, Gender, MorphCache, MorphCandidate, MorphTag, TagMatching};

/// Case carried by a tag, if any
pub fn extract_case(tag: &MorphTag, matching: TagMatching) -> Option<Case> {
    tag.case(matching)
}

/// Gender carried by a tag, if any
pub fn extract_gender(tag: &MorphTag, matching: TagMatching) -> Option<Gender> {
    tag.gender(matching)
}

/// Remove cleanup characters from a token
pub fn clean_word(token: &str, cleanup: &[char]) -> String {
    token.chars().filter(|c| !cleanup.contains(c)).collect()
}

/// First noun or geographic-name reading with a case, across all words of
/// the run in order
pub(super) fn resolve_city<A: Analyzer>(
    words: &[String],
    cache: &mut MorphCache<A>,
    matching: TagMatching,
) -> Option<Case> {
    for word in words {
        let found = cache.analyse(word).iter().find_map(|candidate| {
            let accepted = candidate.tag.is_noun(matching) || candidate.is_geographic_name();
            accepted
                .then(|| extract_case(&candidate.tag, matching))
                .flatten()
        });
        if found.is_some() {
            return found;
        }
    }
    None
}

/// First noun reading with a case
pub(super) fn resolve_sex<A: Analyzer>(
    word: &str,
    cache: &mut MorphCache<A>,
    matching: TagMatching,
) -> Option<Case> {
    cache.analyse(word).iter().find_map(|candidate| {
        candidate
            .tag
            .is_noun(matching)
            .then(|| extract_case(&candidate.tag, matching))
            .flatten()
    })
}

/// First noun, adjective or flagged reading with a case, together with its
/// gender. The gender may still be missing; the caller decides what to emit.
pub(super) fn resolve_inflected<A: Analyzer>(
    word: &str,
    cache: &mut MorphCache<A>,
    matching: TagMatching,
    feminine_suffix: &str,
) -> Option<(Option<Gender>, Case)> {
    cache.analyse(word).iter().find_map(|candidate| {
        if candidate.lemma.is_empty() {
            return None;
        }
        let accepted = candidate.tag.is_noun(matching)
            || candidate.tag.is_adjective(matching)
            || !candidate.flags.is_empty();
        if !accepted {
            return None;
        }
        let case = extract_case(&candidate.tag, matching)?;
        Some((inflected_gender(candidate, matching, feminine_suffix), case))
    })
}

fn inflected_gender(
    candidate: &MorphCandidate,
    matching: TagMatching,
    feminine_suffix: &str,
) -> Option<Gender> {
    extract_gender(&candidate.tag, matching).or_else(|| {
        // Substring mode reads the raw lemma, homonym suffix included.
        let lemma = match matching {
            TagMatching::Structured => candidate.lemma_base(),
            TagMatching::Substring => candidate.lemma.as_str(),
        };
        (!feminine_suffix.is_empty() && lemma.ends_with(feminine_suffix))
            .then_some(Gender::Feminine)
    })
}
