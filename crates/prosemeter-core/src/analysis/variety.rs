//! Sentence variety: length spread, grammatical type mix, opening words, and
//! rhythm.
//!
//! Types are detected from conjunction patterns alone. A sentence with both
//! a coordinator and a subordinator is compound-complex whichever comes
//! first; a sentence with neither but with internal `,;:` punctuation matches
//! no type and is left out of the type counts.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::math::{mean, percent, round1, std_dev};
use crate::text;

use super::reports::{
    OpeningKind, OpeningKindCount, SentenceType, SentenceTypeCounts, SentenceVariety,
};

static COORDINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:and|but|or|nor|yet|so|for)\b").expect("valid regex")
});

static SUBORDINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:because|although|though|since|unless|while|whereas|if|when|whenever|after|before|until|which|who)\b",
    )
    .expect("valid regex")
});

static INTERNAL_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;:]").expect("valid regex"));

/// First-word patterns, checked in order; first match wins.
static OPENING_PATTERNS: LazyLock<Vec<(OpeningKind, Regex)>> = LazyLock::new(|| {
    [
        (
            OpeningKind::Subject,
            r"^(?:i|you|he|she|it|we|they|the|a|an|this|that|these|those|my|our|your|their|his|her|its|there)$",
        ),
        (OpeningKind::Verb, r"^(?:\w+ing|consider|imagine|note|remember|use|take|make|let)$"),
        (
            OpeningKind::Preposition,
            r"^(?:in|on|at|by|with|from|to|for|of|about|after|before|during|under|over|through|between|among|without|within|despite)$",
        ),
        (
            OpeningKind::Conjunction,
            r"^(?:and|but|or|nor|so|yet|because|although|though|while|since|unless|if|when)$",
        ),
        (
            OpeningKind::Adverb,
            r"^(?:\w+ly|however|therefore|moreover|furthermore|thus|hence|meanwhile|nevertheless|also|then)$",
        ),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("valid regex")))
    .collect()
});

/// Ideal type mix, in percent.
const IDEAL_SIMPLE: f64 = 30.0;
const IDEAL_COMPOUND: f64 = 30.0;
const IDEAL_COMPLEX: f64 = 30.0;
const IDEAL_COMPOUND_COMPLEX: f64 = 10.0;

/// Classify a sentence by its conjunctions.
///
/// Returns `None` for a sentence with no conjunctions but with internal
/// punctuation.
pub fn classify_sentence(sentence: &str) -> Option<SentenceType> {
    let coordinated = COORDINATOR.is_match(sentence);
    let subordinated = SUBORDINATOR.is_match(sentence);

    match (coordinated, subordinated) {
        (true, true) => Some(SentenceType::CompoundComplex),
        (false, true) => Some(SentenceType::Complex),
        (true, false) => Some(SentenceType::Compound),
        (false, false) if !INTERNAL_PUNCTUATION.is_match(sentence) => Some(SentenceType::Simple),
        (false, false) => None,
    }
}

/// Count sentences per type.
pub fn count_types(sentences: &[String]) -> SentenceTypeCounts {
    let mut counts = SentenceTypeCounts::default();
    for sentence in sentences {
        match classify_sentence(sentence) {
            Some(SentenceType::Simple) => counts.simple += 1,
            Some(SentenceType::Compound) => counts.compound += 1,
            Some(SentenceType::Complex) => counts.complex += 1,
            Some(SentenceType::CompoundComplex) => counts.compound_complex += 1,
            None => counts.unclassified += 1,
        }
    }
    counts
}

/// Classify the first word of a sentence.
pub fn opening_kind(first_word: &str) -> OpeningKind {
    OPENING_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(first_word))
        .map_or(OpeningKind::Other, |(kind, _)| *kind)
}

/// Score sentence variety.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn sentence_variety(sentences: &[String]) -> SentenceVariety {
    let lengths: Vec<usize> = sentences.iter().map(|s| text::words(s).len()).collect();
    let as_f64: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
    let total = sentences.len();

    let mean_length = mean(&as_f64);
    let std_deviation = std_dev(&as_f64);
    let length_score = if mean_length > 0.0 {
        (std_deviation / mean_length * 100.0).min(100.0)
    } else {
        0.0
    };

    let types = count_types(sentences);
    let distance = (IDEAL_SIMPLE - percent(types.simple, total)).abs()
        + (IDEAL_COMPOUND - percent(types.compound, total)).abs()
        + (IDEAL_COMPLEX - percent(types.complex, total)).abs()
        + (IDEAL_COMPOUND_COMPLEX - percent(types.compound_complex, total)).abs();
    let structure_score = (100.0 - distance).max(0.0);

    let first_words: Vec<String> = sentences.iter().filter_map(|s| text::first_word(s)).collect();
    let unique_openers = first_words.iter().collect::<BTreeSet<_>>().len();
    let opening_score = percent(unique_openers, total);

    let mut kind_counts: BTreeMap<OpeningKind, usize> = BTreeMap::new();
    for word in &first_words {
        *kind_counts.entry(opening_kind(word)).or_insert(0) += 1;
    }
    let opening_kinds = kind_counts
        .into_iter()
        .map(|(kind, count)| OpeningKindCount { kind, count })
        .collect();

    let rhythm_total: f64 = lengths
        .windows(2)
        .map(|pair| (pair[1].abs_diff(pair[0]) as f64 * 5.0).min(20.0))
        .sum();
    let rhythm_score = if total == 0 {
        0.0
    } else {
        (rhythm_total / total as f64).min(100.0)
    };

    let composite = 0.3 * length_score + 0.3 * structure_score + 0.2 * opening_score + 0.2 * rhythm_score;

    SentenceVariety {
        lengths,
        mean_length: round1(mean_length),
        std_deviation: round1(std_deviation),
        length_score: round1(length_score),
        types,
        structure_score: round1(structure_score),
        opening_score: round1(opening_score),
        opening_kinds,
        rhythm_score: round1(rhythm_score),
        variety_score: composite.round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn and_with_because_is_compound_complex() {
        assert_eq!(
            classify_sentence("I stayed in and read because it rained"),
            Some(SentenceType::CompoundComplex)
        );
        assert_eq!(
            classify_sentence("Because it rained, I stayed in and read"),
            Some(SentenceType::CompoundComplex)
        );
    }

    #[test]
    fn type_priority() {
        assert_eq!(
            classify_sentence("We stayed home because it rained"),
            Some(SentenceType::Complex)
        );
        assert_eq!(
            classify_sentence("We ran and they walked"),
            Some(SentenceType::Compound)
        );
        assert_eq!(classify_sentence("We ran"), Some(SentenceType::Simple));
        assert_eq!(classify_sentence("We ran, quickly"), None);
    }

    #[test]
    fn conjunctions_match_whole_words_only() {
        assert_eq!(classify_sentence("Sandy forgot the ordeal"), Some(SentenceType::Simple));
    }

    #[test]
    fn counts_include_unclassified() {
        let counts = count_types(&owned(&["We ran", "We ran, quickly", "A and B"]));
        assert_eq!(counts.simple, 1);
        assert_eq!(counts.compound, 1);
        assert_eq!(counts.unclassified, 1);
    }

    #[test]
    fn uniform_lengths_have_no_spread_or_rhythm() {
        let v = sentence_variety(&owned(&["The cat sat", "The dog ran", "The cow ate"]));
        assert_eq!(v.lengths, vec![3, 3, 3]);
        assert_eq!(v.length_score, 0.0);
        assert_eq!(v.rhythm_score, 0.0);
        assert_eq!(v.opening_score, 33.3);
        // All simple: |30-100| + 30 + 30 + 10 = 140 -> floored at 0.
        assert_eq!(v.structure_score, 0.0);
        assert_eq!(v.variety_score, 7);
    }

    #[test]
    fn rhythm_caps_each_step() {
        let v = sentence_variety(&owned(&[
            "Go",
            "This sentence is a good deal longer than the first",
        ]));
        // One step of 9 words: min(45, 20) = 20, over 2 sentences.
        assert_eq!(v.rhythm_score, 10.0);
    }

    #[test]
    fn opening_kinds_first_match_wins() {
        assert_eq!(opening_kind("the"), OpeningKind::Subject);
        assert_eq!(opening_kind("running"), OpeningKind::Verb);
        assert_eq!(opening_kind("after"), OpeningKind::Preposition);
        assert_eq!(opening_kind("because"), OpeningKind::Conjunction);
        assert_eq!(opening_kind("quickly"), OpeningKind::Adverb);
        assert_eq!(opening_kind("elephants"), OpeningKind::Other);
    }

    #[test]
    fn empty_input() {
        let v = sentence_variety(&[]);
        assert!(v.lengths.is_empty());
        assert_eq!(v.length_score, 0.0);
        assert_eq!(v.opening_score, 0.0);
        assert_eq!(v.rhythm_score, 0.0);
        assert_eq!(v.structure_score, 0.0);
        assert_eq!(v.variety_score, 0);
    }
}
