//! Document structure: outline, paragraph balance, and framing.

use std::sync::LazyLock;

use regex::Regex;

use crate::markdown;
use crate::math::{mean, percent, ratio, round1, round2};
use crate::text;
use crate::word_lists::{CONCLUSION_PHRASES, INTRODUCTION_PHRASES};

use super::reports::StructureProfile;

static INTRODUCTION: LazyLock<Regex> =
    LazyLock::new(|| text::whole_word_pattern(INTRODUCTION_PHRASES));

static CONCLUSION: LazyLock<Regex> =
    LazyLock::new(|| text::whole_word_pattern(CONCLUSION_PHRASES));

/// Allowed deviation from the mean paragraph length for a paragraph to count
/// as consistent.
const CONSISTENCY_TOLERANCE: f64 = 0.2;

/// Analyze outline, paragraph lengths, and intro/conclusion markers.
#[tracing::instrument(skip_all, fields(paragraphs = paragraphs.len()))]
pub fn structure_profile(text: &str, paragraphs: &[String]) -> StructureProfile {
    let outline = markdown::outline(text);

    let paragraph_word_counts: Vec<usize> =
        paragraphs.iter().map(|p| text::words(p).len()).collect();
    let paragraph_sentence_lengths = paragraphs
        .iter()
        .zip(&paragraph_word_counts)
        .map(|(p, &words)| round2(ratio(words, text::sentences(p).len())))
        .collect();

    StructureProfile {
        section_count: outline.headings,
        list_count: outline.list_items,
        paragraph_consistency: paragraph_consistency(&paragraph_word_counts),
        paragraph_word_counts,
        paragraph_sentence_lengths,
        has_introduction: has_introduction(text),
        has_conclusion: has_conclusion(text),
    }
}

/// Percentage of paragraphs within 20% of the mean paragraph length.
pub fn paragraph_consistency(word_counts: &[usize]) -> f64 {
    let lengths: Vec<f64> = word_counts.iter().map(|&c| c as f64).collect();
    let avg = mean(&lengths);
    let consistent = lengths
        .iter()
        .filter(|&&len| (len - avg).abs() <= avg * CONSISTENCY_TOLERANCE)
        .count();
    round1(percent(consistent, lengths.len()))
}

/// Whether the text contains an introduction phrase.
pub fn has_introduction(text: &str) -> bool {
    INTRODUCTION.is_match(text)
}

/// Whether the text contains a conclusion phrase.
pub fn has_conclusion(text: &str) -> bool {
    CONCLUSION.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(input: &str) -> StructureProfile {
        structure_profile(input, &text::paragraphs(input))
    }

    #[test]
    fn plain_text_has_no_framing() {
        let p = profile("The cat sat. The cat ran.");
        assert_eq!(p.section_count, 0);
        assert_eq!(p.list_count, 0);
        assert_eq!(p.paragraph_word_counts, vec![6]);
        assert_eq!(p.paragraph_sentence_lengths, vec![3.0]);
        assert_eq!(p.paragraph_consistency, 100.0);
        assert!(!p.has_introduction);
        assert!(!p.has_conclusion);
    }

    #[test]
    fn conclusion_phrase_detected() {
        let p = profile("Many things happened. In conclusion, it went well.");
        assert!(p.has_conclusion);
    }

    #[test]
    fn introduction_phrase_detected_case_insensitively() {
        assert!(has_introduction("TO BEGIN WITH, consider the facts."));
        assert!(!has_introduction("Introductions are overrated."));
    }

    #[test]
    fn markdown_outline_counted() {
        let p = profile("# Title\n\nBody text here.\n\n- one\n- two");
        assert_eq!(p.section_count, 1);
        assert_eq!(p.list_count, 2);
    }

    #[test]
    fn consistency_measures_balance() {
        // Mean is 10; only 9 and 11 are within 2 words of it.
        assert_eq!(paragraph_consistency(&[9, 11, 2, 18]), 50.0);
        assert_eq!(paragraph_consistency(&[5, 5, 5]), 100.0);
        assert_eq!(paragraph_consistency(&[]), 0.0);
    }
}
