//! Five-axis complexity profile.

use crate::math::{clamp_score, percent, ratio, round1, round2};
use crate::readability::{self, ReadabilityResult};
use crate::word_lists::TECHNICAL_TERMS;

use super::reports::{ComplexityProfile, SentenceTypeCounts, TextStatistics};

/// Words per sentence at which the sentence-length axis saturates.
const SATURATING_SENTENCE_LENGTH: f64 = 30.0;

/// Technical-term density multiplier; 20% technical vocabulary saturates.
const TECHNICAL_WEIGHT: f64 = 500.0;

/// Build the complexity profile from already-computed statistics,
/// readability, and sentence types.
///
/// Each axis is clamped to `[0, 100]` on its own.
#[tracing::instrument(skip_all)]
pub fn complexity_profile(
    words: &[String],
    stats: &TextStatistics,
    readability: &ReadabilityResult,
    types: &SentenceTypeCounts,
) -> ComplexityProfile {
    let complex_words = words
        .iter()
        .filter(|w| readability::count_syllables(w) > 2)
        .count();
    let technical_hits = words
        .iter()
        .filter(|w| TECHNICAL_TERMS.contains(w.as_str()))
        .count();

    let vocabulary = (stats.avg_word_length - 3.0) / 4.0 * 100.0;
    let sentence_length = stats.avg_sentence_length / SATURATING_SENTENCE_LENGTH * 100.0;
    let structure = percent(types.complex + types.compound_complex, stats.sentence_count);
    let technical = ratio(technical_hits, words.len()) * TECHNICAL_WEIGHT;

    ComplexityProfile {
        vocabulary: round1(clamp_score(vocabulary)),
        sentence_length: round1(clamp_score(sentence_length)),
        structure: round1(clamp_score(structure)),
        readability: round1(clamp_score(100.0 - readability.score)),
        technical: round1(clamp_score(technical)),
        complex_words,
        average_word_length: round2(stats.avg_word_length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{statistics, variety};
    use crate::text;

    fn profile(input: &str) -> ComplexityProfile {
        let words = text::words(input);
        let sentences = text::sentences(input);
        let paragraphs = text::paragraphs(input);
        let stats = statistics::text_statistics(input, &words, &sentences, &paragraphs);
        let readability = readability::check_readability(input);
        let types = variety::count_types(&sentences);
        complexity_profile(&words, &stats, &readability, &types)
    }

    #[test]
    fn simple_text_is_low_complexity() {
        let p = profile("The cat sat. The cat ran.");
        assert_eq!(p.vocabulary, 0.0);
        assert_eq!(p.sentence_length, 10.0);
        assert_eq!(p.structure, 0.0);
        assert_eq!(p.readability, 0.0);
        assert_eq!(p.technical, 0.0);
        assert_eq!(p.complex_words, 0);
    }

    #[test]
    fn technical_terms_raise_technical_axis() {
        let p = profile("The server cache stores each query.");
        // 3 technical words out of 6: 50% * 5, saturated.
        assert_eq!(p.technical, 100.0);
    }

    #[test]
    fn subordinate_clauses_raise_structure() {
        let p = profile("We left because it rained. We stayed.");
        assert_eq!(p.structure, 50.0);
    }

    #[test]
    fn axes_stay_in_range() {
        let p = profile(
            "Notwithstanding interdepartmental incompatibilities, institutionalization \
             necessitates comprehensive reconceptualization.",
        );
        for axis in [p.vocabulary, p.sentence_length, p.structure, p.readability, p.technical] {
            assert!((0.0..=100.0).contains(&axis));
        }
        assert_eq!(p.vocabulary, 100.0);
        assert!(p.complex_words >= 5);
    }

    #[test]
    fn empty_is_zero() {
        let p = profile("");
        assert_eq!(p.vocabulary, 0.0);
        assert_eq!(p.sentence_length, 0.0);
        assert_eq!(p.readability, 0.0);
        assert_eq!(p.complex_words, 0);
    }
}
