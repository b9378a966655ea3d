//! Basic counts and averages.

use crate::math::{ratio, round2};
use crate::readability;

use super::reports::TextStatistics;

/// Compute word, sentence, paragraph, and character statistics.
///
/// Averages fall back to 0 when their denominator is 0.
#[tracing::instrument(skip_all)]
pub fn text_statistics(
    text: &str,
    words: &[String],
    sentences: &[String],
    paragraphs: &[String],
) -> TextStatistics {
    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let syllables = readability::total_syllables(words);

    TextStatistics {
        word_count: words.len(),
        sentence_count: sentences.len(),
        paragraph_count: paragraphs.len(),
        char_count: text.chars().count(),
        avg_word_length: round2(ratio(total_chars, words.len())),
        avg_sentence_length: round2(ratio(words.len(), sentences.len())),
        avg_syllables_per_word: round2(ratio(syllables, words.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    fn stats(input: &str) -> TextStatistics {
        text_statistics(
            input,
            &text::words(input),
            &text::sentences(input),
            &text::paragraphs(input),
        )
    }

    #[test]
    fn two_short_sentences() {
        let s = stats("The cat sat. The cat ran.");
        assert_eq!(s.word_count, 6);
        assert_eq!(s.sentence_count, 2);
        assert_eq!(s.paragraph_count, 1);
        assert_eq!(s.char_count, 25);
        assert_eq!(s.avg_word_length, 3.0);
        assert_eq!(s.avg_sentence_length, 3.0);
        assert_eq!(s.avg_syllables_per_word, 1.0);
    }

    #[test]
    fn empty_text_is_all_zero() {
        let s = stats("");
        assert_eq!(s.word_count, 0);
        assert_eq!(s.sentence_count, 0);
        assert_eq!(s.paragraph_count, 0);
        assert_eq!(s.avg_word_length, 0.0);
        assert_eq!(s.avg_sentence_length, 0.0);
        assert_eq!(s.avg_syllables_per_word, 0.0);
    }

    #[test]
    fn whitespace_counts_characters_only() {
        let s = stats("   ");
        assert_eq!(s.char_count, 3);
        assert_eq!(s.word_count, 0);
        assert_eq!(s.paragraph_count, 0);
    }

    #[test]
    fn paragraphs_counted() {
        let s = stats("One here.\n\nTwo here.\n\nThree here.");
        assert_eq!(s.paragraph_count, 3);
        assert_eq!(s.sentence_count, 3);
    }
}
