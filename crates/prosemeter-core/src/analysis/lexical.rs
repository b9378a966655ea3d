//! Lexical density: content words against function words.

use crate::math::{percent, round2};
use crate::word_lists::FUNCTION_WORDS;

use super::reports::LexicalDensity;

/// Classify each token as a content or function word.
///
/// Classification is set membership against [`FUNCTION_WORDS`], not
/// part-of-speech tagging.
#[tracing::instrument(skip_all)]
pub fn lexical_density(words: &[String]) -> LexicalDensity {
    let function_word_count = words
        .iter()
        .filter(|w| FUNCTION_WORDS.contains(w.as_str()))
        .count();
    let content_words = words.len() - function_word_count;

    LexicalDensity {
        content_words,
        function_word_count,
        total: words.len(),
        density: round2(percent(content_words, words.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    #[test]
    fn mixed_sentence() {
        let ld = lexical_density(&text::words("The cat sat"));
        assert_eq!(ld.content_words, 2);
        assert_eq!(ld.function_word_count, 1);
        assert_eq!(ld.total, 3);
        assert_eq!(ld.density, 66.67);
    }

    #[test]
    fn all_function_words() {
        let ld = lexical_density(&text::words("it is of the"));
        assert_eq!(ld.content_words, 0);
        assert_eq!(ld.density, 0.0);
    }

    #[test]
    fn empty_is_zero() {
        let ld = lexical_density(&[]);
        assert_eq!(ld.total, 0);
        assert_eq!(ld.density, 0.0);
    }
}
