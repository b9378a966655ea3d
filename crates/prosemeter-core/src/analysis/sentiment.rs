//! Lexicon-based sentiment with intensifiers and negation.
//!
//! Each sentence is scanned left to right. A negation arms a sign flip and an
//! intensifier arms a multiplier; both stay armed across unrelated words and
//! are spent by the next sentiment-bearing word.

use crate::math::{clamp_score, round1, round2};
use crate::text;
use crate::word_lists::{INTENSIFIERS, NEGATIONS, SENTIMENT_LEXICON};

use super::reports::{
    ParagraphSentiment, SentenceSentiment, SentimentLabel, SentimentMetrics, SentimentResult,
};

/// Score of one sentence and how many sentiment-bearing words it held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceScore {
    /// Signed sum of word scores.
    pub score: f64,
    /// Sentiment-bearing words.
    pub weighted_words: usize,
}

/// Score one sentence.
pub fn score_sentence(sentence: &str) -> SentenceScore {
    let mut score = 0.0;
    let mut weighted_words = 0;
    let mut negated = false;
    let mut multiplier = 1.0;

    for word in text::words(sentence) {
        let word = word.as_str();
        if NEGATIONS.contains(word) {
            negated = true;
        } else if let Some(&m) = INTENSIFIERS.get(word) {
            multiplier = m;
        } else if let Some(&value) = SENTIMENT_LEXICON.get(word) {
            let mut word_score = value * multiplier;
            if negated {
                word_score = -word_score;
                negated = false;
            }
            score += word_score;
            multiplier = 1.0;
            weighted_words += 1;
        }
    }

    SentenceScore {
        score,
        weighted_words,
    }
}

/// Analyze document sentiment.
///
/// The mean word score in `[-2, 2]` maps linearly onto 0–100, so a text with
/// no sentiment words lands at 50.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn analyze_sentiment(sentences: &[String]) -> SentimentResult {
    let mut total_score = 0.0;
    let mut weighted_word_count = 0;
    let mut details = Vec::new();

    for sentence in sentences {
        let s = score_sentence(sentence);
        total_score += s.score;
        weighted_word_count += s.weighted_words;
        if s.score != 0.0 {
            details.push(SentenceSentiment {
                text: sentence.clone(),
                score: round2(s.score),
            });
        }
    }

    let average_score = if weighted_word_count == 0 {
        0.0
    } else {
        total_score / weighted_word_count as f64
    };
    let normalized_score = round1(clamp_score((average_score + 2.0) * 25.0));

    SentimentResult {
        label: SentimentLabel::from_score(normalized_score),
        normalized_score,
        sentences: details,
        raw: SentimentMetrics {
            total_score: round2(total_score),
            weighted_word_count,
            average_score: round2(average_score),
        },
    }
}

/// Count positive and negative lexicon words in a paragraph, each × 10.
pub fn paragraph_polarity(words: &[String]) -> ParagraphSentiment {
    let (positive, negative) = words
        .iter()
        .filter_map(|w| SENTIMENT_LEXICON.get(w.as_str()))
        .fold((0, 0), |(pos, neg), &value| {
            if value > 0.0 {
                (pos + 1, neg)
            } else {
                (pos, neg + 1)
            }
        });

    ParagraphSentiment {
        positive: positive * 10,
        negative: negative * 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(input: &str) -> SentimentResult {
        analyze_sentiment(&text::sentences(input))
    }

    #[test]
    fn negation_flips_sign() {
        assert_eq!(score_sentence("not good").score, -2.0);
    }

    #[test]
    fn intensifier_applies_before_negation() {
        assert_eq!(score_sentence("not very good").score, -3.0);
    }

    #[test]
    fn negation_survives_unrelated_words() {
        assert_eq!(score_sentence("It was not a good day").score, -2.0);
    }

    #[test]
    fn negation_is_spent_by_one_word() {
        let s = score_sentence("not good but great");
        assert_eq!(s.score, 1.0);
        assert_eq!(s.weighted_words, 2);
    }

    #[test]
    fn contraction_negates() {
        assert_eq!(score_sentence("It isn't bad").score, 2.0);
    }

    #[test]
    fn positive_document() {
        let r = analyze("This is good. The food was excellent.");
        assert_eq!(r.raw.weighted_word_count, 2);
        assert_eq!(r.raw.average_score, 2.5);
        assert_eq!(r.normalized_score, 100.0);
        assert_eq!(r.label, SentimentLabel::VeryPositive);
        assert_eq!(r.sentences.len(), 2);
    }

    #[test]
    fn neutral_document_keeps_no_details() {
        let r = analyze("The cat sat. The cat ran.");
        assert_eq!(r.normalized_score, 50.0);
        assert_eq!(r.label, SentimentLabel::Neutral);
        assert!(r.sentences.is_empty());
    }

    #[test]
    fn label_thresholds() {
        assert_eq!(SentimentLabel::from_score(75.0), SentimentLabel::VeryPositive);
        assert_eq!(SentimentLabel::from_score(60.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(40.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(25.0), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(24.9), SentimentLabel::VeryNegative);
    }

    #[test]
    fn mixed_document() {
        // good (2) + bad (-2) + fine (1) = 1 over 3 words.
        let r = analyze("Good start. Bad middle. Fine end.");
        assert_eq!(r.raw.total_score, 1.0);
        assert_eq!(r.normalized_score, 58.3);
        assert_eq!(r.label, SentimentLabel::Neutral);
    }

    #[test]
    fn paragraph_polarity_counts() {
        let p = paragraph_polarity(&text::words("good great bad neutral"));
        assert_eq!(p.positive, 20);
        assert_eq!(p.negative, 10);
    }

    #[test]
    fn empty_is_neutral() {
        let r = analyze_sentiment(&[]);
        assert_eq!(r.normalized_score, 50.0);
        assert_eq!(r.raw.weighted_word_count, 0);
    }
}
