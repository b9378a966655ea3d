//! Style profile: passive voice, repetition, long sentences, wordy phrases,
//! and register.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};
use regex::Regex;

use crate::text;
use crate::word_lists::{
    CASUAL_MARKERS, COMPLEX_PHRASES, FORMAL_MARKERS, FUNCTION_WORDS, IRREGULAR_PARTICIPLES,
};

use super::reports::{RepeatedWord, StyleProfile, Tone};

/// A form of "to be" followed by a past participle.
pub(crate) static PASSIVE_VOICE: LazyLock<Regex> = LazyLock::new(|| {
    let irregular = IRREGULAR_PARTICIPLES.join("|");
    Regex::new(&format!(
        r"(?i)\b(?:am|is|are|was|were|be|been|being)\s+(?:\w+ed|{irregular})\b"
    ))
    .expect("valid regex")
});

static WORDY_PHRASES: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(COMPLEX_PHRASES)
        .expect("valid patterns")
});

static FORMAL: LazyLock<Regex> = LazyLock::new(|| text::whole_word_pattern(FORMAL_MARKERS));

static CASUAL: LazyLock<Regex> = LazyLock::new(|| text::whole_word_pattern(CASUAL_MARKERS));

/// Words per sentence above which a sentence is long.
const LONG_SENTENCE_WORDS: usize = 25;

/// A word must appear more often than this to count as repeated.
const REPEAT_THRESHOLD: usize = 3;

/// Repeated words reported.
const MAX_REPEATED: usize = 5;

/// Build the style profile.
#[tracing::instrument(skip_all)]
pub fn style_profile(text: &str, words: &[String], sentences: &[String]) -> StyleProfile {
    let long_sentence_count = sentences
        .iter()
        .filter(|s| text::words(s).len() > LONG_SENTENCE_WORDS)
        .count();

    StyleProfile {
        passive_voice_count: PASSIVE_VOICE.find_iter(text).count(),
        repeated_words: repeated_words(words),
        long_sentence_count,
        complex_phrase_count: count_wordy_phrases(text),
        tone: detect_tone(text),
    }
}

/// Content words used more than three times, most frequent first.
///
/// Equal counts are ordered alphabetically.
pub fn repeated_words(words: &[String]) -> Vec<RepeatedWord> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for w in words {
        if !FUNCTION_WORDS.contains(w.as_str()) {
            *counts.entry(w.as_str()).or_insert(0) += 1;
        }
    }

    let mut repeated: Vec<RepeatedWord> = counts
        .into_iter()
        .filter(|&(_, count)| count > REPEAT_THRESHOLD)
        .map(|(word, count)| RepeatedWord {
            word: word.to_string(),
            count,
        })
        .collect();
    // Stable sort keeps the alphabetical order from the BTreeMap for ties.
    repeated.sort_by(|a, b| b.count.cmp(&a.count));
    repeated.truncate(MAX_REPEATED);
    repeated
}

/// Count wordy stock phrases that stand as whole words.
pub fn count_wordy_phrases(text: &str) -> usize {
    WORDY_PHRASES
        .find_iter(text)
        .filter(|m| is_word_boundary(text, m.start(), m.end()))
        .count()
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Formal when formal markers outnumber casual ones two to one, casual in
/// the opposite case, neutral otherwise.
pub fn detect_tone(text: &str) -> Tone {
    let formal = FORMAL.find_iter(text).count();
    let casual = CASUAL.find_iter(text).count();

    if formal > casual * 2 {
        Tone::Formal
    } else if casual > formal * 2 {
        Tone::Casual
    } else {
        Tone::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(input: &str) -> StyleProfile {
        style_profile(input, &text::words(input), &text::sentences(input))
    }

    #[test]
    fn plain_text_is_neutral() {
        let p = profile("The cat sat. The cat ran.");
        assert_eq!(p.tone, Tone::Neutral);
        assert_eq!(p.passive_voice_count, 0);
        assert!(p.repeated_words.is_empty());
        assert_eq!(p.long_sentence_count, 0);
        assert_eq!(p.complex_phrase_count, 0);
    }

    #[test]
    fn passive_voice_regular_and_irregular() {
        let p = profile("The ball was kicked. The letter was written. The house is big.");
        assert_eq!(p.passive_voice_count, 2);
    }

    #[test]
    fn single_repeated_word_in_fifty() {
        let mut words: Vec<String> = (0..45).map(|i| format!("filler{}", i % 15)).collect();
        words.extend(std::iter::repeat_n("system".to_string(), 5));
        assert_eq!(words.len(), 50);

        let repeated = repeated_words(&words);
        assert_eq!(
            repeated,
            vec![RepeatedWord {
                word: "system".to_string(),
                count: 5
            }]
        );
    }

    #[test]
    fn repeated_words_sorted_and_capped() {
        let text = "alpha alpha alpha alpha beta beta beta beta beta \
                    gamma gamma gamma gamma delta delta delta delta \
                    epsilon epsilon epsilon epsilon zeta zeta zeta zeta \
                    the the the the the the";
        let repeated = repeated_words(&text::words(text));
        let names: Vec<&str> = repeated.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(names, vec!["beta", "alpha", "delta", "epsilon", "gamma"]);
    }

    #[test]
    fn long_sentences_counted() {
        let long = vec!["word"; 26].join(" ");
        let p = profile(&format!("{long}. Short one."));
        assert_eq!(p.long_sentence_count, 1);
    }

    #[test]
    fn wordy_phrases_need_word_boundaries() {
        assert_eq!(count_wordy_phrases("In order to win, we trained."), 1);
        assert_eq!(count_wordy_phrases("Due to the fact that it rained."), 1);
        assert_eq!(count_wordy_phrases("Within order together."), 0);
    }

    #[test]
    fn tone_two_to_one_rule() {
        assert_eq!(detect_tone("Therefore, the result holds. Thus it is."), Tone::Formal);
        assert_eq!(detect_tone("Yeah, that's cool stuff."), Tone::Casual);
        assert_eq!(detect_tone("Therefore this is cool."), Tone::Neutral);
    }
}
