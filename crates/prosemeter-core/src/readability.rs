//! Readability scoring.
//!
//! - Flesch Reading Ease: `206.835 - 1.015 * ASL - 84.6 * ASW`, clamped to 0–100.
//! - Flesch-Kincaid Grade Level: `0.39 * ASL + 11.8 * ASW - 15.59`, unclamped.
//!
//! `ASL` is words per sentence and `ASW` is syllables per word. Both
//! denominators fall back to 1, so a document with no sentences or no words
//! still gets a finite score.
//!
//! Syllables come from a vowel-cluster heuristic rather than a dictionary;
//! it never returns zero for a word.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::math::{clamp_score, ratio, round1, round2};
use crate::text;

/// Average adult silent reading speed, words per minute.
pub const WORDS_PER_MINUTE: f64 = 238.0;

/// Silent trailing endings: consonant + `es`, `ed`, consonant + `e`.
static SILENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid regex"));

static LEADING_Y: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^y").expect("valid regex"));

static VOWEL_CLUSTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

/// Ordered readability bands, easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum ReadabilityLevel {
    /// Score above 90.
    #[serde(rename = "Very Easy")]
    VeryEasy,
    /// Score above 80.
    #[serde(rename = "Easy")]
    Easy,
    /// Score above 70.
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    /// Score above 60.
    #[serde(rename = "Standard")]
    Standard,
    /// Score above 50.
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    /// Score above 30.
    #[serde(rename = "Difficult")]
    Difficult,
    /// Everything else.
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

impl ReadabilityLevel {
    /// Band for a Flesch Reading Ease score. Bounds are exclusive, so a
    /// score of exactly 90 is `Easy`.
    pub fn from_score(score: f64) -> Self {
        if score > 90.0 {
            Self::VeryEasy
        } else if score > 80.0 {
            Self::Easy
        } else if score > 70.0 {
            Self::FairlyEasy
        } else if score > 60.0 {
            Self::Standard
        } else if score > 50.0 {
            Self::FairlyDifficult
        } else if score > 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

impl fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityResult {
    /// Flesch Reading Ease, clamped to 0–100.
    pub score: f64,
    /// Flesch-Kincaid Grade Level, one decimal, unclamped.
    pub grade: f64,
    /// Band for `score`.
    pub level: ReadabilityLevel,
}

/// Estimated reading time, split into three reading modes.
///
/// The percentages are computed independently and are not normalized: once
/// the word count passes 500 they no longer sum to 100. The three durations
/// are fixed multiples of `adjusted_seconds` and do not sum to it either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadingTime {
    /// Words counted.
    pub word_count: usize,
    /// `word_count / 238` minutes, in seconds.
    pub base_seconds: f64,
    /// Multiplier from word difficulty and sentence length.
    pub complexity_factor: f64,
    /// `base_seconds * complexity_factor`.
    pub adjusted_seconds: f64,
    /// Skim time (0.7 × adjusted).
    pub quick_seconds: f64,
    /// Normal read (1.0 × adjusted).
    pub medium_seconds: f64,
    /// Careful read (1.3 × adjusted).
    pub thorough_seconds: f64,
    /// Share of readers expected to skim.
    pub quick_percent: f64,
    /// Share of readers expected to read normally.
    pub medium_percent: f64,
    /// Remainder, floored at zero.
    pub thorough_percent: f64,
}

/// Estimate syllables in a single word.
///
/// Lowercases and strips non-letters; words of three letters or fewer count
/// as one syllable. Otherwise silent endings and a leading `y` are removed
/// and vowel clusters of one or two letters are counted. Never returns 0.
pub fn count_syllables(word: &str) -> usize {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();
    if cleaned.len() <= 3 {
        return 1;
    }

    let trimmed = SILENT_SUFFIX.replace(&cleaned, "");
    let trimmed = LEADING_Y.replace(&trimmed, "");
    VOWEL_CLUSTER.find_iter(&trimmed).count().max(1)
}

/// Total syllables over a token list.
pub fn total_syllables(words: &[String]) -> usize {
    words.iter().map(|w| count_syllables(w)).sum()
}

/// Flesch Reading Ease, clamped to `[0, 100]`.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    let (asl, asw) = averages(words, sentences, syllables);
    clamp_score(206.835 - 1.015 * asl - 84.6 * asw)
}

/// Flesch-Kincaid Grade Level, rounded to one decimal. May be negative.
pub fn flesch_kincaid_grade(words: usize, sentences: usize, syllables: usize) -> f64 {
    let (asl, asw) = averages(words, sentences, syllables);
    round1(0.39f64.mul_add(asl, 11.8 * asw) - 15.59)
}

fn averages(words: usize, sentences: usize, syllables: usize) -> (f64, f64) {
    let asl = words as f64 / sentences.max(1) as f64;
    let asw = syllables as f64 / words.max(1) as f64;
    (asl, asw)
}

/// Score readability of a text.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(text: &str) -> ReadabilityResult {
    let words = text::words(text);
    let sentence_count = text::sentences(text).len();
    let syllables = total_syllables(&words);

    let score = flesch_reading_ease(words.len(), sentence_count, syllables);
    let grade = flesch_kincaid_grade(words.len(), sentence_count, syllables);

    ReadabilityResult {
        score,
        grade,
        level: ReadabilityLevel::from_score(score),
    }
}

/// Estimate reading time and the quick/medium/thorough distribution.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn reading_time(text: &str) -> ReadingTime {
    let words = text::words(text);
    let word_count = words.len();
    if word_count == 0 {
        return ReadingTime {
            word_count: 0,
            base_seconds: 0.0,
            complexity_factor: 1.0,
            adjusted_seconds: 0.0,
            quick_seconds: 0.0,
            medium_seconds: 0.0,
            thorough_seconds: 0.0,
            quick_percent: 0.0,
            medium_percent: 0.0,
            thorough_percent: 0.0,
        };
    }

    let sentence_count = text::sentences(text).len().max(1);
    let complex_words = words.iter().filter(|w| count_syllables(w) > 2).count();
    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();

    let complex_ratio = ratio(complex_words, word_count);
    let avg_sentence_length = word_count as f64 / sentence_count as f64;
    let avg_word_length = total_chars as f64 / word_count as f64;

    let base_seconds = (word_count as f64 / WORDS_PER_MINUTE) * 60.0;
    let complexity_factor = 1.0
        + 0.4 * complex_ratio
        + 0.3 * (avg_sentence_length / 20.0).min(1.0)
        + 0.3 * (avg_word_length / 6.0).min(1.0);
    let adjusted = base_seconds * complexity_factor;

    let quick_percent = (word_count as f64 / 500.0 * 100.0).min(100.0);
    let medium_percent = (word_count as f64 / 1000.0 * 100.0).min(100.0);
    let thorough_percent = (100.0 - quick_percent - medium_percent).max(0.0);

    ReadingTime {
        word_count,
        base_seconds: round2(base_seconds),
        complexity_factor: round2(complexity_factor),
        adjusted_seconds: round2(adjusted),
        quick_seconds: round2(adjusted * 0.7),
        medium_seconds: round2(adjusted),
        thorough_seconds: round2(adjusted * 1.3),
        quick_percent: round2(quick_percent),
        medium_percent: round2(medium_percent),
        thorough_percent: round2(thorough_percent),
    }
}
