//! Topic-sentence quality.
//!
//! The first sentence of each paragraph is its topic sentence. It is scored
//! on length, hook strength, relevance to the rest of the paragraph,
//! clarity, and (after the first paragraph) whether it opens with a
//! transition.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::math::{mean, percent, round1};
use crate::text;
use crate::word_lists::{
    CONTRAST_WORDS, EMPHATIC_ADJECTIVES, FUNCTION_WORDS, JARGON_TERMS, TOPIC_TRANSITIONS,
};

use super::reports::{TopicSentenceAnalysis, TopicSentenceScore};
use super::style::PASSIVE_VOICE;

static NUMERAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d%]").expect("valid regex"));

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]+"|“[^”]+”"#).expect("valid regex"));

static EMPHATIC: LazyLock<Regex> =
    LazyLock::new(|| text::whole_word_pattern(EMPHATIC_ADJECTIVES));

static CONTRAST: LazyLock<Regex> = LazyLock::new(|| text::whole_word_pattern(CONTRAST_WORDS));

static TRANSITION: LazyLock<Regex> =
    LazyLock::new(|| text::whole_word_pattern(TOPIC_TRANSITIONS));

const LENGTH_WEIGHT: f64 = 0.2;
const HOOK_WEIGHT: f64 = 0.15;
const RELEVANCE_WEIGHT: f64 = 0.3;
const CLARITY_WEIGHT: f64 = 0.25;
const TRANSITION_WEIGHT: f64 = 0.1;

/// Score the topic sentence of every paragraph.
///
/// Paragraphs without a sentence are skipped.
#[tracing::instrument(skip_all, fields(paragraphs = paragraphs.len()))]
pub fn topic_sentences(paragraphs: &[String]) -> TopicSentenceAnalysis {
    let scores: Vec<TopicSentenceScore> = paragraphs
        .iter()
        .enumerate()
        .filter_map(|(index, paragraph)| score_paragraph(index, paragraph))
        .collect();
    let overall: Vec<f64> = scores.iter().map(|s| s.overall).collect();

    TopicSentenceAnalysis {
        document_score: round1(mean(&overall)),
        paragraphs: scores,
    }
}

fn score_paragraph(index: usize, paragraph: &str) -> Option<TopicSentenceScore> {
    let sentences = text::sentences(paragraph);
    let (topic, rest) = sentences.split_first()?;

    let length = length_score(text::words(topic).len());
    let hook = hook_strength(topic, is_question(paragraph, topic));
    let relevance = relevance(topic, &rest.join(" "));
    let clarity = clarity(topic);
    let transition = if index == 0 || TRANSITION.is_match(topic) {
        100.0
    } else {
        0.0
    };

    let overall = LENGTH_WEIGHT * length
        + HOOK_WEIGHT * hook
        + RELEVANCE_WEIGHT * relevance
        + CLARITY_WEIGHT * clarity
        + TRANSITION_WEIGHT * transition;

    Some(TopicSentenceScore {
        paragraph: index + 1,
        sentence: topic.clone(),
        length: round1(length),
        hook: round1(hook),
        relevance: round1(relevance),
        clarity: round1(clarity),
        transition,
        overall: round1(overall),
    })
}

/// 100 inside the 10–25 word band, 10 per word below it, minus 4 per word
/// above it.
pub fn length_score(word_count: usize) -> f64 {
    match word_count {
        10..=25 => 100.0,
        0..10 => word_count as f64 * 10.0,
        _ => (100.0 - (word_count - 25) as f64 * 4.0).max(0.0),
    }
}

/// Sum of independent hook signals. Not clamped; all five together reach
/// exactly 100.
pub fn hook_strength(sentence: &str, question: bool) -> f64 {
    let mut hook = 0.0;
    if question {
        hook += 25.0;
    }
    if NUMERAL.is_match(sentence) {
        hook += 20.0;
    }
    if QUOTED.is_match(sentence) {
        hook += 20.0;
    }
    if EMPHATIC.is_match(sentence) {
        hook += 15.0;
    }
    if CONTRAST.is_match(sentence) {
        hook += 20.0;
    }
    hook
}

/// Whether the sentence is terminated by a run containing `?`.
///
/// Sentence splitting drops terminators, so the paragraph is consulted.
fn is_question(paragraph: &str, sentence: &str) -> bool {
    paragraph.find(sentence).is_some_and(|start| {
        paragraph[start + sentence.len()..]
            .chars()
            .take_while(|c| matches!(c, '.' | '!' | '?'))
            .any(|c| c == '?')
    })
}

/// Percentage of the topic's content words (four letters or more) that
/// reappear in the rest of the paragraph.
pub fn relevance(topic: &str, rest: &str) -> f64 {
    let key_words: BTreeSet<String> = text::words(topic)
        .into_iter()
        .filter(|w| w.chars().count() >= 4 && !FUNCTION_WORDS.contains(w.as_str()))
        .collect();
    let rest_words: BTreeSet<String> = text::words(rest).into_iter().collect();

    let echoed = key_words.iter().filter(|w| rest_words.contains(*w)).count();
    percent(echoed, key_words.len())
}

/// 100 minus penalties for long words, passive voice, commas, and jargon.
pub fn clarity(sentence: &str) -> f64 {
    let words = text::words(sentence);
    let long_words = words.iter().filter(|w| w.chars().count() > 12).count();
    let jargon = words
        .iter()
        .filter(|w| JARGON_TERMS.contains(w.as_str()))
        .count();
    let commas = sentence.matches(',').count();
    let passive = if PASSIVE_VOICE.is_match(sentence) {
        15.0
    } else {
        0.0
    };

    let penalty = long_words as f64 * 10.0 + passive + commas as f64 * 5.0 + jargon as f64 * 8.0;
    (100.0 - penalty).max(0.0)
}
