//! Text segmentation.
//!
//! Splits raw text into words, sentences, and paragraphs. Every other
//! analyzer builds on these three functions, so they are deliberately simple
//! and total: empty or whitespace-only input yields empty sequences.

use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of word characters.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// One or more sentence terminators.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// A blank line: a newline, optional whitespace-only content, another newline.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[^\S\n]*(?:\n[^\S\n]*)+").expect("valid regex"));

/// Extract lowercase word tokens.
///
/// A word is a maximal run of word characters, so `"don't"` yields
/// `["don", "t"]` and punctuation never appears in a token.
pub fn words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Split text into sentences on runs of `.`, `!`, and `?`.
///
/// Fragments are trimmed; empty fragments (including the one after a final
/// terminator) are dropped. Text without any terminator is one sentence.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn sentences(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into paragraphs separated by blank lines.
pub fn paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a case-insensitive regex matching any of `terms` as whole words.
///
/// Spaces inside a multi-word term match any run of whitespace, so phrases
/// still match across line wraps.
pub fn whole_word_pattern(terms: &[&str]) -> Regex {
    let alternation = terms
        .iter()
        .map(|t| regex::escape(t).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("valid regex")
}

/// First word of a sentence, lowercased.
pub fn first_word(sentence: &str) -> Option<String> {
    WORD_PATTERN
        .find(sentence)
        .map(|m| m.as_str().to_lowercase())
}
