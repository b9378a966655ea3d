//! Paragraph cohesion and argument strength.

use std::sync::LazyLock;

use regex::Regex;

use crate::math::{clamp_score, mean, ratio, round1, score_u32};
use crate::text;
use crate::word_lists::COHESION_TRANSITIONS;

use super::reports::{ArgumentMetrics, CohesionRecord};
use super::sentiment;

static TRANSITIONS: LazyLock<Regex> =
    LazyLock::new(|| text::whole_word_pattern(COHESION_TRANSITIONS));

/// Citation and quotation patterns, counted independently.
static REFERENCE_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        // [1], [2, 3], [4-6]
        r"\[\d+(?:\s*[,\-–]\s*\d+)*\]",
        // (Smith, 2020), (Smith et al. 2019a)
        r"\([A-Z][A-Za-z'\-]+(?:\s+et al\.)?,?\s+\d{4}[a-z]?\)",
        r"(?i)\b(?:et al|ibid)\.",
        r#""[^"\n]+"|“[^”\n]+”"#,
    ]
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
});

/// Sentence length at which the coherence length bonus peaks.
const IDEAL_SENTENCE_LENGTH: f64 = 15.0;

/// Compute a cohesion record for each paragraph.
#[tracing::instrument(skip_all, fields(paragraphs = paragraphs.len()))]
pub fn cohesion_records(paragraphs: &[String]) -> Vec<CohesionRecord> {
    paragraphs
        .iter()
        .enumerate()
        .map(|(index, paragraph)| paragraph_cohesion(index + 1, paragraph))
        .collect()
}

fn paragraph_cohesion(number: usize, paragraph: &str) -> CohesionRecord {
    let words = text::words(paragraph);
    let sentence_count = text::sentences(paragraph).len();

    let transitions = TRANSITIONS.find_iter(paragraph).count();
    let references: usize = REFERENCE_PATTERNS
        .iter()
        .map(|re| re.find_iter(paragraph).count())
        .sum();

    let avg_sentence_length = ratio(words.len(), sentence_count);
    let length_bonus = 20.0 - (IDEAL_SENTENCE_LENGTH - avg_sentence_length).abs();
    let coherence = clamp_score(50.0 + transitions as f64 * 8.0 + length_bonus);

    CohesionRecord {
        paragraph: number,
        transitions,
        references,
        coherence: round1(coherence),
        sentiment: sentiment::paragraph_polarity(&words),
    }
}

/// Derive argument strength from the per-paragraph records.
///
/// An empty record list scores zero on every axis.
#[tracing::instrument(skip_all)]
pub fn argument_metrics(records: &[CohesionRecord]) -> ArgumentMetrics {
    let paragraphs = records.len().max(1) as f64;
    let total_references: usize = records.iter().map(|r| r.references).sum();
    let total_transitions: usize = records.iter().map(|r| r.transitions).sum();
    let coherence: Vec<f64> = records.iter().map(|r| r.coherence).collect();

    let evidence = (total_references as f64 / paragraphs * 30.0).min(100.0);
    let support = (total_transitions as f64 / paragraphs * 30.0).min(100.0);
    let transition_strength = (total_transitions as f64 / (paragraphs * 2.0) * 100.0).min(100.0);
    let logic = 0.5 * mean(&coherence) + 0.5 * transition_strength;
    let impact = 0.35 * evidence + 0.4 * logic + 0.25 * support;

    ArgumentMetrics {
        evidence: score_u32(evidence),
        logic: score_u32(logic),
        support: score_u32(support),
        impact: score_u32(impact),
    }
}
