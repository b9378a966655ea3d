//! Document analysis.
//!
//! Each aspect of writing quality is a pure function in its own module.
//! [`analyze_document`] tokenizes once, runs every analyzer, and assembles a
//! [`DocumentAnalysis`]. Callers can also invoke analyzers individually.

pub mod charts;
pub mod cohesion;
pub mod complexity;
pub mod context;
pub mod lexical;
pub mod openings;
pub mod reports;
pub mod sentiment;
pub mod statistics;
pub mod structure;
pub mod style;
pub mod suggestions;
pub mod topic;
pub mod variety;
pub mod vocabulary;

pub use reports::{ComplexityProfile, DocumentAnalysis};

use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::math::score_u32;
use crate::readability::{self, ReadabilityResult};
use crate::text;

/// Analyze a document.
///
/// Total: any string, including an empty one, yields a complete record with
/// finite numbers.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_document(text: &str) -> DocumentAnalysis {
    let words = text::words(text);
    let sentences = text::sentences(text);
    let paragraphs = text::paragraphs(text);

    let stats = statistics::text_statistics(text, &words, &sentences, &paragraphs);
    let readability = readability::check_readability(text);
    let reading_time = readability::reading_time(text);
    let sentence_variety = variety::sentence_variety(&sentences);
    let complexity =
        complexity::complexity_profile(&words, &stats, &readability, &sentence_variety.types);
    let cohesion = cohesion::cohesion_records(&paragraphs);
    let argument = cohesion::argument_metrics(&cohesion);
    let context =
        context::classify_context(text, readability.score, stats.avg_sentence_length);
    let overall_score = overall_score(&readability, &complexity);

    let mut analysis = DocumentAnalysis {
        lexical_density: lexical::lexical_density(&words),
        vocabulary: vocabulary::vocabulary_diversity(&words),
        structure: structure::structure_profile(text, &paragraphs),
        style: style::style_profile(text, &words, &sentences),
        sentiment: sentiment::analyze_sentiment(&sentences),
        topic_sentences: topic::topic_sentences(&paragraphs),
        openings: openings::opening_variety(&sentences),
        statistics: stats,
        readability,
        reading_time,
        complexity,
        sentence_variety,
        cohesion,
        argument,
        context,
        overall_score,
        suggestions: Vec::new(),
    };
    analysis.suggestions = suggestions::all_suggestions(text, &analysis);

    debug!(
        words = analysis.statistics.word_count,
        sentences = analysis.statistics.sentence_count,
        readability = analysis.readability.score,
        overall = analysis.overall_score,
        domain = %analysis.context.primary_type,
        "document analyzed"
    );

    analysis
}

/// Analyze a document after checking its size.
///
/// `limit` is in bytes; `None` disables the check.
pub fn analyze_bounded(text: &str, limit: Option<usize>) -> AnalysisResult<DocumentAnalysis> {
    check_input_size(text, limit)?;
    Ok(analyze_document(text))
}

/// Reject text longer than `limit` bytes.
pub fn check_input_size(text: &str, limit: Option<usize>) -> AnalysisResult<()> {
    match limit {
        Some(limit) if text.len() > limit => Err(AnalysisError::InputTooLarge {
            size: text.len(),
            limit,
        }),
        _ => Ok(()),
    }
}

/// Composite writing score (0–100).
///
/// The Flesch score averaged with the mean of the vocabulary, sentence
/// length, structure, and technical complexity axes.
pub fn overall_score(readability: &ReadabilityResult, complexity: &ComplexityProfile) -> u32 {
    let complexity_mean = (complexity.vocabulary
        + complexity.sentence_length
        + complexity.structure
        + complexity.technical)
        / 4.0;
    score_u32((readability.score + complexity_mean) / 2.0)
}
