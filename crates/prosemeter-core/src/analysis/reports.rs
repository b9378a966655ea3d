//! Report structs for document analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses. Categorical results
//! are closed enums that serialize as their display label.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::{ReadabilityResult, ReadingTime};

/// Complete analysis of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentAnalysis {
    /// Basic counts and averages.
    pub statistics: TextStatistics,
    /// Flesch scores.
    pub readability: ReadabilityResult,
    /// Reading time estimate.
    pub reading_time: ReadingTime,
    /// Five-axis complexity profile.
    pub complexity: ComplexityProfile,
    /// Content vs function words.
    pub lexical_density: LexicalDensity,
    /// Type-token ratios.
    pub vocabulary: VocabularyDiversity,
    /// Sections, lists, paragraphs, intro/conclusion.
    pub structure: StructureProfile,
    /// Sentence length, type, opening, and rhythm variety.
    pub sentence_variety: SentenceVariety,
    /// Passive voice, repetition, tone.
    pub style: StyleProfile,
    /// Lexicon-based sentiment.
    pub sentiment: SentimentResult,
    /// Per-paragraph cohesion.
    pub cohesion: Vec<CohesionRecord>,
    /// Evidence, logic, support, impact.
    pub argument: ArgumentMetrics,
    /// Topic-sentence quality per paragraph.
    pub topic_sentences: TopicSentenceAnalysis,
    /// Sentence-opening variety.
    pub openings: OpeningVariety,
    /// Domain, tone, structure, and purpose classification.
    pub context: DocumentContext,
    /// Composite writing score (0–100).
    pub overall_score: u32,
    /// Triggered improvement suggestions, in rule order.
    pub suggestions: Vec<Suggestion>,
}

// -- Statistics -------------------------------------------------------------

/// Basic text statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextStatistics {
    /// Word tokens.
    pub word_count: usize,
    /// Sentences.
    pub sentence_count: usize,
    /// Paragraphs.
    pub paragraph_count: usize,
    /// Characters in the raw text.
    pub char_count: usize,
    /// Mean characters per word (0 when there are no words).
    pub avg_word_length: f64,
    /// Mean words per sentence (0 when there are no sentences).
    pub avg_sentence_length: f64,
    /// Mean syllables per word (0 when there are no words).
    pub avg_syllables_per_word: f64,
}

// -- Complexity -------------------------------------------------------------

/// Five independent complexity sub-scores, each 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComplexityProfile {
    /// Word-length driven vocabulary difficulty.
    pub vocabulary: f64,
    /// Sentence-length difficulty.
    pub sentence_length: f64,
    /// Share of complex and compound-complex sentences.
    pub structure: f64,
    /// Inverse of the Flesch score.
    pub readability: f64,
    /// Density of technical vocabulary.
    pub technical: f64,
    /// Words with more than two syllables.
    pub complex_words: usize,
    /// Mean characters per word.
    pub average_word_length: f64,
}

// -- Lexical ----------------------------------------------------------------

/// Lexical density: content words as a share of all words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LexicalDensity {
    /// Open-class words.
    pub content_words: usize,
    /// Closed-class words.
    pub function_word_count: usize,
    /// Sum of both.
    pub total: usize,
    /// `content_words / total * 100`, two decimals; 0 for empty text.
    pub density: f64,
}

/// Type-token vocabulary diversity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyDiversity {
    /// Word tokens.
    pub total_words: usize,
    /// Distinct word types.
    pub unique_words: usize,
    /// `unique / total * 100`, one decimal.
    pub basic_ttr: f64,
    /// Mean unique ratio over sliding windows, as a percentage.
    pub moving_ttr: f64,
    /// Square root of `basic_ttr`.
    pub root_ttr: f64,
    /// Window size used for `moving_ttr`.
    pub window_size: f64,
}

// -- Structure --------------------------------------------------------------

/// Document-level structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructureProfile {
    /// Markdown headings.
    pub section_count: usize,
    /// Markdown list items.
    pub list_count: usize,
    /// Words in each paragraph, in order.
    pub paragraph_word_counts: Vec<usize>,
    /// Mean words per sentence in each paragraph, in order.
    pub paragraph_sentence_lengths: Vec<f64>,
    /// Percentage of paragraphs within 20% of the mean paragraph length.
    pub paragraph_consistency: f64,
    /// An introduction phrase was found.
    pub has_introduction: bool,
    /// A conclusion phrase was found.
    pub has_conclusion: bool,
}

// -- Sentence variety -------------------------------------------------------

/// Grammatical sentence type, detected by conjunction patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SentenceType {
    /// No conjunctions and no internal punctuation.
    Simple,
    /// Joined by a coordinating conjunction.
    Compound,
    /// Contains a subordinating conjunction.
    Complex,
    /// Both coordinating and subordinating.
    CompoundComplex,
}

/// Sentence counts per type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceTypeCounts {
    /// Simple sentences.
    pub simple: usize,
    /// Compound sentences.
    pub compound: usize,
    /// Complex sentences.
    pub complex: usize,
    /// Compound-complex sentences.
    pub compound_complex: usize,
    /// Sentences matching no type (punctuated but without conjunctions).
    pub unclassified: usize,
}

/// Coarse class of a sentence's first word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpeningKind {
    /// Pronoun or determiner.
    Subject,
    /// Gerund or imperative.
    Verb,
    /// Preposition.
    Preposition,
    /// Conjunction.
    Conjunction,
    /// `-ly` adverb or sentence adverb.
    Adverb,
    /// Anything else.
    Other,
}

/// How many sentences open with a given kind of word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OpeningKindCount {
    /// The opening kind.
    pub kind: OpeningKind,
    /// Number of sentences.
    pub count: usize,
}

/// Sentence variety sub-scores and composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceVariety {
    /// Words per sentence, in order.
    pub lengths: Vec<usize>,
    /// Mean sentence length.
    pub mean_length: f64,
    /// Standard deviation of sentence length.
    pub std_deviation: f64,
    /// Coefficient of variation × 100, capped at 100.
    pub length_score: f64,
    /// Sentences per type.
    pub types: SentenceTypeCounts,
    /// 100 minus distance from the ideal type mix, floored at 0.
    pub structure_score: f64,
    /// Distinct first words per sentence × 100.
    pub opening_score: f64,
    /// Sentences per opening kind.
    pub opening_kinds: Vec<OpeningKindCount>,
    /// Adjacent length-change score.
    pub rhythm_score: f64,
    /// Weighted composite of the four scores.
    pub variety_score: u32,
}

// -- Style ------------------------------------------------------------------

/// Register of the writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Tone {
    /// Formal markers dominate two to one.
    Formal,
    /// Casual markers dominate two to one.
    Casual,
    /// Neither dominates.
    Neutral,
}

impl Tone {
    /// Label used in output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "Formal",
            Self::Casual => "Casual",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content word used more than three times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RepeatedWord {
    /// The word.
    pub word: String,
    /// Occurrences.
    pub count: usize,
}

/// Style observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleProfile {
    /// Passive constructions (auxiliary + participle).
    pub passive_voice_count: usize,
    /// Top five over-used content words, most frequent first.
    pub repeated_words: Vec<RepeatedWord>,
    /// Sentences with more than 25 words.
    pub long_sentence_count: usize,
    /// Wordy stock phrases.
    pub complex_phrase_count: usize,
    /// Formal, casual, or neutral.
    pub tone: Tone,
}

// -- Sentiment --------------------------------------------------------------

/// Five-step sentiment scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum SentimentLabel {
    /// Normalized score ≥ 75.
    #[serde(rename = "Very Positive")]
    VeryPositive,
    /// Normalized score ≥ 60.
    #[serde(rename = "Positive")]
    Positive,
    /// Normalized score ≥ 40.
    #[serde(rename = "Neutral")]
    Neutral,
    /// Normalized score ≥ 25.
    #[serde(rename = "Negative")]
    Negative,
    /// Everything below.
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl SentimentLabel {
    /// Label for a normalized score.
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            Self::VeryPositive
        } else if score >= 60.0 {
            Self::Positive
        } else if score >= 40.0 {
            Self::Neutral
        } else if score >= 25.0 {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }

    /// Label used in output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryPositive => "Very Positive",
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
            Self::VeryNegative => "Very Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence that carried sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceSentiment {
    /// Sentence text.
    pub text: String,
    /// Signed raw score.
    pub score: f64,
}

/// Raw sentiment totals before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentMetrics {
    /// Sum of sentence scores.
    pub total_score: f64,
    /// Sentiment-bearing words seen.
    pub weighted_word_count: usize,
    /// `total_score / weighted_word_count`, 0 when no words carried sentiment.
    pub average_score: f64,
}

/// Document sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentResult {
    /// Five-step label.
    pub label: SentimentLabel,
    /// `(average + 2) * 25`, clamped to 0–100.
    pub normalized_score: f64,
    /// Sentences with a nonzero score.
    pub sentences: Vec<SentenceSentiment>,
    /// Raw totals.
    pub raw: SentimentMetrics,
}

// -- Cohesion ---------------------------------------------------------------

/// Positive and negative sentiment word counts, each × 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParagraphSentiment {
    /// Positive words × 10.
    pub positive: usize,
    /// Negative words × 10.
    pub negative: usize,
}

/// Cohesion signals for one paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CohesionRecord {
    /// Paragraph number (1-indexed).
    pub paragraph: usize,
    /// Transition term occurrences.
    pub transitions: usize,
    /// Citation and quotation matches.
    pub references: usize,
    /// Coherence score, 0–100.
    pub coherence: f64,
    /// Sentiment word counts.
    pub sentiment: ParagraphSentiment,
}

/// Argument-strength composite, each 0–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArgumentMetrics {
    /// References per paragraph.
    pub evidence: u32,
    /// Coherence and transition strength.
    pub logic: u32,
    /// Transitions per paragraph.
    pub support: u32,
    /// Weighted blend of the other three.
    pub impact: u32,
}

// -- Topic sentences --------------------------------------------------------

/// Topic-sentence quality for one paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TopicSentenceScore {
    /// Paragraph number (1-indexed).
    pub paragraph: usize,
    /// The topic sentence.
    pub sentence: String,
    /// Length fit to the 10–25 word band.
    pub length: f64,
    /// Additive hook signals, unclamped.
    pub hook: f64,
    /// Share of topic content words echoed in the rest of the paragraph.
    pub relevance: f64,
    /// 100 minus clarity penalties, floored at 0.
    pub clarity: f64,
    /// 100 when the paragraph opens with a transition (or is the first).
    pub transition: f64,
    /// Weighted blend.
    pub overall: f64,
}

/// Topic-sentence quality across the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TopicSentenceAnalysis {
    /// Per-paragraph scores.
    pub paragraphs: Vec<TopicSentenceScore>,
    /// Mean of per-paragraph `overall`.
    pub document_score: f64,
}

// -- Openings ---------------------------------------------------------------

/// Category of a sentence's first word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpeningCategory {
    /// Pronoun or determiner.
    Subject,
    /// Gerund or imperative verb.
    Action,
    /// Interrogative word.
    Question,
    /// Transition adverb.
    Transition,
    /// Adjective or `-ly` adverb.
    Description,
    /// Preposition.
    Prepositional,
    /// Conjunction.
    Conjunction,
    /// Anything else.
    Other,
}

impl OpeningCategory {
    /// Every category in priority order.
    pub const ALL: [Self; 8] = [
        Self::Subject,
        Self::Action,
        Self::Question,
        Self::Transition,
        Self::Description,
        Self::Prepositional,
        Self::Conjunction,
        Self::Other,
    ];
}

/// Share of sentences opening with a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpeningShare {
    /// The category.
    pub category: OpeningCategory,
    /// Sentences.
    pub count: usize,
    /// Share of all sentences, one decimal.
    pub percentage: f64,
}

/// Sentence-opening variety metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpeningVariety {
    /// Sentences examined.
    pub sentence_count: usize,
    /// Distinct first words per sentence × 100.
    pub unique_word_ratio: f64,
    /// Distinct first three-word phrases per sentence × 100.
    pub unique_phrase_ratio: f64,
    /// Category per sentence, in order.
    pub categories: Vec<OpeningCategory>,
    /// Category distribution, in priority order, only nonzero entries.
    pub distribution: Vec<OpeningShare>,
    /// Pattern quality, 0–100.
    pub pattern_score: f64,
    /// Transition strength, 0–100.
    pub transition_score: f64,
}

// -- Context ----------------------------------------------------------------

/// Document domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Software and systems.
    Technical,
    /// Scholarship and research writing.
    Academic,
    /// Commerce and management.
    Business,
    /// Fiction and expressive writing.
    Creative,
    /// Experimental science.
    Scientific,
    /// Contracts and law.
    Legal,
    /// Teaching material.
    Educational,
}

impl Domain {
    /// Every domain in tie-break order.
    pub const ALL: [Self; 7] = [
        Self::Technical,
        Self::Academic,
        Self::Business,
        Self::Creative,
        Self::Scientific,
        Self::Legal,
        Self::Educational,
    ];

    /// Lowercase label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Academic => "academic",
            Self::Business => "business",
            Self::Creative => "creative",
            Self::Scientific => "scientific",
            Self::Legal => "legal",
            Self::Educational => "educational",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone as judged by competing marker categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContextTone {
    /// Impersonal, hedged, academic register.
    Formal,
    /// Direct address and contractions.
    Conversational,
    /// Calls to action and strong claims.
    Persuasive,
}

/// Organisation as judged by competing marker categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContextStructure {
    /// Ordered steps.
    Sequential,
    /// Comparison and contrast.
    Comparative,
    /// Causes and consequences.
    CauseEffect,
}

/// Purpose as judged by competing marker categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContextPurpose {
    /// Explain or describe.
    Inform,
    /// Convince.
    Persuade,
    /// Teach a procedure.
    Instruct,
}

macro_rules! labeled {
    ($ty:ty { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// Serialized label.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labeled!(ContextTone {
    Formal => "formal",
    Conversational => "conversational",
    Persuasive => "persuasive",
});

labeled!(ContextStructure {
    Sequential => "sequential",
    Comparative => "comparative",
    CauseEffect => "cause_effect",
});

labeled!(ContextPurpose {
    Inform => "inform",
    Persuade => "persuade",
    Instruct => "instruct",
});

/// Scaled score for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DomainScore {
    /// The domain.
    pub domain: Domain,
    /// `(primary * 2 + secondary) * multiplier`.
    pub score: f64,
}

/// Document-context classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentContext {
    /// Highest-scoring domain (first in enumeration order on ties).
    pub primary_type: Domain,
    /// Scores for all seven domains, in enumeration order.
    pub scores: Vec<DomainScore>,
    /// Tone category.
    pub tone: ContextTone,
    /// Structure category.
    pub structure: ContextStructure,
    /// Purpose category.
    pub purpose: ContextPurpose,
    /// Flesch score, copied from the readability result.
    pub complexity: f64,
    /// Mean sentence length, copied from the statistics.
    pub sentence_length: f64,
}

impl DocumentContext {
    /// Score of the primary domain.
    pub fn primary_score(&self) -> f64 {
        self.scores
            .iter()
            .find(|s| s.domain == self.primary_type)
            .map_or(0.0, |s| s.score)
    }
}

// -- Suggestions ------------------------------------------------------------

/// Icon tag a presentation layer can map to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionIcon {
    /// Readability problems.
    BookOpen,
    /// Structure problems.
    ListTree,
    /// Voice problems.
    Megaphone,
    /// Content length problems.
    FilePlus,
    /// Language level problems.
    Feather,
    /// Domain-specific style advice.
    Compass,
    /// Tone advice.
    MessageCircle,
    /// Purpose advice.
    Target,
}

/// A triggered improvement suggestion. Plain text; any markup rendering is
/// the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// Icon tag.
    pub icon: SuggestionIcon,
    /// Short title.
    pub title: String,
    /// Advice text.
    pub content: String,
}

// -- Chart series -----------------------------------------------------------

/// One labeled point in a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabeledValue {
    /// Axis or category label.
    pub label: String,
    /// Value.
    pub value: f64,
}

/// Numeric series for a charting front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChartSeries {
    /// Quick, Medium, and Thorough reading percentages. Not normalized.
    pub reading_time: Vec<LabeledValue>,
    /// The five complexity axes.
    pub complexity: Vec<LabeledValue>,
    /// Content and function word percentages; `[50, 50]` with no words.
    pub lexical_split: [f64; 2],
    /// Mean sentence length per paragraph, at least two points.
    pub style_evolution: Vec<LabeledValue>,
}
