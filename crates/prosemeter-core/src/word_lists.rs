//! Curated word lists for writing analysis.
//!
//! Function words, sentiment weights, intensifiers, negations, transition
//! and evidence markers, jargon, hook vocabulary, and intro/conclusion
//! phrases. All tables are built once on first use and are read-only after
//! that, so they can be shared freely across threads.
//!
//! Ordered lists (`&[&str]`) are used where the terms become regex
//! alternations; sets and maps are used for per-token lookups.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Closed-class words: articles, prepositions, conjunctions, pronouns,
/// auxiliaries. Everything else counts as a content word.
pub static FUNCTION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "nor", "so", "yet", "in", "on", "at", "to", "for",
        "of", "with", "by", "from", "about", "into", "through", "over", "under", "after",
        "before", "between", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her",
        "us", "them", "my", "your", "his", "its", "our", "their", "this", "that", "these",
        "those", "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had",
        "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
        "must", "as", "if", "than", "then", "which", "who", "whom", "what", "not",
    ]
    .into_iter()
    .collect()
});

/// Sentiment lexicon: word to signed weight in `[-3, 3]`.
pub static SENTIMENT_LEXICON: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Positive
    map.extend([
        ("good", 2.0),
        ("great", 3.0),
        ("excellent", 3.0),
        ("amazing", 3.0),
        ("wonderful", 3.0),
        ("fantastic", 3.0),
        ("outstanding", 3.0),
        ("brilliant", 3.0),
        ("superb", 3.0),
        ("love", 3.0),
        ("happy", 2.0),
        ("joy", 2.0),
        ("pleased", 2.0),
        ("delighted", 3.0),
        ("beautiful", 2.0),
        ("nice", 1.0),
        ("fine", 1.0),
        ("positive", 2.0),
        ("success", 2.0),
        ("successful", 2.0),
        ("effective", 2.0),
        ("efficient", 2.0),
        ("helpful", 2.0),
        ("useful", 1.0),
        ("valuable", 2.0),
        ("benefit", 2.0),
        ("improve", 1.0),
        ("improved", 1.0),
        ("impressive", 2.0),
        ("strong", 1.0),
        ("clear", 1.0),
        ("easy", 1.0),
        ("enjoy", 2.0),
        ("exciting", 2.0),
        ("favorable", 2.0),
        ("best", 3.0),
        ("better", 1.0),
        ("perfect", 3.0),
        ("reliable", 2.0),
        ("robust", 1.0),
        ("innovative", 2.0),
        ("inspiring", 2.0),
        ("hope", 1.0),
        ("glad", 2.0),
        ("grateful", 2.0),
        ("thrilled", 3.0),
        ("win", 2.0),
        ("elegant", 2.0),
    ]);

    // Negative
    map.extend([
        ("bad", -2.0),
        ("terrible", -3.0),
        ("awful", -3.0),
        ("horrible", -3.0),
        ("poor", -2.0),
        ("worst", -3.0),
        ("worse", -2.0),
        ("hate", -3.0),
        ("sad", -2.0),
        ("angry", -2.0),
        ("upset", -2.0),
        ("disappointed", -2.0),
        ("disappointing", -2.0),
        ("fail", -2.0),
        ("failed", -2.0),
        ("failure", -2.0),
        ("problem", -1.0),
        ("problems", -1.0),
        ("issue", -1.0),
        ("difficult", -1.0),
        ("hard", -1.0),
        ("wrong", -2.0),
        ("broken", -2.0),
        ("weak", -1.0),
        ("slow", -1.0),
        ("ugly", -2.0),
        ("negative", -2.0),
        ("harmful", -2.0),
        ("dangerous", -2.0),
        ("risk", -1.0),
        ("loss", -2.0),
        ("lose", -2.0),
        ("confusing", -2.0),
        ("annoying", -2.0),
        ("useless", -3.0),
        ("frustrating", -2.0),
        ("painful", -2.0),
        ("fear", -2.0),
        ("worried", -2.0),
        ("crisis", -3.0),
        ("disaster", -3.0),
        ("unfortunately", -1.0),
        ("unreliable", -2.0),
        ("flawed", -2.0),
        ("mediocre", -1.0),
    ]);

    map
});

/// Intensifiers and diminishers: word to multiplier applied to the next
/// sentiment-bearing word.
pub static INTENSIFIERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    [
        ("very", 1.5),
        ("really", 1.5),
        ("extremely", 2.0),
        ("incredibly", 2.0),
        ("absolutely", 1.8),
        ("highly", 1.5),
        ("totally", 1.7),
        ("completely", 1.7),
        ("so", 1.3),
        ("too", 1.3),
        ("quite", 1.2),
        ("fairly", 1.1),
        ("somewhat", 0.7),
        ("slightly", 0.5),
        ("barely", 0.3),
        ("hardly", 0.3),
    ]
    .into_iter()
    .collect()
});

/// Negation tokens. Contractions split into a stem and `t`, so the stems
/// are listed here.
pub static NEGATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "without",
        "cannot", "don", "doesn", "didn", "isn", "aren", "wasn", "weren", "shouldn", "couldn",
        "wouldn", "hasn", "haven",
    ]
    .into_iter()
    .collect()
});

/// Transition terms counted by the cohesion analyzer.
pub const COHESION_TRANSITIONS: &[&str] = &[
    "however",
    "therefore",
    "furthermore",
    "moreover",
    "consequently",
    "additionally",
    "meanwhile",
    "nevertheless",
    "similarly",
    "thus",
    "hence",
    "for example",
    "in addition",
    "in contrast",
];

/// Transition phrases that earn a topic sentence its transition score.
pub const TOPIC_TRANSITIONS: &[&str] = &[
    "however",
    "furthermore",
    "moreover",
    "in addition",
    "additionally",
    "consequently",
    "therefore",
    "similarly",
    "on the other hand",
    "in contrast",
    "for example",
];

/// Sentence openers that count as good transitions.
pub static GOOD_TRANSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "however",
        "therefore",
        "moreover",
        "furthermore",
        "additionally",
        "consequently",
        "meanwhile",
        "nevertheless",
        "similarly",
        "finally",
        "first",
        "next",
    ]
    .into_iter()
    .collect()
});

/// Emphatic adjectives that make a topic sentence hook harder.
pub const EMPHATIC_ADJECTIVES: &[&str] = &[
    "crucial",
    "essential",
    "remarkable",
    "surprising",
    "critical",
    "vital",
    "striking",
    "important",
    "significant",
    "fundamental",
    "extraordinary",
];

/// Contrast conjunctions for hook detection.
pub const CONTRAST_WORDS: &[&str] = &["but", "however", "yet", "although", "despite", "whereas"];

/// Jargon that costs a topic sentence clarity.
pub static JARGON_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "synergy",
        "leverage",
        "paradigm",
        "holistic",
        "utilize",
        "utilization",
        "operationalize",
        "incentivize",
        "scalable",
        "disruptive",
        "bandwidth",
        "actionable",
        "deliverable",
        "deliverables",
        "ideate",
        "optimize",
        "streamline",
        "ecosystem",
    ]
    .into_iter()
    .collect()
});

/// Domain vocabulary that raises the technical complexity sub-score.
pub static TECHNICAL_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "algorithm",
        "algorithms",
        "api",
        "architecture",
        "bandwidth",
        "binary",
        "cache",
        "compiler",
        "configuration",
        "database",
        "framework",
        "function",
        "hypothesis",
        "implementation",
        "infrastructure",
        "interface",
        "latency",
        "methodology",
        "parameter",
        "parameters",
        "protocol",
        "query",
        "regression",
        "runtime",
        "server",
        "statistical",
        "syntax",
        "throughput",
        "variable",
        "variance",
    ]
    .into_iter()
    .collect()
});

/// Phrases that signal an introduction.
pub const INTRODUCTION_PHRASES: &[&str] = &[
    "introduction",
    "to begin with",
    "first of all",
    "in this essay",
    "in this article",
    "in this paper",
    "this paper",
    "we will discuss",
    "overview",
];

/// Phrases that signal a conclusion.
pub const CONCLUSION_PHRASES: &[&str] = &[
    "in conclusion",
    "to summarize",
    "in summary",
    "to conclude",
    "to sum up",
    "in closing",
    "overall",
    "finally",
];

/// Markers of a formal register.
pub const FORMAL_MARKERS: &[&str] = &[
    "therefore",
    "furthermore",
    "moreover",
    "consequently",
    "nevertheless",
    "thus",
    "hence",
    "whereas",
    "notwithstanding",
    "accordingly",
    "herein",
    "shall",
];

/// Markers of a casual register.
pub const CASUAL_MARKERS: &[&str] = &[
    "gonna", "wanna", "kinda", "sorta", "yeah", "hey", "cool", "awesome", "stuff", "lots",
    "okay", "ok", "guys", "pretty much", "a bit",
];

/// Wordy constructions counted as complex phrases.
pub const COMPLEX_PHRASES: &[&str] = &[
    "in order to",
    "due to the fact that",
    "at this point in time",
    "in the event that",
    "with regard to",
    "with respect to",
    "in spite of the fact that",
    "for the purpose of",
    "in light of the fact that",
    "it is important to note that",
    "a large number of",
    "in the near future",
    "on a daily basis",
    "at the present time",
    "has the ability to",
];

/// Irregular past participles recognised after a passive auxiliary.
pub const IRREGULAR_PARTICIPLES: &[&str] = &[
    "been", "begun", "broken", "brought", "built", "bought", "caught", "chosen", "done",
    "drawn", "driven", "eaten", "fallen", "felt", "found", "forgotten", "given", "gone",
    "grown", "heard", "held", "hidden", "kept", "known", "laid", "led", "left", "lost",
    "made", "meant", "met", "paid", "put", "read", "run", "said", "seen", "sent", "set",
    "shown", "shut", "sold", "spent", "spoken", "stolen", "struck", "taken", "taught",
    "thought", "told", "understood", "won", "worn", "written",
];
