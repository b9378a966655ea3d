//! Sentence-opening variety.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::math::{clamp_score, percent, round1};
use crate::text;
use crate::word_lists::GOOD_TRANSITIONS;

use super::reports::{OpeningCategory, OpeningShare, OpeningVariety};

/// First-word patterns in priority order; the first match wins.
static CATEGORY_PATTERNS: LazyLock<Vec<(OpeningCategory, Regex)>> = LazyLock::new(|| {
    [
        (
            OpeningCategory::Subject,
            r"^(?:i|you|he|she|it|we|they|the|a|an|this|that|these|those|my|our|your|their|his|her|its|there|one|people)$",
        ),
        (
            OpeningCategory::Action,
            r"^(?:\w+ing|consider|imagine|note|remember|use|take|make|let|try|start|look)$",
        ),
        (
            OpeningCategory::Question,
            r"^(?:what|why|how|when|where|who|which|whose|is|are|do|does|did|can|could|should|would|will)$",
        ),
        (
            OpeningCategory::Transition,
            r"^(?:however|therefore|moreover|furthermore|additionally|consequently|meanwhile|nevertheless|similarly|finally|first|second|third|next|then|thus|hence|also|instead)$",
        ),
        (
            OpeningCategory::Description,
            r"^(?:\w+ly|many|several|most|some|few|new|old|large|small|important|beautiful|bright|dark)$",
        ),
        (
            OpeningCategory::Prepositional,
            r"^(?:in|on|at|by|with|from|to|for|of|about|after|before|during|under|over|through|between|among|without|within|despite|across|behind|beyond)$",
        ),
        (
            OpeningCategory::Conjunction,
            r"^(?:and|but|or|nor|so|yet|because|although|though|while|since|unless|if)$",
        ),
    ]
    .into_iter()
    .map(|(category, pattern)| (category, Regex::new(pattern).expect("valid regex")))
    .collect()
});

/// Share above which a single category starts costing pattern quality.
const CONCENTRATION_LIMIT: f64 = 30.0;

/// Classify a lowercase first word.
pub fn categorize(first_word: &str) -> OpeningCategory {
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(first_word))
        .map_or(OpeningCategory::Other, |(category, _)| *category)
}

/// Measure how varied sentence openings are.
///
/// Sentences without any word are ignored.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn opening_variety(sentences: &[String]) -> OpeningVariety {
    let openings: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| text::words(s).into_iter().take(3).collect::<Vec<_>>())
        .filter(|w| !w.is_empty())
        .collect();
    let total = openings.len();
    if total == 0 {
        return OpeningVariety {
            sentence_count: 0,
            unique_word_ratio: 0.0,
            unique_phrase_ratio: 0.0,
            categories: Vec::new(),
            distribution: Vec::new(),
            pattern_score: 0.0,
            transition_score: 0.0,
        };
    }

    let first_words: Vec<&str> = openings.iter().map(|w| w[0].as_str()).collect();
    let unique_words = first_words.iter().collect::<BTreeSet<_>>().len();
    let unique_phrases = openings
        .iter()
        .map(|w| w.join(" "))
        .collect::<BTreeSet<_>>()
        .len();

    let categories: Vec<OpeningCategory> = first_words.iter().map(|w| categorize(w)).collect();
    let mut counts: BTreeMap<OpeningCategory, usize> = BTreeMap::new();
    for category in &categories {
        *counts.entry(*category).or_insert(0) += 1;
    }
    let distribution: Vec<OpeningShare> = OpeningCategory::ALL
        .iter()
        .filter_map(|category| {
            counts.get(category).map(|&count| OpeningShare {
                category: *category,
                count,
                percentage: round1(percent(count, total)),
            })
        })
        .collect();

    let adjacent_repeats = categories.windows(2).filter(|p| p[0] == p[1]).count();
    let concentration: f64 = counts
        .values()
        .map(|&count| percent(count, total))
        .filter(|&share| share > CONCENTRATION_LIMIT)
        .map(|share| share - CONCENTRATION_LIMIT)
        .sum();
    let pattern_score = clamp_score(100.0 - adjacent_repeats as f64 * 5.0 - concentration);

    let repeated_words = total - unique_words;
    let good_transitions = first_words
        .iter()
        .filter(|w| GOOD_TRANSITIONS.contains(**w))
        .count();
    let transition_score = clamp_score(
        100.0 - repeated_words as f64 * 10.0 - adjacent_repeats as f64 * 5.0
            + good_transitions as f64 * 5.0,
    );

    OpeningVariety {
        sentence_count: total,
        unique_word_ratio: round1(percent(unique_words, total)),
        unique_phrase_ratio: round1(percent(unique_phrases, total)),
        categories,
        distribution,
        pattern_score: round1(pattern_score),
        transition_score: round1(transition_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variety(input: &str) -> OpeningVariety {
        opening_variety(&text::sentences(input))
    }

    #[test]
    fn categories_in_priority_order() {
        assert_eq!(categorize("the"), OpeningCategory::Subject);
        assert_eq!(categorize("running"), OpeningCategory::Action);
        assert_eq!(categorize("why"), OpeningCategory::Question);
        assert_eq!(categorize("however"), OpeningCategory::Transition);
        assert_eq!(categorize("quietly"), OpeningCategory::Description);
        assert_eq!(categorize("during"), OpeningCategory::Prepositional);
        assert_eq!(categorize("because"), OpeningCategory::Conjunction);
        assert_eq!(categorize("elephants"), OpeningCategory::Other);
    }

    #[test]
    fn repetitive_openings_are_penalized() {
        let v = variety("The cat sat. The cat ran. The cat ate.");
        assert_eq!(v.sentence_count, 3);
        assert_eq!(v.unique_word_ratio, 33.3);
        assert_eq!(v.unique_phrase_ratio, 100.0);
        assert_eq!(v.distribution.len(), 1);
        assert_eq!(v.distribution[0].percentage, 100.0);
        // 100 - 2 adjacent repeats * 5 - (100 - 30)
        assert_eq!(v.pattern_score, 20.0);
        // 100 - 2 repeated words * 10 - 2 * 5
        assert_eq!(v.transition_score, 70.0);
    }

    #[test]
    fn varied_openings_score_well() {
        let v = variety(
            "The storm arrived. However, we were ready. During the night, rain fell. \
             Why did it last so long? Running water flooded the street.",
        );
        assert_eq!(v.unique_word_ratio, 100.0);
        assert_eq!(v.distribution.len(), 5);
        assert_eq!(v.pattern_score, 100.0);
        // One good transition opener: capped at 100.
        assert_eq!(v.transition_score, 100.0);
    }

    #[test]
    fn distribution_follows_category_order() {
        let v = variety("Because it rained. The end.");
        let order: Vec<OpeningCategory> = v.distribution.iter().map(|d| d.category).collect();
        assert_eq!(
            order,
            vec![OpeningCategory::Subject, OpeningCategory::Conjunction]
        );
        assert_eq!(
            v.categories,
            vec![OpeningCategory::Conjunction, OpeningCategory::Subject]
        );
    }

    #[test]
    fn empty_input() {
        let v = opening_variety(&[]);
        assert_eq!(v.sentence_count, 0);
        assert!(v.distribution.is_empty());
        assert_eq!(v.pattern_score, 0.0);
    }
}
