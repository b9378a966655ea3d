//! Type-token vocabulary diversity.

use std::collections::BTreeSet;

use crate::math::{mean, percent, ratio, round1, round2};

use super::reports::VocabularyDiversity;

/// Largest moving-TTR window.
const MAX_WINDOW: f64 = 100.0;

/// Compute basic, moving-window, and root type-token ratios.
///
/// `root_ttr` is the square root of the basic TTR percentage, not
/// `unique / sqrt(total)`.
#[tracing::instrument(skip_all)]
pub fn vocabulary_diversity(words: &[String]) -> VocabularyDiversity {
    let total = words.len();
    if total == 0 {
        return VocabularyDiversity {
            total_words: 0,
            unique_words: 0,
            basic_ttr: 0.0,
            moving_ttr: 0.0,
            root_ttr: 0.0,
            window_size: 0.0,
        };
    }

    let unique_words = words.iter().collect::<BTreeSet<_>>().len();
    let basic_ttr = round1(percent(unique_words, total));
    let window_size = MAX_WINDOW.min(total as f64 / 3.0);

    VocabularyDiversity {
        total_words: total,
        unique_words,
        basic_ttr,
        moving_ttr: round1(moving_ttr(words, window_size).unwrap_or(basic_ttr)),
        root_ttr: round2(basic_ttr.sqrt()),
        window_size: round2(window_size),
    }
}

/// Mean unique ratio over windows of `window` words, stepping by half a
/// window, as a percentage.
///
/// Window bounds are fractional and truncated when slicing. Windows that
/// truncate to nothing are skipped; `None` when every window is empty.
fn moving_ttr(words: &[String], window: f64) -> Option<f64> {
    let total = words.len() as f64;
    let stride = window / 2.0;
    if stride <= 0.0 {
        return None;
    }

    let mut ratios = Vec::new();
    let mut start = 0.0;
    while start < total - window {
        let slice = &words[start as usize..(start + window) as usize];
        if !slice.is_empty() {
            let unique = slice.iter().collect::<BTreeSet<_>>().len();
            ratios.push(ratio(unique, slice.len()));
        }
        start += stride;
    }

    if ratios.is_empty() {
        None
    } else {
        Some(mean(&ratios) * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    #[test]
    fn all_distinct_words() {
        let words: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();
        let v = vocabulary_diversity(&words);
        assert_eq!(v.unique_words, 30);
        assert_eq!(v.basic_ttr, 100.0);
        assert_eq!(v.moving_ttr, 100.0);
        assert_eq!(v.root_ttr, 10.0);
        assert_eq!(v.window_size, 10.0);
    }

    #[test]
    fn single_repeated_word() {
        let v = vocabulary_diversity(&text::words("a a a a a a"));
        assert_eq!(v.unique_words, 1);
        assert_eq!(v.basic_ttr, 16.7);
        assert_eq!(v.window_size, 2.0);
        assert_eq!(v.moving_ttr, 50.0);
        assert_eq!(v.root_ttr, 4.09);
    }

    #[test]
    fn single_word_falls_back_to_basic() {
        let v = vocabulary_diversity(&text::words("hello"));
        assert_eq!(v.basic_ttr, 100.0);
        assert_eq!(v.moving_ttr, 100.0);
        assert_eq!(v.root_ttr, 10.0);
    }

    #[test]
    fn window_caps_at_one_hundred() {
        let words: Vec<String> = (0..600).map(|i| format!("w{}", i % 50)).collect();
        let v = vocabulary_diversity(&words);
        assert_eq!(v.window_size, 100.0);
        assert_eq!(v.moving_ttr, 50.0);
        assert!(v.basic_ttr < v.moving_ttr);
    }

    #[test]
    fn empty_is_zero() {
        let v = vocabulary_diversity(&[]);
        assert_eq!(v.total_words, 0);
        assert_eq!(v.basic_ttr, 0.0);
        assert_eq!(v.moving_ttr, 0.0);
        assert_eq!(v.root_ttr, 0.0);
    }
}
