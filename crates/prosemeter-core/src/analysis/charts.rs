//! Chart-ready projections of an analysis.

use crate::math::round2;

use super::reports::{ChartSeries, DocumentAnalysis, LabeledValue};

fn point(label: impl Into<String>, value: f64) -> LabeledValue {
    LabeledValue {
        label: label.into(),
        value,
    }
}

/// Project an analysis into chart series.
pub fn chart_series(analysis: &DocumentAnalysis) -> ChartSeries {
    let rt = &analysis.reading_time;
    let cx = &analysis.complexity;

    ChartSeries {
        reading_time: vec![
            point("Quick", rt.quick_percent),
            point("Medium", rt.medium_percent),
            point("Thorough", rt.thorough_percent),
        ],
        complexity: vec![
            point("Vocabulary", cx.vocabulary),
            point("Sentence Length", cx.sentence_length),
            point("Structure", cx.structure),
            point("Readability", cx.readability),
            point("Technical", cx.technical),
        ],
        lexical_split: lexical_split(analysis),
        style_evolution: style_evolution(&analysis.structure.paragraph_sentence_lengths),
    }
}

fn lexical_split(analysis: &DocumentAnalysis) -> [f64; 2] {
    let ld = &analysis.lexical_density;
    if ld.total == 0 {
        return [50.0, 50.0];
    }
    [ld.density, round2(100.0 - ld.density)]
}

/// Label each paragraph `P1..Pn`. A single point is repeated and an empty
/// series becomes two zeros, so a trend line always has two ends.
fn style_evolution(lengths: &[f64]) -> Vec<LabeledValue> {
    let mut series: Vec<LabeledValue> = lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| point(format!("P{}", i + 1), len))
        .collect();

    while series.len() < 2 {
        let value = series.last().map_or(0.0, |p| p.value);
        series.push(point(format!("P{}", series.len() + 1), value));
    }
    series
}
