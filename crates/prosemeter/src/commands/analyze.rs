//! Analyze command: full writing-quality analysis.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use prosemeter_core::analysis::charts::chart_series;
use prosemeter_core::analysis::reports::ChartSeries;
use prosemeter_core::{DocumentAnalysis, analyze_bounded};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Files to analyze (`-` reads stdin).
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<Utf8PathBuf>,

    /// Minimum acceptable overall writing score (0–100).
    #[arg(long)]
    pub min_score: Option<u32>,

    /// Also print improvement suggestions.
    #[arg(long)]
    pub suggestions: bool,

    /// Include chart-ready series in JSON output.
    #[arg(long)]
    pub charts: bool,
}

/// One analyzed file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Input path as given.
    pub file: String,
    /// The analysis.
    #[serde(flatten)]
    pub analysis: DocumentAnalysis,
    /// Chart projection, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<ChartSeries>,
}

/// Analyze one or more files.
#[instrument(name = "cmd_analyze", skip_all, fields(files = args.files.len()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_score: Option<u32>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, min_score = ?args.min_score, "executing analyze command");

    let min_score = args.min_score.or(config_min_score);
    let progress = progress_bar(args.files.len(), global_json)?;

    let mut reports = Vec::with_capacity(args.files.len());
    for file in &args.files {
        if let Some(ref pb) = progress {
            pb.set_message(file.to_string());
        }
        let content = read_input_file(file, max_input_bytes)?;
        let analysis = analyze_bounded(&content, max_input_bytes)?;
        let charts = args.charts.then(|| chart_series(&analysis));
        reports.push(FileReport {
            file: file.to_string(),
            analysis,
            charts,
        });
        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if global_json {
        let json = match reports.as_slice() {
            [single] => serde_json::to_string_pretty(single)?,
            many => serde_json::to_string_pretty(many)?,
        };
        println!("{json}");
    } else {
        for report in &reports {
            print_report(report, args.suggestions);
        }
    }

    if let Some(min) = min_score {
        let failing: Vec<String> = reports
            .iter()
            .filter(|r| r.analysis.overall_score < min)
            .map(|r| format!("{} ({})", r.file, r.analysis.overall_score))
            .collect();
        if !failing.is_empty() {
            bail!(
                "overall score below minimum {min}: {}. Run with --suggestions for advice.",
                failing.join(", ")
            );
        }
    }

    Ok(())
}

fn progress_bar(files: usize, json: bool) -> anyhow::Result<Option<ProgressBar>> {
    if files < 2 || json {
        return Ok(None);
    }
    let pb = ProgressBar::new(files as u64);
    pb.set_style(ProgressStyle::with_template(
        "{spinner:.cyan} [{bar:30.cyan/dim}] {pos}/{len} {msg}",
    )?);
    Ok(Some(pb))
}

fn colored_score(score: u32) -> String {
    if score >= 70 {
        score.green().to_string()
    } else if score >= 50 {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    }
}

fn print_report(report: &FileReport, with_suggestions: bool) {
    let a = &report.analysis;
    println!(
        "{}  overall {}/100",
        report.file.bold(),
        colored_score(a.overall_score)
    );

    let st = &a.statistics;
    println!(
        "\n  {} {} words, {} sentences, {} paragraphs",
        "Statistics:".cyan(),
        st.word_count,
        st.sentence_count,
        st.paragraph_count,
    );

    println!(
        "  {} {:.1} ({}), grade {:.1}, ~{:.0}s to read",
        "Readability:".cyan(),
        a.readability.score,
        a.readability.level,
        a.readability.grade,
        a.reading_time.adjusted_seconds,
    );

    let cx = &a.complexity;
    println!(
        "  {} vocabulary {:.1}, sentence length {:.1}, structure {:.1}, technical {:.1}",
        "Complexity:".cyan(),
        cx.vocabulary,
        cx.sentence_length,
        cx.structure,
        cx.technical,
    );

    println!(
        "  {} density {:.1}%, TTR {:.1}%, moving TTR {:.1}%",
        "Vocabulary:".cyan(),
        a.lexical_density.density,
        a.vocabulary.basic_ttr,
        a.vocabulary.moving_ttr,
    );

    println!(
        "  {} {} sections, {} list items, intro {}, conclusion {}",
        "Structure:".cyan(),
        a.structure.section_count,
        a.structure.list_count,
        yes_no(a.structure.has_introduction),
        yes_no(a.structure.has_conclusion),
    );

    println!(
        "  {} score {}/100, mean {:.1} words (σ {:.1})",
        "Variety:".cyan(),
        a.sentence_variety.variety_score,
        a.sentence_variety.mean_length,
        a.sentence_variety.std_deviation,
    );

    println!(
        "  {} {} tone, {} passive, {} long sentences, {} wordy phrases",
        "Style:".cyan(),
        a.style.tone,
        a.style.passive_voice_count,
        a.style.long_sentence_count,
        a.style.complex_phrase_count,
    );
    if !a.style.repeated_words.is_empty() {
        let top: Vec<String> = a
            .style
            .repeated_words
            .iter()
            .map(|w| format!("\"{}\" ×{}", w.word, w.count))
            .collect();
        println!("  {} {}", "Repeated:".yellow(), top.join(", "));
    }

    println!(
        "  {} {} ({:.0})",
        "Sentiment:".cyan(),
        a.sentiment.label,
        a.sentiment.normalized_score,
    );

    println!(
        "  {} evidence {}, logic {}, support {}, impact {}",
        "Argument:".cyan(),
        a.argument.evidence,
        a.argument.logic,
        a.argument.support,
        a.argument.impact,
    );

    println!(
        "  {} {:.1}, openings {:.1}",
        "Topic sentences:".cyan(),
        a.topic_sentences.document_score,
        a.openings.pattern_score,
    );

    println!(
        "  {} {} ({} tone, {}, {})",
        "Context:".cyan(),
        a.context.primary_type,
        a.context.tone,
        a.context.structure,
        a.context.purpose,
    );

    if with_suggestions {
        print_suggestions(&a.suggestions);
    }
    println!();
}

/// Print a numbered suggestion list.
pub fn print_suggestions(suggestions: &[prosemeter_core::analysis::reports::Suggestion]) {
    if suggestions.is_empty() {
        println!("\n  {}", "No suggestions.".green());
        return;
    }
    println!("\n  {}", "Suggestions:".bold());
    for (i, s) in suggestions.iter().enumerate() {
        println!("  {}. {}: {}", i + 1, s.title.bold(), s.content);
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(files: Vec<Utf8PathBuf>) -> AnalyzeArgs {
        AnalyzeArgs {
            files,
            min_score: None,
            suggestions: true,
            charts: false,
        }
    }

    fn doc(tmp: &TempDir, name: &str, body: &str) -> Utf8PathBuf {
        let path = tmp.path().join(name);
        fs::write(&path, body).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn analyzes_text_output() {
        let tmp = TempDir::new().unwrap();
        let path = doc(&tmp, "a.txt", "The cat sat. The cat ran.");
        assert!(cmd_analyze(args(vec![path]), false, None, None).is_ok());
    }

    #[test]
    fn min_score_gate_fails() {
        let tmp = TempDir::new().unwrap();
        let path = doc(&tmp, "a.txt", "The cat sat. The cat ran.");
        let err = cmd_analyze(args(vec![path]), true, Some(99), None).unwrap_err();
        assert!(err.to_string().contains("below minimum 99"));
    }

    #[test]
    fn flag_overrides_config_gate() {
        let tmp = TempDir::new().unwrap();
        let path = doc(&tmp, "a.txt", "The cat sat. The cat ran.");
        let mut a = args(vec![path]);
        a.min_score = Some(10);
        assert!(cmd_analyze(a, true, Some(99), None).is_ok());
    }

    #[test]
    fn respects_input_limit() {
        let tmp = TempDir::new().unwrap();
        let path = doc(&tmp, "a.txt", "The cat sat. The cat ran.");
        assert!(cmd_analyze(args(vec![path]), true, None, Some(5)).is_err());
    }

    #[test]
    fn file_report_flattens_analysis() {
        let analysis = prosemeter_core::analyze_document("The cat sat.");
        let report = FileReport {
            file: "a.txt".to_string(),
            charts: Some(chart_series(&analysis)),
            analysis,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["file"], "a.txt");
        assert!(json["statistics"].is_object());
        assert!(json["charts"]["lexical_split"].is_array());
    }
}
