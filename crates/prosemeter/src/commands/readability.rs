//! Readability command: Flesch Reading Ease, grade level, reading time.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use prosemeter_core::readability::{self, ReadabilityResult, ReadingTime};

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze (`-` reads stdin).
    pub file: Utf8PathBuf,

    /// Maximum acceptable Flesch-Kincaid grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,

    /// Minimum acceptable Flesch Reading Ease score.
    #[arg(long)]
    pub min_score: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ReadabilityReport {
    #[serde(flatten)]
    readability: ReadabilityResult,
    reading_time: ReadingTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_grade: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<f64>,
    pass: bool,
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_max_grade: Option<f64>,
    config_min_score: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_grade = ?args.max_grade, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let max_grade = args.max_grade.or(config_max_grade);
    let min_score = args.min_score.or(config_min_score);

    let result = readability::check_readability(&content);
    let over_grade = max_grade.is_some_and(|max| result.grade > max);
    let under_score = min_score.is_some_and(|min| result.score < min);

    let report = ReadabilityReport {
        reading_time: readability::reading_time(&content),
        readability: result,
        max_grade,
        min_score,
        pass: !over_grade && !under_score,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let r = &report.readability;
        println!(
            "{} {:.1} ({}), grade {:.1}",
            args.file.bold(),
            r.score,
            r.level,
            r.grade
        );
        let rt = &report.reading_time;
        println!(
            "  {} quick {:.0}s, medium {:.0}s, thorough {:.0}s",
            "Reading time:".cyan(),
            rt.quick_seconds,
            rt.medium_seconds,
            rt.thorough_seconds,
        );
    }

    if over_grade {
        bail!(
            "{} grade {:.1} exceeds maximum {:.1}. Shorten sentences and prefer simpler words.",
            args.file,
            report.readability.grade,
            max_grade.unwrap_or_default(),
        );
    }
    if under_score {
        bail!(
            "{} reading ease {:.1} is below minimum {:.1}.",
            args.file,
            report.readability.score,
            min_score.unwrap_or_default(),
        );
    }
    if !global_json && (max_grade.is_some() || min_score.is_some()) {
        println!("{} {}", "PASS:".green(), args.file);
    }

    Ok(())
}
