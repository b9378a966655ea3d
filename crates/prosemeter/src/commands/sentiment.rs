//! Sentiment command: lexicon-based polarity with negation and intensifiers.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosemeter_core::analysis::reports::SentimentLabel;
use prosemeter_core::analysis::sentiment::analyze_sentiment;
use prosemeter_core::text;

use super::read_input_file;

/// Arguments for the `sentiment` subcommand.
#[derive(Args, Debug)]
pub struct SentimentArgs {
    /// File to analyze (`-` reads stdin).
    pub file: Utf8PathBuf,

    /// Also list per-sentence scores.
    #[arg(long)]
    pub sentences: bool,
}

/// Score sentiment of a file.
#[instrument(name = "cmd_sentiment", skip_all, fields(file = %args.file))]
pub fn cmd_sentiment(
    args: SentimentArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing sentiment command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let result = analyze_sentiment(&text::sentences(&content));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let label = match result.label {
        SentimentLabel::VeryPositive | SentimentLabel::Positive => result.label.green().to_string(),
        SentimentLabel::Neutral => result.label.to_string(),
        SentimentLabel::Negative | SentimentLabel::VeryNegative => result.label.red().to_string(),
    };
    println!(
        "{} {} ({:.0}/100)",
        args.file.bold(),
        label,
        result.normalized_score
    );

    if args.sentences {
        for s in &result.sentences {
            println!("  {:>6.2}  {}", s.score, s.text.dimmed());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prints_sentiment() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.txt");
        fs::write(&path, "This is wonderful. I love it.").unwrap();
        let args = SentimentArgs {
            file: Utf8PathBuf::try_from(path).unwrap(),
            sentences: true,
        };
        assert!(cmd_sentiment(args, false, None).is_ok());
    }
}
