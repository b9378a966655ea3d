//! Suggest command: improvement advice from the analysis rules.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosemeter_core::analysis::suggestions::{basic_suggestions, context_suggestions};
use prosemeter_core::analyze_bounded;

use super::analyze::print_suggestions;
use super::read_input_file;

/// Arguments for the `suggest` subcommand.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// File to review (`-` reads stdin).
    pub file: Utf8PathBuf,

    /// Only the threshold rules; skip domain, tone, and purpose advice.
    #[arg(long)]
    pub basic: bool,
}

/// Print improvement suggestions for a file.
#[instrument(name = "cmd_suggest", skip_all, fields(file = %args.file))]
pub fn cmd_suggest(
    args: SuggestArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, basic = args.basic, "executing suggest command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let analysis = analyze_bounded(&content, max_input_bytes)?;
    let mut suggestions = basic_suggestions(&content, &analysis);
    if !args.basic {
        suggestions.extend(context_suggestions(&analysis));
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        println!("{}", args.file.bold());
        print_suggestions(&suggestions);
    }

    Ok(())
}
