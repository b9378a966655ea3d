//! Context command: domain, tone, structure, and purpose classification.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosemeter_core::analysis::context::document_context;

use super::read_input_file;

/// Arguments for the `context` subcommand.
#[derive(Args, Debug)]
pub struct ContextArgs {
    /// File to classify (`-` reads stdin).
    pub file: Utf8PathBuf,
}

/// Classify the context of a file.
#[instrument(name = "cmd_context", skip_all, fields(file = %args.file))]
pub fn cmd_context(
    args: ContextArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing context command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let context = document_context(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&context)?);
        return Ok(());
    }

    println!(
        "{} {}",
        args.file.bold(),
        context.primary_type.as_str().cyan()
    );
    println!("  {}: {}", "Tone".dimmed(), context.tone);
    println!("  {}: {}", "Structure".dimmed(), context.structure);
    println!("  {}: {}", "Purpose".dimmed(), context.purpose);
    println!();
    for s in &context.scores {
        println!("  {:<12} {:>6.2}", s.domain.as_str(), s.score);
    }

    Ok(())
}
