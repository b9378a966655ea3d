//! Development tasks for prosemeter.
//!
//! `cargo xtask man` writes man pages; `cargo xtask completions` writes shell
//! completion scripts. Both derive from the CLI definition in `prosemeter`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "xtask")]
#[command(about = "Development tasks for prosemeter", long_about = None)]
struct XtaskCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate man pages for the CLI and every subcommand
    Man(OutArgs),
    /// Generate shell completion scripts
    Completions(CompletionArgs),
}

#[derive(Args, Debug)]
struct OutArgs {
    /// Output directory
    #[arg(long, default_value = "target/man")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct CompletionArgs {
    /// Output directory
    #[arg(long, default_value = "target/completions")]
    out_dir: PathBuf,

    /// Shells to generate for (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    shell: Vec<Shell>,
}

fn main() -> Result<()> {
    match XtaskCli::parse().command {
        Commands::Man(args) => man(&args.out_dir),
        Commands::Completions(args) => completions(&args.out_dir, &args.shell),
    }
}

fn man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("failed to create {}", out_dir.display()))?;
    let cmd = prosemeter::command();

    clap_mangen::generate_to(cmd, out_dir)
        .with_context(|| format!("failed to write man pages to {}", out_dir.display()))?;
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn completions(out_dir: &Path, shells: &[Shell]) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("failed to create {}", out_dir.display()))?;
    let shells = if shells.is_empty() {
        &[Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish][..]
    } else {
        shells
    };

    let mut cmd = prosemeter::command();
    for &shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, "prosemeter", out_dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("{}", path.display());
    }
    Ok(())
}
