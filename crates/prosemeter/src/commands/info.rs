//! Info command: package metadata and the settings the other commands will use.

use clap::Args;
use owo_colors::OwoColorize;
use prosemeter_core::config::{Config, ConfigSources, user_config_dir};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

/// Aspects reported by `analyze`, in output order.
const ASPECTS: &[&str] = &[
    "statistics",
    "readability",
    "reading time",
    "complexity",
    "lexical density",
    "vocabulary",
    "structure",
    "sentence variety",
    "style",
    "sentiment",
    "cohesion",
    "argument",
    "topic sentences",
    "openings",
    "context",
    "suggestions",
];

#[derive(Serialize)]
struct InfoReport {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    config: Effective,
    aspects: &'static [&'static str],
}

/// Configuration after every source has been merged.
#[derive(Serialize)]
struct Effective {
    config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    /// `None` when the limit is disabled.
    input_limit: Option<usize>,
    gates: Gates,
}

#[derive(Serialize)]
struct Gates {
    min_overall_score: Option<u32>,
    max_grade: Option<f64>,
    min_readability: Option<f64>,
}

impl InfoReport {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            config: Effective {
                config_file: sources.primary_file().map(ToString::to_string),
                user_config_dir: user_config_dir().map(|p| p.to_string()),
                log_level: config.log_level.as_str(),
                log_dir: config.log_dir.as_ref().map(ToString::to_string),
                input_limit: config.input_limit(),
                gates: Gates {
                    min_overall_score: config.min_overall_score,
                    max_grade: config.max_grade,
                    min_readability: config.min_readability,
                },
            },
            aspects: ASPECTS,
        }
    }
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json = global_json, "executing info command");
    let report = InfoReport::new(config, sources);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", report.name.bold(), report.version.green());
    println!("{}", report.description);
    if !report.repository.is_empty() {
        println!("{}", report.repository.cyan());
    }

    let cfg = &report.config;
    println!("\n{}", "Settings".bold().underline());
    row(
        "config file",
        cfg.config_file.as_deref().unwrap_or("none (defaults)"),
    );
    if let Some(ref dir) = cfg.user_config_dir {
        row("user config dir", dir);
    }
    row("log level", cfg.log_level);
    row("log dir", cfg.log_dir.as_deref().unwrap_or("stderr only"));
    row(
        "input limit",
        &cfg.input_limit.map_or_else(|| "disabled".to_string(), human_bytes),
    );

    println!("\n{}", "Quality gates".bold().underline());
    row("analyze --min-score", &gate(cfg.gates.min_overall_score));
    row("readability --max-grade", &gate(cfg.gates.max_grade));
    row("readability --min-score", &gate(cfg.gates.min_readability));

    println!("\n{}", "Analyze reports".bold().underline());
    println!("  {}", report.aspects.join(", "));

    Ok(())
}

fn row(label: &str, value: &str) {
    println!("  {:<26}{}", label.dimmed(), value);
}

fn gate<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "off".to_string(), |v| v.to_string())
}

/// `5242880` -> `5.0 MiB`.
fn human_bytes(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b >= KIB * KIB {
        format!("{:.1} MiB", b / (KIB * KIB))
    } else if b >= KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{bytes} bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosemeter_core::DEFAULT_MAX_INPUT_BYTES;

    #[test]
    fn prints_text_and_json() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), false, &config, &sources).is_ok());
        assert!(cmd_info(InfoArgs::default(), true, &config, &sources).is_ok());
    }

    #[test]
    fn defaults_report_no_gates() {
        let report = InfoReport::new(&Config::default(), &ConfigSources::default());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["config"]["config_file"].is_null());
        assert_eq!(json["config"]["log_level"], "info");
        assert_eq!(json["config"]["input_limit"], DEFAULT_MAX_INPUT_BYTES);
        assert!(json["config"]["gates"]["min_overall_score"].is_null());
        assert_eq!(json["aspects"].as_array().map(Vec::len), Some(ASPECTS.len()));
    }

    #[test]
    fn gates_and_disabled_limit_flow_through() {
        let config = Config {
            disable_input_limit: true,
            min_overall_score: Some(60),
            max_grade: Some(9.5),
            ..Config::default()
        };
        let report = InfoReport::new(&config, &ConfigSources::default());
        assert_eq!(report.config.input_limit, None);
        assert_eq!(report.config.gates.min_overall_score, Some(60));
        assert_eq!(report.config.gates.max_grade, Some(9.5));
        assert_eq!(gate(report.config.gates.min_readability), "off");
    }

    #[test]
    fn byte_sizes_are_humanized() {
        assert_eq!(human_bytes(DEFAULT_MAX_INPUT_BYTES), "5.0 MiB");
        assert_eq!(human_bytes(2048), "2.0 KiB");
        assert_eq!(human_bytes(16), "16 bytes");
    }
}
