//! Logging setup for the binary.
//!
//! Human-readable events go to stderr; stdout stays reserved for command
//! output (and for the MCP transport under `serve`). When a log directory or
//! file is configured, a JSONL layer writes to a daily-rolling file as well.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default file name for the JSONL log.
const DEFAULT_LOG_FILE: &str = "prosemeter.jsonl";

/// Where (if anywhere) to write the JSONL log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory for the rolling log file.
    pub log_dir: Option<PathBuf>,
    /// File name inside `log_dir`.
    pub file_name: String,
}

impl ObservabilityConfig {
    /// Resolve the log target.
    ///
    /// `PROSEMETER_LOG_PATH` wins, then `PROSEMETER_LOG_DIR`, then the
    /// configured `log_dir`. No file logging when none is set.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os("PROSEMETER_LOG_PATH").map(PathBuf::from),
            std::env::var_os("PROSEMETER_LOG_DIR").map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path {
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_LOG_FILE)
                .to_string();
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(dir),
                file_name,
            };
        }

        Self {
            log_dir: env_dir.or(config_dir),
            file_name: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

/// Build the event filter.
///
/// `RUST_LOG` takes precedence. Otherwise `-q` means errors only, and each
/// `-v` raises the level one step above the configured one, up to `trace`.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(filter_directive(quiet, verbose, config_level))
}

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn filter_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    if verbose == 0 {
        return config_level;
    }
    let base = LEVELS
        .iter()
        .position(|level| *level == config_level)
        .unwrap_or(2);
    LEVELS[(base + usize::from(verbose)).min(LEVELS.len() - 1)]
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must live as long
/// as the process.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let Some(ref dir) = config.log_dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, &config.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(Some(guard))
}
