//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use prosemeter_core::Config;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // Transport is always stdio; no options yet.
}

/// Run the MCP server until the client disconnects.
///
/// Logs go to stderr (and the log file, if configured); stdout carries the
/// protocol.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!(
        max_input_bytes = ?max_input_bytes,
        log_level = config.log_level.as_str(),
        "starting MCP server on stdio"
    );

    let service = ProjectServer::new(max_input_bytes)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server terminated abnormally")?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
