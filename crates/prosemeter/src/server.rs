//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes the analyzers over the MCP protocol, making them
//! available to AI assistants via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library that
//! the CLI commands use. Each `#[tool]` method checks the input size, delegates
//! to a core function, and returns the record as pretty JSON text.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use prosemeter_core::analysis::charts::chart_series;
use prosemeter_core::analysis::context::document_context;
use prosemeter_core::analysis::sentiment::analyze_sentiment;
use prosemeter_core::analysis::suggestions::{basic_suggestions, context_suggestions};
use prosemeter_core::{DocumentAnalysis, analyze_bounded, check_input_size, readability, text};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for tools that take only text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to analyze.
    pub text: String,
}

/// Parameters for the `analyze_document` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeDocumentParams {
    /// The text to analyze.
    pub text: String,
    /// Also return chart-ready series.
    #[serde(default)]
    pub charts: bool,
}

/// Parameters for the `check_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckReadabilityParams {
    /// The text to analyze.
    pub text: String,
    /// Maximum acceptable Flesch-Kincaid grade level.
    pub max_grade: Option<f64>,
}

/// Parameters for the `suggest_improvements` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SuggestParams {
    /// The text to review.
    pub text: String,
    /// Only threshold rules; skip domain, tone, and purpose advice.
    #[serde(default)]
    pub basic_only: bool,
}

/// MCP server exposing the analyzers to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(Some(prosemeter_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

impl ProjectServer {
    /// Reject oversize input as invalid params.
    fn check_size(&self, text: &str) -> Result<(), McpError> {
        check_input_size(text, self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    /// Full analysis of size-checked input.
    fn analyze(&self, text: &str) -> Result<DocumentAnalysis, McpError> {
        analyze_bounded(text, self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance. `None` disables the input limit.
    pub fn new(max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        if params.format == "json" {
            return to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }));
        }
        let text = format!(
            "{} v{}\n{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full analysis.
    #[tool(
        description = "Analyze writing quality: statistics, readability, complexity, vocabulary, structure, sentence variety, style, sentiment, cohesion, argument strength, topic sentences, openings, context, overall score, and suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_document(
        &self,
        Parameters(params): Parameters<AnalyzeDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        let analysis = self.analyze(&params.text)?;
        tracing::info!(
            tool = "analyze_document",
            overall = analysis.overall_score,
            "MCP tool completed"
        );
        if params.charts {
            return to_json(&serde_json::json!({
                "analysis": analysis,
                "charts": chart_series(&analysis),
            }));
        }
        to_json(&analysis)
    }

    /// Flesch scores and reading time.
    #[tool(
        description = "Check readability. Returns Flesch Reading Ease, Flesch-Kincaid grade, level label, reading time, and an optional max-grade check."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<CheckReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let result = readability::check_readability(&params.text);
        let over_max = params.max_grade.is_some_and(|max| result.grade > max);
        tracing::info!(tool = "check_readability", grade = result.grade, "MCP tool completed");
        to_json(&serde_json::json!({
            "score": result.score,
            "grade": result.grade,
            "level": result.level,
            "reading_time": readability::reading_time(&params.text),
            "max_grade": params.max_grade,
            "over_max": over_max,
        }))
    }

    /// Sentiment analysis.
    #[tool(
        description = "Analyze sentiment with negation and intensifier handling. Returns a label, a 0-100 score, and per-sentence scores."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_sentiment(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let result = analyze_sentiment(&text::sentences(&params.text));
        tracing::info!(tool = "analyze_sentiment", label = %result.label, "MCP tool completed");
        to_json(&result)
    }

    /// Context classification.
    #[tool(
        description = "Classify the document domain (technical, academic, business, creative, scientific, legal, educational), tone, structure, and purpose."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn classify_context(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let context = document_context(&params.text);
        tracing::info!(tool = "classify_context", domain = %context.primary_type, "MCP tool completed");
        to_json(&context)
    }

    /// Improvement suggestions.
    #[tool(description = "Suggest improvements based on readability, structure, voice, length, and document context.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn suggest_improvements(
        &self,
        Parameters(params): Parameters<SuggestParams>,
    ) -> Result<CallToolResult, McpError> {
        let analysis = self.analyze(&params.text)?;
        let mut suggestions = basic_suggestions(&params.text, &analysis);
        if !params.basic_only {
            suggestions.extend(context_suggestions(&analysis));
        }
        tracing::info!(
            tool = "suggest_improvements",
            count = suggestions.len(),
            "MCP tool completed"
        );
        to_json(&suggestions)
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use tools to measure readability, sentiment, context, and overall writing quality.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
