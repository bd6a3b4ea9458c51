#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

// ============= Tool Catalogue Types =============

/// Advertised view of a registered tool: what the agent sees when it asks
/// which operations exist.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

// ============= Output Shapes =============

/// A single web search hit, in provider relevance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
}

/// One scraped agenda entry. All fields are required; `date` and `time`
/// stay as the locale-specific free text the source site publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub url: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

/// Normalized tool output. Every tool produces exactly one of these shapes;
/// partial results are never emitted as a success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolOutput {
    Text { text: String },
    SearchHits { hits: Vec<SearchHit> },
    Events { events: Vec<EventRecord> },
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn search_hits(hits: Vec<SearchHit>) -> Self {
        Self::SearchHits { hits }
    }

    pub fn events(events: Vec<EventRecord>) -> Self {
        Self::Events { events }
    }

    /// Flatten the output to display text, for surfaces that can only carry
    /// a single text block (the MCP content channel, CLI output).
    pub fn render_text(&self) -> String {
        match self {
            Self::Text { text } => text.clone(),
            Self::SearchHits { hits } => hits
                .iter()
                .map(|h| format!("- {} ({})", h.title, h.url))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Events { events } => serde_json::to_string_pretty(events).unwrap_or_default(),
        }
    }
}

// ============= Invocation Outcome =============

/// The outcome of one tool invocation, returned as data so the agent can
/// reason about failures (and, e.g., retry with a corrected query).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResult {
    Ok { output: ToolOutput },
    Err { kind: String, message: String },
}

impl ToolResult {
    pub fn success(output: ToolOutput) -> Self {
        Self::Ok { output }
    }

    pub fn failure(error: ToolError) -> Self {
        Self::Err {
            kind: error.kind().to_string(),
            message: error.message().to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

// ============= Error Types =============

/// Everything that can go wrong during a tool invocation. External faults
/// are converted into one of these at the tool-handler boundary; nothing
/// crosses the dispatcher unconverted.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("timed out: {0}")]
    Timeout(String),

    #[error("execution error: {0}")]
    ExecutionError(String),

    #[error("parse error: {0}")]
    ParseError(String),
}

impl ToolError {
    /// Stable machine-readable tag for this error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::InvalidInput(_) => "invalid_input",
            Self::Timeout(_) => "timeout",
            Self::ExecutionError(_) => "execution_error",
            Self::ParseError(_) => "parse_error",
        }
    }

    /// The bare message, without the error-class prefix. External engine and
    /// provider messages pass through here verbatim.
    pub fn message(&self) -> &str {
        match self {
            Self::UnknownTool(m)
            | Self::InvalidInput(m)
            | Self::Timeout(m)
            | Self::ExecutionError(m)
            | Self::ParseError(m) => m,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_stable() {
        let cases = [
            (ToolError::UnknownTool("x".into()), "unknown_tool"),
            (ToolError::InvalidInput("x".into()), "invalid_input"),
            (ToolError::Timeout("x".into()), "timeout"),
            (ToolError::ExecutionError("x".into()), "execution_error"),
            (ToolError::ParseError("x".into()), "parse_error"),
        ];
        for (err, kind) in cases {
            assert_eq!(err.kind(), kind);
        }
    }

    #[test]
    fn test_failure_preserves_message_verbatim() {
        let engine_msg = "near \"SELEC\": syntax error";
        let result = ToolResult::failure(ToolError::ExecutionError(engine_msg.to_string()));
        match result {
            ToolResult::Err { kind, message } => {
                assert_eq!(kind, "execution_error");
                assert_eq!(message, engine_msg);
            }
            ToolResult::Ok { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn test_tool_result_serialization_is_tagged() {
        let ok = ToolResult::success(ToolOutput::text("hello"));
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["output"]["type"], "text");
        assert_eq!(json["output"]["text"], "hello");

        let err = ToolResult::failure(ToolError::UnknownTool("nope".into()));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["status"], "err");
        assert_eq!(json["kind"], "unknown_tool");
    }

    #[test]
    fn test_render_text_search_hits() {
        let output = ToolOutput::search_hits(vec![SearchHit {
            title: "Datacraft".into(),
            url: "https://datacraft.paris".into(),
        }]);
        assert_eq!(output.render_text(), "- Datacraft (https://datacraft.paris)");
    }
}
