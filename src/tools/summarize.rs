//! Page summarizer tool: fetch a URL and extract a readable text preview.

use crate::clients::PageFetcher;
use crate::normalize::html;
use crate::tools::registry::Tool;
use crate::types::{Result, ToolError, ToolOutput};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::{json, Value};
use std::sync::Arc;

/// Preview length in lines, applied after visible-text line splitting.
const MAX_PREVIEW_LINES: usize = 60;

/// Successful result when a page has no extractable text. Absence of
/// content is a valid outcome, not a failure.
const EMPTY_PAGE_NOTICE: &str = "No readable content found.";

pub struct SummarizeUrlTool {
    fetcher: Arc<PageFetcher>,
}

impl SummarizeUrlTool {
    pub fn new(fetcher: Arc<PageFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Tool for SummarizeUrlTool {
    fn name(&self) -> &str {
        "summarize_url"
    }

    fn description(&self) -> &str {
        "Download a public webpage and return its readable text content, \
         capped to a short preview suitable for summarization"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "A valid HTTP or HTTPS URL pointing to a public webpage"
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let url = args
            .get("url")
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::InvalidInput("missing 'url' parameter".to_string()))?;

        // Scheme gate before any network I/O: file:, data: and friends
        // must never reach the fetcher.
        let parsed = Url::parse(url)
            .map_err(|e| ToolError::InvalidInput(format!("invalid url '{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ToolError::InvalidInput(format!(
                "unsupported url scheme '{}': only http and https are allowed",
                parsed.scheme()
            )));
        }

        let body = self.fetcher.fetch(url).await?;
        let preview = html::text_preview(&body, MAX_PREVIEW_LINES);

        if preview.is_empty() {
            Ok(ToolOutput::text(EMPTY_PAGE_NOTICE))
        } else {
            Ok(ToolOutput::text(preview))
        }
    }
}
