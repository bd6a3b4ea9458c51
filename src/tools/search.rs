//! Web search tool.

use crate::clients::search::{SearchClient, MAX_RESULTS};
use crate::normalize::html;
use crate::tools::registry::Tool;
use crate::types::{Result, ToolError, ToolOutput};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

/// Searches the web and returns the top hits with title and URL.
///
/// Zero hits is a valid (empty) success, not a failure.
pub struct WebSearchTool {
    client: Arc<SearchClient>,
}

impl WebSearchTool {
    pub fn new(client: Arc<SearchClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the web using DuckDuckGo and return the top 3 results with title and URL"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query to submit to the search engine"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let query = args
            .get("query")
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::InvalidInput("missing 'query' parameter".to_string()))?;

        let page = self.client.search(query).await?;
        let hits = html::parse_search_results(&page, MAX_RESULTS);
        Ok(ToolOutput::search_hits(hits))
    }
}
