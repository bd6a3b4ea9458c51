use crate::types::{Result, ToolError};
use std::time::Duration;

/// Region parameter: worldwide, no localization.
const REGION: &str = "wt-wt";
/// Safe-search parameter: off.
const SAFE_SEARCH: &str = "-2";

/// Hit cap per search invocation. A deliberate cost and latency control,
/// not a provider limit.
pub const MAX_RESULTS: usize = 3;

/// Client for the DuckDuckGo HTML search endpoint.
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(endpoint: String, user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// Submit a query and return the raw result page. Provider or network
    /// faults surface immediately; there is no internal retry.
    pub async fn search(&self, query: &str) -> Result<String> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query), ("kl", REGION), ("kp", SAFE_SEARCH)])
            .send()
            .await
            .map_err(|e| ToolError::ExecutionError(format!("search request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| ToolError::ExecutionError(format!("search provider error: {}", e)))?;

        response
            .text()
            .await
            .map_err(|e| ToolError::ExecutionError(format!("failed to read search response: {}", e)))
    }
}
