use crate::types::{Result, ToolError};
use std::time::Duration;

/// HTTP page fetcher with a browser-like identity and a fixed timeout.
///
/// Non-2xx responses are failures before any body parsing happens; the
/// status ends up in the error message so the caller can decide whether a
/// different URL is worth trying.
pub struct PageFetcher {
    http: reqwest::Client,
}

impl PageFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ToolError::ExecutionError(format!("request to {} failed: {}", url, e)))?
            .error_for_status()
            .map_err(|e| ToolError::ExecutionError(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| ToolError::ExecutionError(format!("failed to read body of {}: {}", url, e)))
    }
}
