//! Event scraper tool for the datacraft.paris agenda page.

use crate::clients::PageFetcher;
use crate::normalize::html;
use crate::tools::registry::Tool;
use crate::types::{Result, ToolOutput};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

/// Scrapes the fixed agenda listing page into structured event records.
///
/// Takes no arguments; the target page is part of the tool's identity.
pub struct AgendaScrapeTool {
    fetcher: Arc<PageFetcher>,
    url: String,
}

impl AgendaScrapeTool {
    pub fn new(fetcher: Arc<PageFetcher>, url: String) -> Self {
        Self { fetcher, url }
    }
}

#[async_trait]
impl Tool for AgendaScrapeTool {
    fn name(&self) -> &str {
        "parse_datacraft_events"
    }

    fn description(&self) -> &str {
        "Parse upcoming events from the datacraft.paris agenda page into \
         structured records with title, url, date, time and location"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: Value) -> Result<ToolOutput> {
        let body = self.fetcher.fetch(&self.url).await?;
        let events = html::parse_agenda(&body)?;
        tracing::debug!(count = events.len(), "scraped agenda events");
        Ok(ToolOutput::events(events))
    }
}
