//! SQL query tool for the `evenements` table.

use crate::db::EventStore;
use crate::normalize::rows;
use crate::tools::registry::Tool;
use crate::types::{Result, ToolError, ToolOutput};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

/// Upper bound on rows read per statement. Agent-authored queries carry no
/// LIMIT guarantee; the cap plus the dispatcher budget bound their cost.
const MAX_QUERY_ROWS: usize = 500;

/// Runs agent-authored SQL verbatim against the event store and returns the
/// rows as plain tuple-per-line text.
pub struct EventsDbTool {
    store: Arc<EventStore>,
}

impl EventsDbTool {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for EventsDbTool {
    fn name(&self) -> &str {
        "query_events_db"
    }

    fn description(&self) -> &str {
        "Query the `evenements` table of workshops and events with SQL. \
         Columns: nomenclature (unique event code), titre (title), \
         description, date (text, e.g. '2024-06-03'), horaire (time slot, \
         e.g. '9h00 - 17h30'), tag (topic tags), langue (event language). \
         Example: SELECT titre FROM evenements WHERE langue = 'français';"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "A SQL query to execute on the `evenements` table"
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

        let result = self.store.run(query, MAX_QUERY_ROWS).await?;
        Ok(ToolOutput::text(rows::format_rows(&result)))
    }
}
