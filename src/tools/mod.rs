//! Tool dispatch and execution layer.
//!
//! This module is the gateway's core: the contract each tool exposes, the
//! catalogue they register into, and the dispatcher that turns raw agent
//! requests into bounded, fault-contained executions.
//!
//! # Module Structure
//!
//! - [`registry`](crate::tools::registry) - [`Tool`](registry::Tool) trait and the [`ToolRegistry`](registry::ToolRegistry)
//! - [`dispatcher`](crate::tools::dispatcher) - validation, timeouts, failure containment
//! - [`query`](crate::tools::query) - SQL access to the event store
//! - [`search`](crate::tools::search) - web search (DuckDuckGo)
//! - [`summarize`](crate::tools::summarize) - fetch-and-extract page previews
//! - [`agenda`](crate::tools::agenda) - structured scrape of the agenda listing
//!
//! # Registering the built-in tools
//!
//! ```ignore
//! let registry = gateway_registry(store, search_client, fetcher, agenda_url)?;
//! let dispatcher = Dispatcher::new(Arc::new(registry));
//! let result = dispatcher.invoke("web_search", json!({"query": "datacraft paris"})).await;
//! ```

/// Event-listing scraper tool.
pub mod agenda;
/// Invocation validation, execution budgets, failure containment.
pub mod dispatcher;
/// SQL query tool for the event store.
pub mod query;
/// Tool trait, registry and registration errors.
pub mod registry;
/// Web search tool.
pub mod search;
/// Page summarizer tool.
pub mod summarize;

use crate::clients::{PageFetcher, SearchClient};
use crate::db::EventStore;
use registry::{RegistryError, ToolRegistry};
use std::sync::Arc;

/// Build the registry with the gateway's four operations, in their
/// advertised order.
pub fn gateway_registry(
    store: Arc<EventStore>,
    search_client: Arc<SearchClient>,
    fetcher: Arc<PageFetcher>,
    agenda_url: String,
) -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(query::EventsDbTool::new(store)))?;
    registry.register(Arc::new(search::WebSearchTool::new(search_client)))?;
    registry.register(Arc::new(summarize::SummarizeUrlTool::new(Arc::clone(&fetcher))))?;
    registry.register(Arc::new(agenda::AgendaScrapeTool::new(fetcher, agenda_url)))?;
    Ok(registry)
}
