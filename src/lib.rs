//! # Portico - Tool Gateway for LLM Agents
//!
//! A small backend exposing a fixed set of named, schema-constrained
//! operations — SQL queries against a tabular event store, web search,
//! fetch-and-extract page previews, and a structured scrape of an
//! event-listing page — so an external reasoning agent can invoke them as
//! discrete, auditable actions instead of free-form code execution.
//!
//! ## Overview
//!
//! Portico can be used in two ways:
//!
//! 1. **As a standalone gateway** - Run the `portico-gateway` binary
//! 2. **As a library** - Embed the registry and dispatcher in your own host
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use portico::{AppState, Config};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let state = AppState::from_config(config).await?;
//!
//!     let result = state
//!         .dispatcher
//!         .invoke("web_search", json!({ "query": "datacraft paris" }))
//!         .await;
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Requests flow through a single path: the [`Dispatcher`] resolves the
//! tool in the [`ToolRegistry`], validates arguments against the tool's
//! schema, runs the handler under a bounded budget, and returns a
//! [`ToolResult`] value. Every external fault is converted at the handler
//! boundary; failures travel back to the agent as data, never as
//! transport errors.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `mcp` | Model Context Protocol stdio server |

#![warn(missing_docs)]

/// HTTP routes and handlers.
pub mod api;
/// Clients for external web resources (search provider, page fetcher).
pub mod clients;
/// Database client for the event store.
pub mod db;
/// Model Context Protocol (MCP) server integration.
#[cfg(feature = "mcp")]
pub mod mcp;
/// Normalization of raw external responses into stable output shapes.
pub mod normalize;
/// Tool contract, registry and dispatcher.
pub mod tools;
/// Core types: outputs, results, errors.
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use tools::dispatcher::Dispatcher;
pub use tools::registry::{Tool, ToolRegistry};
pub use types::{EventRecord, SearchHit, ToolError, ToolOutput, ToolResult};
pub use utils::config::Config;

use clients::{PageFetcher, SearchClient};
use db::EventStore;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration.
    pub config: Arc<Config>,
    /// The immutable tool catalogue.
    pub registry: Arc<ToolRegistry>,
    /// Invocation entry point.
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Build the clients, registry and dispatcher from configuration.
    pub async fn from_config(config: Config) -> anyhow::Result<Self> {
        let store = Arc::new(EventStore::open(&config.database.path).await?);
        let search_client = Arc::new(SearchClient::new(
            config.search.endpoint.clone(),
            &config.fetch.user_agent,
            config.fetch.timeout(),
        )?);
        let fetcher = Arc::new(PageFetcher::new(
            &config.fetch.user_agent,
            config.fetch.timeout(),
        )?);

        let registry = Arc::new(tools::gateway_registry(
            store,
            search_client,
            fetcher,
            config.agenda.url.clone(),
        )?);
        let dispatcher = Arc::new(Dispatcher::new(Arc::clone(&registry)));

        Ok(Self {
            config: Arc::new(config),
            registry,
            dispatcher,
        })
    }
}
