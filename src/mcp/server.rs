use crate::types::ToolResult;
use crate::Dispatcher;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Parameters for the SQL query tool
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct QueryParams {
    /// A SQL query to execute on the `evenements` table
    pub query: String,
}

/// Parameters for web search
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SearchParams {
    /// The search query
    pub query: String,
}

/// Parameters for the page summarizer
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SummarizeParams {
    /// HTTP or HTTPS URL of the page to summarize
    pub url: String,
}

/// MCP server exposing the gateway tools to AI assistants.
#[derive(Clone)]
pub struct PorticoMcpServer {
    dispatcher: Arc<Dispatcher>,
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PorticoMcpServer {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            dispatcher,
            tool_router: Self::tool_router(),
        }
    }

    /// Render a dispatcher outcome onto the MCP content channel. Failures
    /// stay data-shaped for the client, never protocol errors.
    fn render(result: ToolResult) -> CallToolResult {
        match result {
            ToolResult::Ok { output } => {
                CallToolResult::success(vec![Content::text(output.render_text())])
            }
            ToolResult::Err { kind, message } => {
                CallToolResult::error(vec![Content::text(format!("{}: {}", kind, message))])
            }
        }
    }

    /// Query the events database with SQL
    #[tool(description = "Query the `evenements` table of workshops and events with SQL")]
    async fn query_events_db(
        &self,
        params: Parameters<QueryParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .dispatcher
            .invoke("query_events_db", json!({ "query": params.0.query }))
            .await;
        Ok(Self::render(result))
    }

    /// Search the web and return the top results
    #[tool(description = "Search the web using DuckDuckGo and return the top 3 results")]
    async fn web_search(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .dispatcher
            .invoke("web_search", json!({ "query": params.0.query }))
            .await;
        Ok(Self::render(result))
    }

    /// Download a webpage and return its readable text content
    #[tool(description = "Download a webpage and return a readable text preview of its content")]
    async fn summarize_url(
        &self,
        params: Parameters<SummarizeParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .dispatcher
            .invoke("summarize_url", json!({ "url": params.0.url }))
            .await;
        Ok(Self::render(result))
    }

    /// Parse events from the datacraft.paris agenda page
    #[tool(description = "Parse events from the datacraft.paris agenda page")]
    async fn parse_datacraft_events(&self) -> Result<CallToolResult, McpError> {
        let result = self
            .dispatcher
            .invoke("parse_datacraft_events", json!({}))
            .await;
        Ok(Self::render(result))
    }
}

impl ServerHandler for PorticoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::default(),
            server_info: Implementation {
                name: "portico-gateway".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Portico tool gateway - query the events database, search the web, \
                 summarize webpages, and scrape the datacraft agenda"
                    .into(),
            ),
        }
    }
}

/// Start the MCP server with stdio transport
pub async fn start_stdio_server(dispatcher: Arc<Dispatcher>) -> anyhow::Result<()> {
    use rmcp::{ServiceExt, transport::io::stdio};

    let server = PorticoMcpServer::new(dispatcher);
    let transport = stdio();

    let service = server
        .serve(transport)
        .await
        .map_err(|e| anyhow::anyhow!("MCP server error: {}", e))?;
    service.waiting().await?;

    Ok(())
}
