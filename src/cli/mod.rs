//! CLI for the portico-gateway binary.
//!
//! Argument parsing with clap, colored catalogue output with owo-colors.

use clap::{Parser, Subcommand};

/// Portico - Tool Gateway for LLM Agents
///
/// Exposes schema-constrained tools (events database queries, web search,
/// page summarization, agenda scraping) over HTTP and MCP.
#[derive(Parser, Debug)]
#[command(
    name = "portico-gateway",
    version,
    about = "Portico - tool gateway for LLM agents",
    long_about = "A tool gateway exposing schema-constrained operations - events database\n\
                  queries, web search, page summarization, and agenda scraping - so an\n\
                  external agent can invoke them as discrete, auditable actions.",
    after_help = "EXAMPLES:\n    \
                  portico-gateway                # Start the HTTP gateway\n    \
                  portico-gateway tools          # Print the tool catalogue\n    \
                  portico-gateway mcp            # Serve tools over MCP stdio (requires the `mcp` feature)"
)]
pub struct Cli {
    /// Subcommand to execute; defaults to serving the HTTP gateway
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP gateway (default)
    Serve,

    /// Print the tool catalogue: names, descriptions and parameters
    Tools,

    /// Serve the tool catalogue over MCP stdio transport
    Mcp,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
