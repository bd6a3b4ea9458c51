//! Model Context Protocol integration.
//!
//! Exposes the same tool catalogue over MCP stdio transport, delegating
//! every call to the gateway dispatcher.

pub mod server;

pub use server::{start_stdio_server, PorticoMcpServer};
