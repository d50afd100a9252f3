//! Woomcp SDK wraps the HTTP API exposed by the WooCommerce MCP server.
//!
//! The server fronts a WooCommerce store with three endpoints:
//! - `GET /health` for connectivity checks
//! - `GET /list_tools` for discovering the available tools
//! - `POST /call_tool` for invoking a tool by name
//!
//! This crate owns the endpoint client, the wire types and the client error
//! taxonomy. Everything user-facing lives in the `woomcp` CLI.

mod client;
mod error;
mod types;

// Re-exports
pub use {client::*, error::*, types::*};
