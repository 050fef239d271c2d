//! MCP (Model Context Protocol) server for the Congress.gov API.
//!
//! Speaks newline-delimited JSON-RPC 2.0 over stdio. Tools and resources are
//! declarative tables that lower onto a shared [`congress_api::ApiClient`].

pub mod error;
pub mod jsonrpc;
pub mod resources;
pub mod server;
pub mod tools;
pub mod transport;

pub use error::McpError;
pub use server::{McpServer, PROTOCOL_VERSION, SERVER_NAME};
pub use tools::ToolRegistry;
pub use transport::{serve, serve_stdio};
