//! Error types for the MCP server.

use thiserror::Error;

/// Errors that stop the server loop.
///
/// Per-request failures never surface here; they become JSON-RPC error
/// responses or tool results with `isError` set.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("MCP protocol error: {0}")]
    Protocol(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
