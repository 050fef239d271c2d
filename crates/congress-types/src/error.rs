//! Error hierarchy for congress-mcp.

use thiserror::Error;

/// Top-level error type for all congress-mcp operations.
#[derive(Debug, Error)]
pub enum CongressError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the Congress.gov API client.
///
/// Every variant that results from a network round trip names the relative
/// path that failed. None of them carry the API key.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Authentication failed for {path} (HTTP {status}): invalid or missing API key")]
    Auth { path: String, status: u16 },

    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("Request rejected for {path} (HTTP {status}): {message}")]
    Client {
        path: String,
        status: u16,
        message: String,
    },

    #[error("Rate limit exceeded for {path} (5,000 requests/hour)")]
    RateLimited {
        path: String,
        retry_after_ms: Option<u64>,
    },

    #[error("Server error for {path}: {status} {message}")]
    Server {
        path: String,
        status: u16,
        message: String,
    },

    #[error("Network error for {path}: {message}")]
    Network { path: String, message: String },

    #[error("Request timeout for {path}")]
    Timeout { path: String },

    #[error("Unexpected response shape from {path}: {message}")]
    Structure { path: String, message: String },
}

impl ApiError {
    /// HTTP status associated with the error, if the upstream produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Auth { status, .. }
            | ApiError::Client { status, .. }
            | ApiError::Server { status, .. } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            ApiError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// The relative path of the failed request, if a request was issued.
    pub fn path(&self) -> Option<&str> {
        match self {
            ApiError::InvalidRequest { .. } => None,
            ApiError::Auth { path, .. }
            | ApiError::NotFound { path }
            | ApiError::Client { path, .. }
            | ApiError::RateLimited { path, .. }
            | ApiError::Server { path, .. }
            | ApiError::Network { path, .. }
            | ApiError::Timeout { path }
            | ApiError::Structure { path, .. } => Some(path),
        }
    }
}

/// Errors from tool and resource dispatch.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Unknown resource: {uri}")]
    UnknownResource { uri: String },

    #[error("{message}")]
    InvalidInput { tool: String, message: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file parse error at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Missing required configuration: {key}")]
    MissingKey { key: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}
