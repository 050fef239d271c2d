//! MCP request dispatch.
//!
//! [`McpServer`] turns one line of JSON-RPC into at most one response. It is
//! transport-agnostic; see [`crate::transport`] for the stdio loop.

use std::sync::Arc;

use congress_api::ApiClient;
use congress_types::{ApiError, ToolError};
use serde_json::{Value, json};

use crate::jsonrpc::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JsonRpcRequest, JsonRpcResponse,
    METHOD_NOT_FOUND, PARSE_ERROR, RESOURCE_NOT_FOUND,
};
use crate::resources;
use crate::tools::ToolRegistry;

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "congress-mcp";

const INSTRUCTIONS: &str = "Congress.gov MCP Server provides access to official U.S. Congress \
data including bills, laws, amendments, members, committees, hearings, nominations, treaties, \
and more.

Key information:
- All legislative data queries require an explicit Congress number (e.g., 118 for the 118th \
Congress, which ran 2023-2025)
- The current Congress is the 119th (2025-2027)
- Rate limit: 5,000 requests per hour per API key
- Data is sourced directly from the official Congress.gov API v3

Available data categories:
- Bills and resolutions (HR, S, HJRES, SJRES, HCONRES, SCONRES, HRES, SRES)
- Laws (public and private)
- Amendments (House and Senate)
- Members of Congress
- Committees and subcommittees
- Committee reports, prints, and meetings
- Hearings
- Nominations
- Treaties
- Congressional Record (daily and bound)
- CRS Reports
- House and Senate communications
- Roll call votes";

/// Serves the Congress.gov tools and resources over MCP.
pub struct McpServer {
    client: Arc<ApiClient>,
    tools: ToolRegistry,
}

impl McpServer {
    /// Create a server exposing every built-in tool.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self::with_registry(client, ToolRegistry::with_builtins())
    }

    pub fn with_registry(client: Arc<ApiClient>, tools: ToolRegistry) -> Self {
        Self { client, tools }
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Handle one raw message. Returns `None` for notifications.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Unparsable message: {e}");
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let id = value.get("id").cloned();
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    id.unwrap_or(Value::Null),
                    INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                ));
            }
        };
        self.handle_request(request).await
    }

    /// Dispatch a decoded request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id.clone() else {
            tracing::debug!("Notification: {}", request.method);
            return None;
        };
        if request.jsonrpc.as_deref().is_some_and(|v| v != "2.0") {
            return Some(JsonRpcResponse::failure(
                id,
                INVALID_REQUEST,
                "Invalid request: jsonrpc must be \"2.0\"",
            ));
        }

        tracing::debug!("Request {id}: {}", request.method);
        let params = request.params.as_ref();
        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                json!({ "tools": self.tools.definitions(self.client.config().max_limit) }),
            ),
            "tools/call" => self.call_tool(id, params).await,
            "resources/list" => {
                JsonRpcResponse::success(id, json!({ "resources": resources::list() }))
            }
            "resources/templates/list" => JsonRpcResponse::success(
                id,
                json!({ "resourceTemplates": resources::templates() }),
            ),
            "resources/read" => self.read_resource(id, params).await,
            other => {
                JsonRpcResponse::failure(id, METHOD_NOT_FOUND, format!("Method not found: {other}"))
            }
        };
        Some(response)
    }

    fn initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {},
                "resources": {},
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION"),
            },
            "instructions": INSTRUCTIONS,
        })
    }

    async fn call_tool(&self, id: Value, params: Option<&Value>) -> JsonRpcResponse {
        let Some(name) = params.and_then(|p| p.get("name")).and_then(Value::as_str) else {
            return JsonRpcResponse::failure(id, INVALID_PARAMS, "Missing tool name");
        };
        let arguments = params.and_then(|p| p.get("arguments"));

        match self.tools.execute(&self.client, name, arguments).await {
            Ok(output) => JsonRpcResponse::success(id, tool_result(&output, false)),
            Err(ToolError::UnknownTool { name }) => {
                JsonRpcResponse::failure(id, INVALID_PARAMS, format!("Unknown tool: {name}"))
            }
            Err(err) => {
                tracing::warn!("Tool {name} failed: {err}");
                let text = format!("Error in {name}: {err}");
                JsonRpcResponse::success(id, tool_result(&Value::String(text), true))
            }
        }
    }

    async fn read_resource(&self, id: Value, params: Option<&Value>) -> JsonRpcResponse {
        let Some(uri) = params.and_then(|p| p.get("uri")).and_then(Value::as_str) else {
            return JsonRpcResponse::failure(id, INVALID_PARAMS, "Missing resource uri");
        };

        match resources::read(&self.client, uri).await {
            Ok(contents) => JsonRpcResponse::success(id, contents),
            Err(err) => {
                let code = match &err {
                    ToolError::UnknownResource { .. }
                    | ToolError::Api(ApiError::NotFound { .. }) => RESOURCE_NOT_FOUND,
                    ToolError::InvalidInput { .. } => INVALID_PARAMS,
                    _ => INTERNAL_ERROR,
                };
                tracing::warn!("Resource {uri} failed: {err}");
                JsonRpcResponse::failure(id, code, format!("Error reading {uri}: {err}"))
            }
        }
    }
}

/// Wrap tool output as MCP text content. Strings are passed through as-is.
fn tool_result(output: &Value, is_error: bool) -> Value {
    let text = match output {
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    };
    let mut result = json!({
        "content": [{ "type": "text", "text": text }],
    });
    if is_error {
        result["isError"] = Value::Bool(true);
    }
    result
}
