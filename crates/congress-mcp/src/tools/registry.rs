//! Tool registry for name-based dispatch.

use std::collections::HashMap;

use congress_api::{Aggregated, ApiClient, FetchRequest, PageWindow, SubResource};
use congress_types::{ApiError, ToolError};
use serde_json::{Map, Value, json};

use super::args::{self, Args};
use super::spec::{ArgKind, ArgSpec, Role, Shape, ToolSpec};

/// Letters, digits, `.`, `_` and `-`, but not only dots.
const TEXT_PATTERN: &str = "^[A-Za-z0-9._-]*[A-Za-z0-9_-][A-Za-z0-9._-]*$";

/// Label of the detail sub-fetch made for each list item.
const DETAIL: &str = "detail";

/// Every tool only reads public data from a remote service.
fn annotations() -> Value {
    json!({
        "readOnlyHint": true,
        "destructiveHint": false,
        "idempotentHint": true,
        "openWorldHint": true,
    })
}

/// Registry of available tools, supporting name-based dispatch.
pub struct ToolRegistry {
    tools: HashMap<&'static str, &'static ToolSpec>,
    /// Registration order, used for `tools/list`.
    order: Vec<&'static str>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry with every Congress.gov tool.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for group in super::ALL_GROUPS.iter().copied() {
            for spec in group {
                registry.register(spec);
            }
        }
        registry
    }

    /// Register a tool. A later registration with the same name replaces
    /// the earlier one.
    pub fn register(&mut self, spec: &'static ToolSpec) {
        if self.tools.insert(spec.name, spec).is_none() {
            self.order.push(spec.name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&'static ToolSpec> {
        self.tools.get(name).copied()
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Tool names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// MCP tool definitions, with limit bounds taken from the client config.
    pub fn definitions(&self, max_limit: u32) -> Vec<Value> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|spec| definition(spec, max_limit))
            .collect()
    }

    /// Validate arguments and run a tool against the API.
    pub async fn execute(
        &self,
        client: &ApiClient,
        name: &str,
        arguments: Option<&Value>,
    ) -> Result<Value, ToolError> {
        let spec = self.get(name).ok_or_else(|| ToolError::UnknownTool {
            name: name.to_string(),
        })?;
        let invalid = |message: String| ToolError::InvalidInput {
            tool: spec.name.to_string(),
            message,
        };

        let args = args::validate(spec.args, arguments).map_err(invalid)?;
        let path = args.render_path(spec.path).map_err(invalid)?;
        tracing::debug!("Tool {} -> GET {path}", spec.name);

        run(client, spec, &args, path).await.map_err(|err| {
            if spec.missing_on_server_error {
                missing_on_server_error(err).into()
            } else {
                err.into()
            }
        })
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

async fn run(
    client: &ApiClient,
    spec: &ToolSpec,
    args: &Args,
    path: String,
) -> Result<Value, ApiError> {
    let query = args.query();
    match spec.shape {
        Shape::Single => client.get(&path, &query, None).await,
        Shape::Window => {
            let window = PageWindow::new(args.limit(), args.offset());
            client.get(&path, &query, Some(window)).await
        }
        Shape::List { items } => {
            let request = FetchRequest::new(path, items)
                .params(query)
                .limit(args.limit())
                .offset(args.offset());
            let listing = client.fetch(&request).await?;
            Ok(list_output(items, listing))
        }
        Shape::Enriched {
            items,
            detail,
            detail_path,
        } => {
            let request = FetchRequest::new(path, items)
                .params(query)
                .limit(args.limit())
                .offset(args.offset());
            let listing = client
                .fetch_with_enrichment(&request, |item| match detail_path(item, args) {
                    Some(path) => vec![SubResource::new(DETAIL, path).unwrap_key(detail)],
                    None => Vec::new(),
                })
                .await?;
            Ok(list_output(items, listing.map_items(|item| item.into_merged())))
        }
    }
}

/// Some endpoints report unknown identifiers as a 500 whose body mentions
/// `NoneType`.
pub(crate) fn missing_on_server_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Server { path, message, .. } if message.contains("NoneType") => {
            ApiError::NotFound { path }
        }
        other => other,
    }
}

/// Shape a list result: the items under their upstream key plus pagination.
pub fn list_output(items_key: &str, listing: Aggregated<Value>) -> Value {
    let returned = listing.len();
    let mut out = Map::new();
    out.insert(
        "pagination".into(),
        json!({
            "count": listing.total,
            "offset": listing.offset,
            "returned": returned,
            "hasMore": listing.has_more,
        }),
    );
    out.insert(items_key.to_string(), Value::Array(listing.items));
    Value::Object(out)
}

fn definition(spec: &ToolSpec, max_limit: u32) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for arg in spec.args {
        properties.insert(arg.name.to_string(), arg_schema(arg, max_limit));
        if arg.required {
            required.push(Value::from(arg.name));
        }
    }

    json!({
        "name": spec.name,
        "description": spec.description,
        "inputSchema": {
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        },
        "annotations": annotations(),
    })
}

fn arg_schema(arg: &ArgSpec, max_limit: u32) -> Value {
    let mut schema = match arg.kind {
        ArgKind::Congress => json!({"type": "integer", "minimum": 1, "maximum": 200}),
        ArgKind::Integer { min, max } => {
            let mut schema = json!({"type": "integer", "minimum": min});
            if arg.role == Role::Limit {
                schema["maximum"] = json!(max_limit);
            } else if max < i64::from(u32::MAX) {
                schema["maximum"] = json!(max);
            }
            schema
        }
        ArgKind::Text => json!({"type": "string", "pattern": TEXT_PATTERN}),
        ArgKind::State => json!({"type": "string", "pattern": "^[A-Za-z]{2}$"}),
        ArgKind::Enum(kind) => json!({"type": "string", "enum": kind.codes()}),
        ArgKind::Date => json!({"type": "string", "format": "date"}),
        ArgKind::Sort => json!({"type": "string", "enum": ["updateDate+asc", "updateDate+desc"]}),
        ArgKind::Bool => json!({"type": "boolean"}),
    };

    let description = match arg.role {
        Role::Limit => format!("{} (1-{max_limit})", arg.description),
        _ => arg.description.to_string(),
    };
    schema["description"] = Value::String(description);
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::spec::{CONGRESS, LIMIT};

    static SAMPLE: ToolSpec = ToolSpec::list(
        "list_sample",
        "Sample listing",
        "/sample/{congress}",
        "samples",
        &[CONGRESS, LIMIT],
    );

    #[test]
    fn builtins_have_unique_names() {
        let registry = ToolRegistry::with_builtins();
        assert_eq!(registry.len(), 84);
        let mut names: Vec<&str> = registry.names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 84);
    }

    #[test]
    fn builtin_paths_only_reference_declared_arguments() {
        let registry = ToolRegistry::with_builtins();
        for name in registry.names() {
            let spec = registry.get(name).unwrap();
            for segment in spec.path.split('/') {
                if let Some(inner) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    let arg = inner.trim_end_matches('?');
                    let declared = spec.args.iter().find(|a| a.name == arg);
                    assert!(declared.is_some(), "{name}: undeclared path arg {arg}");
                    assert_eq!(declared.unwrap().role, Role::Path, "{name}: {arg}");
                }
            }
        }
    }

    #[test]
    fn register_replaces_without_duplicating() {
        let mut registry = ToolRegistry::new();
        registry.register(&SAMPLE);
        registry.register(&SAMPLE);
        assert_eq!(registry.len(), 1);
        assert!(registry.has_tool("list_sample"));
        assert!(!registry.has_tool("list_bills"));
    }

    #[test]
    fn definition_includes_schema_and_annotations() {
        let mut registry = ToolRegistry::new();
        registry.register(&SAMPLE);
        let defs = registry.definitions(100);
        assert_eq!(defs.len(), 1);

        let def = &defs[0];
        assert_eq!(def["name"], "list_sample");
        assert_eq!(def["inputSchema"]["required"], json!(["congress"]));
        assert_eq!(def["inputSchema"]["additionalProperties"], false);
        assert_eq!(def["inputSchema"]["properties"]["limit"]["maximum"], 100);
        assert!(
            def["inputSchema"]["properties"]["limit"]["description"]
                .as_str()
                .unwrap()
                .ends_with("(1-100)")
        );
        assert_eq!(def["inputSchema"]["properties"]["congress"]["maximum"], 200);
        assert_eq!(def["annotations"]["readOnlyHint"], true);
        assert_eq!(def["annotations"]["destructiveHint"], false);
    }

    #[test]
    fn enum_arguments_list_their_codes() {
        let registry = ToolRegistry::with_builtins();
        let defs = registry.definitions(250);
        let def = defs
            .iter()
            .find(|d| d["name"] == "list_bills_by_type")
            .unwrap();
        let codes = &def["inputSchema"]["properties"]["bill_type"]["enum"];
        assert_eq!(codes[0], "hr");
        assert_eq!(codes.as_array().unwrap().len(), 8);
    }

    #[test]
    fn text_arguments_exclude_dot_only_values() {
        let registry = ToolRegistry::with_builtins();
        let defs = registry.definitions(250);
        let def = defs.iter().find(|d| d["name"] == "get_member").unwrap();
        let pattern = &def["inputSchema"]["properties"]["bioguide_id"]["pattern"];
        assert_eq!(pattern, TEXT_PATTERN);
    }

    #[test]
    fn list_output_reports_pagination() {
        let listing = Aggregated {
            items: vec![json!({"number": "1"})],
            total: Some(40),
            has_more: true,
            offset: 10,
            pages: 1,
        };
        let out = list_output("bills", listing);
        assert_eq!(out["bills"], json!([{"number": "1"}]));
        assert_eq!(
            out["pagination"],
            json!({"count": 40, "offset": 10, "returned": 1, "hasMore": true})
        );
    }

    #[test]
    fn none_type_server_error_means_missing() {
        let err = missing_on_server_error(ApiError::Server {
            path: "/crsreport/R1".into(),
            status: 500,
            message: "'NoneType' object is not subscriptable".into(),
        });
        assert!(matches!(err, ApiError::NotFound { ref path } if path == "/crsreport/R1"));

        let err = missing_on_server_error(ApiError::Server {
            path: "/crsreport/R1".into(),
            status: 502,
            message: "Bad Gateway".into(),
        });
        assert!(matches!(err, ApiError::Server { .. }));
    }

    #[tokio::test]
    async fn unknown_tool_and_invalid_input_fail_before_any_request() {
        let client = ApiClient::new(
            congress_api::ClientConfig::new("k").with_base_url("http://127.0.0.1:9"),
        )
        .unwrap();
        let registry = ToolRegistry::with_builtins();

        let err = registry.execute(&client, "nope", None).await.unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool { .. }));

        let err = registry
            .execute(&client, "get_bill", Some(&json!({"congress": 118})))
            .await
            .unwrap_err();
        match err {
            ToolError::InvalidInput { tool, message } => {
                assert_eq!(tool, "get_bill");
                assert!(message.contains("bill_type"));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
