//! MCP resources: static reference data and URI templates that map onto a
//! single API request.

use congress_api::{ApiClient, ClientConfig, QueryParams};
use congress_types::{
    AmendmentType, BillType, Chamber, HouseCommunicationType, LawType, ParamEnum, ReportType,
    SenateCommunicationType, ToolError,
};
use serde_json::{Map, Value, json};

use crate::tools::args;
use crate::tools::registry::missing_on_server_error;
use crate::tools::spec::{ArgKind, ArgSpec, CHAMBER, COMMITTEE_CODE, CONGRESS, EnumKind, positive};

const SCHEME: &str = "congress://";
const MIME_TYPE: &str = "application/json";

/// A resource whose content is computed locally.
pub struct StaticResource {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    render: fn(&ClientConfig) -> Value,
}

/// A `congress://` URI template backed by one upstream path.
pub struct ResourceTemplate {
    pub uri_template: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    path: &'static str,
    args: &'static [ArgSpec],
    missing_on_server_error: bool,
}

const fn template(
    uri_template: &'static str,
    name: &'static str,
    description: &'static str,
    path: &'static str,
    args: &'static [ArgSpec],
) -> ResourceTemplate {
    ResourceTemplate {
        uri_template,
        name,
        description,
        path,
        args,
        missing_on_server_error: false,
    }
}

const fn fixed(
    uri: &'static str,
    name: &'static str,
    description: &'static str,
    render: fn(&ClientConfig) -> Value,
) -> StaticResource {
    StaticResource {
        uri,
        name,
        description,
        render,
    }
}

pub const STATIC_RESOURCES: &[StaticResource] = &[
    fixed(
        "congress://api/info",
        "api-info",
        "Congress.gov API information and configuration: version, base URL, rate limits, \
         and page size bounds.",
        api_info,
    ),
    fixed(
        "congress://enums/bill-types",
        "bill-types",
        "Reference list of valid bill type codes. Use these codes when querying bills and \
         summaries.",
        enum_table::<BillType>,
    ),
    fixed(
        "congress://enums/amendment-types",
        "amendment-types",
        "Reference list of valid amendment type codes.",
        enum_table::<AmendmentType>,
    ),
    fixed(
        "congress://enums/chambers",
        "chambers",
        "Reference list of congressional chambers.",
        enum_table::<Chamber>,
    ),
    fixed(
        "congress://enums/law-types",
        "law-types",
        "Reference list of law type codes.",
        enum_table::<LawType>,
    ),
    fixed(
        "congress://enums/report-types",
        "report-types",
        "Reference list of committee report type codes.",
        enum_table::<ReportType>,
    ),
    fixed(
        "congress://enums/house-communication-types",
        "house-communication-types",
        "Reference list of House communication type codes.",
        enum_table::<HouseCommunicationType>,
    ),
    fixed(
        "congress://enums/senate-communication-types",
        "senate-communication-types",
        "Reference list of Senate communication type codes.",
        enum_table::<SenateCommunicationType>,
    ),
    fixed(
        "congress://reference/congress-numbers",
        "congress-numbers",
        "Reference for recent Congress numbers and their date ranges.",
        congress_numbers,
    ),
];

const BILL_TYPE: ArgSpec = ArgSpec::path("bill_type", ArgKind::Enum(EnumKind::Bill), "Bill type");
const LAW_TYPE: ArgSpec = ArgSpec::path("law_type", ArgKind::Enum(EnumKind::Law), "Law type");
const BIOGUIDE_ID: ArgSpec = ArgSpec::path("bioguide_id", ArgKind::Text, "Member bioguide ID");
const CONGRESS_NUMBER: ArgSpec =
    ArgSpec::path("congress_number", ArgKind::Congress, "Congress number");
const REPORT_NUMBER: ArgSpec = ArgSpec::path("report_number", ArgKind::Text, "CRS report number");
const BILL_NUMBER: ArgSpec = positive("bill_number", "Bill number");
const NOMINATION_NUMBER: ArgSpec = positive("nomination_number", "Nomination number");
const TREATY_NUMBER: ArgSpec = positive("treaty_number", "Treaty number");
const LAW_NUMBER: ArgSpec = positive("law_number", "Law number");

pub const RESOURCE_TEMPLATES: &[ResourceTemplate] = &[
    template(
        "congress://bill/{congress}/{bill_type}/{bill_number}",
        "bill",
        "Direct access to bill data by Congress, type, and number.",
        "/bill/{congress}/{bill_type}/{bill_number}",
        &[CONGRESS, BILL_TYPE, BILL_NUMBER],
    ),
    template(
        "congress://member/{bioguide_id}",
        "member",
        "Direct access to member data by bioguide ID.",
        "/member/{bioguide_id}",
        &[BIOGUIDE_ID],
    ),
    template(
        "congress://committee/{chamber}/{committee_code}",
        "committee",
        "Direct access to committee data by chamber and system code.",
        "/committee/{chamber}/{committee_code}",
        &[CHAMBER, COMMITTEE_CODE],
    ),
    template(
        "congress://nomination/{congress}/{nomination_number}",
        "nomination",
        "Direct access to nomination data.",
        "/nomination/{congress}/{nomination_number}",
        &[CONGRESS, NOMINATION_NUMBER],
    ),
    template(
        "congress://treaty/{congress}/{treaty_number}",
        "treaty",
        "Direct access to treaty data.",
        "/treaty/{congress}/{treaty_number}",
        &[CONGRESS, TREATY_NUMBER],
    ),
    template(
        "congress://law/{congress}/{law_type}/{law_number}",
        "law",
        "Direct access to law data.",
        "/law/{congress}/{law_type}/{law_number}",
        &[CONGRESS, LAW_TYPE, LAW_NUMBER],
    ),
    template(
        "congress://congress/{congress_number}",
        "congress",
        "Direct access to Congress session data.",
        "/congress/{congress_number}",
        &[CONGRESS_NUMBER],
    ),
    ResourceTemplate {
        missing_on_server_error: true,
        ..template(
            "congress://crs-report/{report_number}",
            "crs-report",
            "Direct access to CRS report data.",
            "/crsreport/{report_number}",
            &[REPORT_NUMBER],
        )
    },
];

/// `resources/list` entries.
pub fn list() -> Vec<Value> {
    STATIC_RESOURCES
        .iter()
        .map(|r| {
            json!({
                "uri": r.uri,
                "name": r.name,
                "description": r.description,
                "mimeType": MIME_TYPE,
            })
        })
        .collect()
}

/// `resources/templates/list` entries.
pub fn templates() -> Vec<Value> {
    RESOURCE_TEMPLATES
        .iter()
        .map(|t| {
            json!({
                "uriTemplate": t.uri_template,
                "name": t.name,
                "description": t.description,
                "mimeType": MIME_TYPE,
            })
        })
        .collect()
}

/// Read a resource by URI and wrap it as MCP resource contents.
pub async fn read(client: &ApiClient, uri: &str) -> Result<Value, ToolError> {
    let body = match STATIC_RESOURCES.iter().find(|r| r.uri == uri) {
        Some(resource) => (resource.render)(client.config()),
        None => read_template(client, uri).await?,
    };

    let text = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
    Ok(json!({
        "contents": [{
            "uri": uri,
            "mimeType": MIME_TYPE,
            "text": text,
        }]
    }))
}

async fn read_template(client: &ApiClient, uri: &str) -> Result<Value, ToolError> {
    let unknown = || ToolError::UnknownResource {
        uri: uri.to_string(),
    };
    let (template, raw) = RESOURCE_TEMPLATES
        .iter()
        .find_map(|t| match_template(t.uri_template, uri).map(|raw| (t, raw)))
        .ok_or_else(unknown)?;

    let invalid = |message: String| ToolError::InvalidInput {
        tool: uri.to_string(),
        message,
    };
    let args = args::validate(template.args, Some(&Value::Object(raw))).map_err(invalid)?;
    let path = args.render_path(template.path).map_err(invalid)?;
    tracing::debug!("Resource {uri} -> GET {path}");

    client
        .get(&path, &QueryParams::new(), None)
        .await
        .map_err(|err| {
            if template.missing_on_server_error {
                missing_on_server_error(err).into()
            } else {
                err.into()
            }
        })
}

/// Bind the `{name}` segments of `template` against `uri`.
fn match_template(template: &str, uri: &str) -> Option<Map<String, Value>> {
    let template = template.strip_prefix(SCHEME)?;
    let uri = uri.strip_prefix(SCHEME)?;

    let pattern: Vec<&str> = template.split('/').collect();
    let actual: Vec<&str> = uri.split('/').collect();
    if pattern.len() != actual.len() {
        return None;
    }

    let mut bound = Map::new();
    for (expected, value) in pattern.iter().zip(&actual) {
        match expected.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(_) if value.is_empty() => return None,
            Some(name) => {
                bound.insert(name.to_string(), Value::String((*value).to_string()));
            }
            None if expected == value => {}
            None => return None,
        }
    }
    Some(bound)
}

fn api_info(config: &ClientConfig) -> Value {
    json!({
        "name": "Congress.gov API",
        "version": "v3",
        "base_url": config.base_url,
        "rate_limit": "5,000 requests per hour",
        "default_limit": config.default_limit,
        "max_limit": config.max_limit,
        "documentation": "https://api.congress.gov",
        "github": "https://github.com/LibraryOfCongress/api.congress.gov",
        "sign_up": "https://api.congress.gov/sign-up/",
    })
}

fn enum_table<E: ParamEnum>(_config: &ClientConfig) -> Value {
    let mut table = Map::new();
    for value in E::ALL {
        table.insert(
            value.code().to_string(),
            json!({"name": value.name(), "description": value.description()}),
        );
    }
    Value::Object(table)
}

fn congress_numbers(_config: &ClientConfig) -> Value {
    // (number, first year, start date)
    const RECENT: &[(u32, u32, &str)] = &[
        (119, 2025, "2025-01-03"),
        (118, 2023, "2023-01-03"),
        (117, 2021, "2021-01-03"),
        (116, 2019, "2019-01-03"),
        (115, 2017, "2017-01-03"),
        (114, 2015, "2015-01-06"),
        (113, 2013, "2013-01-03"),
    ];

    let mut table = Map::new();
    for &(number, year, start) in RECENT {
        let end_year = year + 2;
        table.insert(
            number.to_string(),
            json!({
                "years": format!("{year}-{end_year}"),
                "start": start,
                "end": format!("{end_year}-01-03"),
            }),
        );
    }
    table.insert(
        "note".into(),
        json!(
            "Each Congress begins on January 3 of odd-numbered years and lasts two years. \
             The first Congress began in 1789."
        ),
    );
    Value::Object(table)
}
