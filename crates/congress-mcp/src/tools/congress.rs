//! Congresses and their sessions.

use serde_json::Value;

use super::args::Args;
use super::spec::{CONGRESS, LIMIT, OFFSET, ToolSpec, field};

/// Listing items carry `number` on newer API versions and only a name such
/// as "118th Congress" on older ones.
fn congress_detail(item: &Value, _args: &Args) -> Option<String> {
    let number = field(item, "number").or_else(|| {
        let name = field(item, "name")?;
        let digits: String = name.chars().take_while(char::is_ascii_digit).collect();
        (!digits.is_empty()).then_some(digits)
    })?;
    Some(format!("/congress/{number}"))
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::enriched(
        "list_congresses",
        "List all Congresses with full details: dates, sessions, and chamber information.",
        "/congress",
        "congresses",
        "congress",
        congress_detail,
        &[LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_congress",
        "Get detailed information about a specific Congress: start and end dates, sessions, \
         and chamber information.",
        "/congress/{congress}",
        &[CONGRESS],
    ),
];
