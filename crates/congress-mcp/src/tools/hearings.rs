//! Congressional hearings.

use serde_json::Value;

use super::args::Args;
use super::spec::{ArgKind, ArgSpec, CHAMBER, CONGRESS, EnumKind, LIMIT, OFFSET, ToolSpec, field};

const CHAMBER_FILTER: ArgSpec = ArgSpec::optional_path(
    "chamber",
    ArgKind::Enum(EnumKind::Chamber),
    "Optional chamber filter: 'house' or 'senate'. Omit to get hearings from both chambers.",
);
const JACKET_NUMBER: ArgSpec =
    ArgSpec::path("jacket_number", ArgKind::Text, "Hearing jacket number");

/// Without a chamber filter each item carries its own chamber.
fn hearing_detail(item: &Value, args: &Args) -> Option<String> {
    let congress = args.segment("congress")?;
    let chamber = args
        .segment("chamber")
        .or_else(|| field(item, "chamber"))?
        .to_ascii_lowercase();
    let jacket = field(item, "jacketNumber")?;
    Some(format!("/hearing/{congress}/{chamber}/{jacket}"))
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::enriched(
        "list_hearings",
        "List congressional hearings for a given Congress with full details: title, date, \
         committees, witnesses, and transcript links.",
        "/hearing/{congress}/{chamber?}",
        "hearings",
        "hearing",
        hearing_detail,
        &[CONGRESS, CHAMBER_FILTER, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_hearing",
        "Get detailed information about a specific hearing.",
        "/hearing/{congress}/{chamber}/{jacket_number}",
        &[CONGRESS, CHAMBER, JACKET_NUMBER],
    ),
];
