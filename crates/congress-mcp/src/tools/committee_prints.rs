//! Committee prints.

use serde_json::Value;

use super::args::Args;
use super::spec::{
    ArgKind, ArgSpec, CHAMBER, CONGRESS, FROM_DATE, LIMIT, OFFSET, TO_DATE, ToolSpec, field,
};

const JACKET_NUMBER: ArgSpec = ArgSpec::path("jacket_number", ArgKind::Text, "Print jacket number");

const PRINT: &[ArgSpec] = &[CONGRESS, CHAMBER, JACKET_NUMBER];

fn print_detail(item: &Value, args: &Args) -> Option<String> {
    let congress = args.segment("congress")?;
    let chamber = args.segment("chamber")?;
    let jacket = field(item, "jacketNumber")?;
    Some(format!("/committee-print/{congress}/{chamber}/{jacket}"))
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::enriched(
        "list_committee_prints",
        "List committee prints by Congress and chamber with full details. Committee prints \
         are publications such as reports, hearings transcripts, and legislative analyses.",
        "/committee-print/{congress}/{chamber}",
        "committeePrints",
        "committeePrint",
        print_detail,
        &[CONGRESS, CHAMBER, FROM_DATE, TO_DATE, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_committee_print",
        "Get detailed information about a specific committee print.",
        "/committee-print/{congress}/{chamber}/{jacket_number}",
        PRINT,
    ),
    ToolSpec::single(
        "get_committee_print_text",
        "Get text versions of a committee print with links to available formats.",
        "/committee-print/{congress}/{chamber}/{jacket_number}/text",
        PRINT,
    ),
];
