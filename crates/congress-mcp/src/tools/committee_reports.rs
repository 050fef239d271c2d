//! Committee reports.

use serde_json::Value;

use super::args::Args;
use super::spec::{
    ArgKind, ArgSpec, CONGRESS, EnumKind, FROM_DATE, LIMIT, OFFSET, TO_DATE, ToolSpec, field,
    positive,
};

const REPORT_TYPE: ArgSpec = ArgSpec::path(
    "report_type",
    ArgKind::Enum(EnumKind::Report),
    "Report type: hrpt (House), srpt (Senate), erpt (Executive)",
);
const REPORT_NUMBER: ArgSpec = positive("report_number", "Report number");

const REPORT: &[ArgSpec] = &[CONGRESS, REPORT_TYPE, REPORT_NUMBER];

fn report_detail(item: &Value, args: &Args) -> Option<String> {
    let congress = args.segment("congress")?;
    let report_type = args.segment("report_type")?;
    let number = field(item, "number")?;
    Some(format!("/committee-report/{congress}/{report_type}/{number}"))
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::enriched(
        "list_committee_reports",
        "List committee reports by Congress and type (hrpt, srpt, erpt) with full details, \
         including associated bills and text links.",
        "/committee-report/{congress}/{report_type}",
        "reports",
        "committeeReport",
        report_detail,
        &[CONGRESS, REPORT_TYPE, FROM_DATE, TO_DATE, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_committee_report",
        "Get detailed information about a specific committee report.",
        "/committee-report/{congress}/{report_type}/{report_number}",
        REPORT,
    ),
    ToolSpec::single(
        "get_committee_report_text",
        "Get text versions of a committee report with links to available formats.",
        "/committee-report/{congress}/{report_type}/{report_number}/text",
        REPORT,
    ),
];
