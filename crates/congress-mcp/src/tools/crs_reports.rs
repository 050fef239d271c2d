//! Congressional Research Service reports.

use serde_json::Value;

use super::args::Args;
use super::spec::{ArgKind, ArgSpec, FROM_DATE, LIMIT, OFFSET, TO_DATE, ToolSpec, field};

const REPORT_NUMBER: ArgSpec = ArgSpec::path(
    "report_number",
    ArgKind::Text,
    "CRS report number (e.g., 'R47000', 'RL33614')",
);

fn report_detail(item: &Value, _args: &Args) -> Option<String> {
    let number = field(item, "reportNumber").or_else(|| field(item, "id"))?;
    Some(format!("/crsreport/{number}"))
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::enriched(
        "list_crs_reports",
        "List Congressional Research Service (CRS) reports with full details: authors, \
         topics, summaries, and related legislation.",
        "/crsreport",
        "crsReports",
        "crsReport",
        report_detail,
        &[FROM_DATE, TO_DATE, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_crs_report",
        "Get detailed information about a specific CRS report: title, authors, publication \
         date, summary, topics, and available formats.",
        "/crsreport/{report_number}",
        &[REPORT_NUMBER],
    )
    .missing_on_server_error(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_path_accepts_report_number_or_id() {
        let args = Args::default();
        assert_eq!(
            report_detail(&json!({"reportNumber": "R47000"}), &args).as_deref(),
            Some("/crsreport/R47000")
        );
        assert_eq!(
            report_detail(&json!({"id": "RL33614"}), &args).as_deref(),
            Some("/crsreport/RL33614")
        );
    }

    #[test]
    fn get_report_treats_server_errors_as_missing() {
        let spec = TOOLS.iter().find(|t| t.name == "get_crs_report").unwrap();
        assert!(spec.missing_on_server_error);
    }
}
