//! Daily and bound editions of the Congressional Record.

use serde_json::Value;

use super::args::Args;
use super::spec::{ArgKind, ArgSpec, LIMIT, OFFSET, ToolSpec, field, positive};

/// The bound Record starts with the 43rd Congress.
const FIRST_BOUND_YEAR: i64 = 1873;

const VOLUME_NUMBER: ArgSpec = positive("volume_number", "Volume number");
const ISSUE_NUMBER: ArgSpec = positive("issue_number", "Issue number");
const YEAR: ArgSpec = ArgSpec::path(
    "year",
    ArgKind::Integer {
        min: FIRST_BOUND_YEAR,
        max: i64::MAX,
    },
    "Year (e.g., 2023)",
);
const YEAR_FILTER: ArgSpec = ArgSpec::optional_path(
    "year",
    ArgKind::Integer {
        min: FIRST_BOUND_YEAR,
        max: i64::MAX,
    },
    "Year (e.g., 2023). If not provided, lists all.",
);
const MONTH: ArgSpec = ArgSpec::path("month", ArgKind::Integer { min: 1, max: 12 }, "Month (1-12)");
const DAY: ArgSpec = ArgSpec::path("day", ArgKind::Integer { min: 1, max: 31 }, "Day (1-31)");

fn issue_detail(item: &Value, args: &Args) -> Option<String> {
    let volume = args.segment("volume_number")?;
    let issue = field(item, "issueNumber")?;
    Some(format!("/daily-congressional-record/{volume}/{issue}"))
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::list(
        "list_daily_congressional_record",
        "List daily Congressional Record issues. The daily edition is published each day \
         Congress is in session.",
        "/daily-congressional-record",
        "dailyCongressionalRecord",
        &[LIMIT, OFFSET],
    ),
    ToolSpec::enriched(
        "list_daily_congressional_record_by_volume",
        "List daily Congressional Record issues by volume with full details, including \
         sections and article links.",
        "/daily-congressional-record/{volume_number}",
        "dailyCongressionalRecord",
        "dailyCongressionalRecord",
        issue_detail,
        &[VOLUME_NUMBER, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_daily_congressional_record_issue",
        "Get a specific daily Congressional Record issue with its sections and links.",
        "/daily-congressional-record/{volume_number}/{issue_number}",
        &[VOLUME_NUMBER, ISSUE_NUMBER],
    ),
    ToolSpec::window(
        "get_daily_congressional_record_articles",
        "Get articles from a daily Congressional Record issue, organized by section \
         (Senate, House, Extensions of Remarks, Daily Digest).",
        "/daily-congressional-record/{volume_number}/{issue_number}/articles",
        &[VOLUME_NUMBER, ISSUE_NUMBER, LIMIT, OFFSET],
    ),
    ToolSpec::list(
        "list_bound_congressional_record",
        "List bound Congressional Record volumes, optionally for one year. The bound edition \
         is the permanent, final version of the Record.",
        "/bound-congressional-record/{year?}",
        "boundCongressionalRecord",
        &[YEAR_FILTER, LIMIT, OFFSET],
    ),
    ToolSpec::list(
        "list_bound_congressional_record_by_month",
        "List bound Congressional Record entries for a specific month.",
        "/bound-congressional-record/{year}/{month}",
        "boundCongressionalRecord",
        &[YEAR, MONTH, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_bound_congressional_record_by_date",
        "Get the bound Congressional Record entry for a specific date.",
        "/bound-congressional-record/{year}/{month}/{day}",
        &[YEAR, MONTH, DAY],
    ),
];
