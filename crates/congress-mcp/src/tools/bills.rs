//! Bills and their sub-resources.

use serde_json::Value;

use super::args::Args;
use super::spec::{
    ArgKind, ArgSpec, CONGRESS, EnumKind, FROM_DATE, LIMIT, OFFSET, SORT, TO_DATE, ToolSpec,
    field, positive,
};

const BILL_TYPE: ArgSpec = ArgSpec::path(
    "bill_type",
    ArgKind::Enum(EnumKind::Bill),
    "REQUIRED bill type string. Must be one of: hr (House Bill), s (Senate Bill), \
     hjres (House Joint Resolution), sjres (Senate Joint Resolution), hconres (House \
     Concurrent Resolution), sconres (Senate Concurrent Resolution), hres (House Simple \
     Resolution), sres (Senate Simple Resolution). Example: 'hr' for H.R. bills",
);
const BILL_NUMBER: ArgSpec = positive("bill_number", "Bill number");

const LISTING: &[ArgSpec] = &[CONGRESS, LIMIT, OFFSET, FROM_DATE, TO_DATE, SORT];
const LISTING_BY_TYPE: &[ArgSpec] = &[CONGRESS, BILL_TYPE, FROM_DATE, TO_DATE, SORT, LIMIT, OFFSET];
const BILL: &[ArgSpec] = &[CONGRESS, BILL_TYPE, BILL_NUMBER];
const BILL_PAGE: &[ArgSpec] = &[CONGRESS, BILL_TYPE, BILL_NUMBER, LIMIT, OFFSET];

/// `/bill/{congress}/{type}/{number}` for a list item. The listing's
/// congress wins over the item's.
pub(crate) fn bill_detail(item: &Value, args: &Args) -> Option<String> {
    let congress = args.segment("congress").or_else(|| field(item, "congress"))?;
    let bill_type = args
        .segment("bill_type")
        .or_else(|| field(item, "type"))?
        .to_ascii_lowercase();
    let number = field(item, "number")?;
    Some(format!("/bill/{congress}/{bill_type}/{number}"))
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::enriched(
        "list_bills",
        "List all bills for a specific Congress. Returns bills with full details including \
         sponsors, cosponsors, committees, actions, and text versions.",
        "/bill/{congress}",
        "bills",
        "bill",
        bill_detail,
        LISTING,
    ),
    ToolSpec::enriched(
        "list_bills_by_type",
        "List bills filtered by Congress and bill type (hr, s, hjres, sjres, hconres, \
         sconres, hres, sres). Returns bills with full details including sponsors, \
         cosponsors, committees, actions, and text versions.",
        "/bill/{congress}/{bill_type}",
        "bills",
        "bill",
        bill_detail,
        LISTING_BY_TYPE,
    ),
    ToolSpec::single(
        "get_bill",
        "Get detailed information about a specific bill, including sponsors, cosponsors, \
         committees, actions, related bills, subjects, and text versions.",
        "/bill/{congress}/{bill_type}/{bill_number}",
        BILL,
    ),
    ToolSpec::window(
        "get_bill_actions",
        "Get all legislative actions taken on a bill: committee referrals, floor votes, \
         amendments, passage, presidential actions, and becoming law.",
        "/bill/{congress}/{bill_type}/{bill_number}/actions",
        BILL_PAGE,
    ),
    ToolSpec::window(
        "get_bill_amendments",
        "Get amendments proposed to a bill, both House and Senate, with their status and actions.",
        "/bill/{congress}/{bill_type}/{bill_number}/amendments",
        BILL_PAGE,
    ),
    ToolSpec::window(
        "get_bill_committees",
        "Get committees that have considered or reported on a bill, including subcommittees.",
        "/bill/{congress}/{bill_type}/{bill_number}/committees",
        BILL_PAGE,
    ),
    ToolSpec::window(
        "get_bill_cosponsors",
        "Get cosponsors of a bill with their bioguide ID, name, party, and state.",
        "/bill/{congress}/{bill_type}/{bill_number}/cosponsors",
        BILL_PAGE,
    ),
    ToolSpec::window(
        "get_bill_related_bills",
        "Get bills related to this bill: identical bills, companion bills, and bills with \
         related subject matter.",
        "/bill/{congress}/{bill_type}/{bill_number}/relatedbills",
        BILL_PAGE,
    ),
    ToolSpec::window(
        "get_bill_subjects",
        "Get legislative subjects assigned to a bill: the policy areas and topics that \
         describe its content.",
        "/bill/{congress}/{bill_type}/{bill_number}/subjects",
        BILL_PAGE,
    ),
    ToolSpec::window(
        "get_bill_summaries",
        "Get CRS summaries of a bill, written by the Congressional Research Service at \
         various stages of the legislative process.",
        "/bill/{congress}/{bill_type}/{bill_number}/summaries",
        BILL_PAGE,
    ),
    ToolSpec::window(
        "get_bill_text",
        "Get text versions of a bill (introduced, reported, engrossed, enrolled) with links \
         to PDF, XML, and HTML formats.",
        "/bill/{congress}/{bill_type}/{bill_number}/text",
        BILL_PAGE,
    ),
    ToolSpec::window(
        "get_bill_titles",
        "Get all titles of a bill, including official titles, short titles, and popular names.",
        "/bill/{congress}/{bill_type}/{bill_number}/titles",
        BILL_PAGE,
    ),
];
