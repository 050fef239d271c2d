//! Committees and what is referred to them.

use serde_json::Value;

use super::args::Args;
use super::spec::{
    ArgKind, ArgSpec, CHAMBER, COMMITTEE_CODE, CONGRESS, FROM_DATE, LIMIT, OFFSET, TO_DATE,
    ToolSpec, field,
};

const SENATE_CODE: ArgSpec =
    ArgSpec::path("committee_code", ArgKind::Text, "Senate committee system code");
const HOUSE_CODE: ArgSpec =
    ArgSpec::path("committee_code", ArgKind::Text, "House committee system code");

const COMMITTEE_DATED_PAGE: &[ArgSpec] =
    &[CHAMBER, COMMITTEE_CODE, FROM_DATE, TO_DATE, LIMIT, OFFSET];

/// `/committee/[{congress}/]{chamber}/{systemCode}`; the requested chamber
/// wins over the item's.
fn committee_detail(item: &Value, args: &Args) -> Option<String> {
    let chamber = args
        .segment("chamber")
        .or_else(|| field(item, "chamber"))?
        .to_ascii_lowercase();
    let code = field(item, "systemCode")?;
    Some(match args.segment("congress") {
        Some(congress) => format!("/committee/{congress}/{chamber}/{code}"),
        None => format!("/committee/{chamber}/{code}"),
    })
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::enriched(
        "list_committees",
        "List all congressional committees with full details. Returns committees from both \
         House and Senate with membership, subcommittees, and historical information.",
        "/committee",
        "committees",
        "committee",
        committee_detail,
        &[FROM_DATE, TO_DATE, LIMIT, OFFSET],
    ),
    ToolSpec::enriched(
        "list_committees_by_chamber",
        "List committees by chamber with full details, including membership, \
         subcommittees, and historical information.",
        "/committee/{chamber}",
        "committees",
        "committee",
        committee_detail,
        &[CHAMBER, FROM_DATE, TO_DATE, LIMIT, OFFSET],
    ),
    ToolSpec::enriched(
        "list_committees_by_congress",
        "List committees for a specific Congress and chamber with full details. Committee \
         membership and structure may vary by Congress.",
        "/committee/{congress}/{chamber}",
        "committees",
        "committee",
        committee_detail,
        &[CONGRESS, CHAMBER, FROM_DATE, TO_DATE, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_committee",
        "Get detailed information about a specific committee, including membership, \
         subcommittees, and historical information.",
        "/committee/{chamber}/{committee_code}",
        &[CHAMBER, COMMITTEE_CODE],
    ),
    ToolSpec::single(
        "get_committee_by_congress",
        "Get committee composition and details for a specific Congress.",
        "/committee/{congress}/{chamber}/{committee_code}",
        &[CONGRESS, CHAMBER, COMMITTEE_CODE],
    ),
    ToolSpec::window(
        "get_committee_bills",
        "Get bills that have been referred to or reported by a committee.",
        "/committee/{chamber}/{committee_code}/bills",
        COMMITTEE_DATED_PAGE,
    ),
    ToolSpec::window(
        "get_committee_reports_list",
        "Get reports issued by a committee, including bill reports and oversight reports.",
        "/committee/{chamber}/{committee_code}/reports",
        COMMITTEE_DATED_PAGE,
    ),
    ToolSpec::window(
        "get_committee_nominations",
        "Get nominations referred to a Senate committee. Only Senate committees consider \
         nominations.",
        "/committee/senate/{committee_code}/nominations",
        &[SENATE_CODE, LIMIT, OFFSET],
    ),
    ToolSpec::window(
        "get_committee_house_communications",
        "Get House communications referred to a committee: executive communications, \
         presidential messages, petitions, and memorials.",
        "/committee/house/{committee_code}/house-communication",
        &[HOUSE_CODE, LIMIT, OFFSET],
    ),
    ToolSpec::window(
        "get_committee_senate_communications",
        "Get Senate communications referred to a committee: executive communications, \
         petitions, memorials, and presidential messages.",
        "/committee/senate/{committee_code}/senate-communication",
        &[SENATE_CODE, LIMIT, OFFSET],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::args::validate;
    use serde_json::json;

    #[test]
    fn detail_path_uses_item_chamber_when_unfiltered() {
        let item = json!({"chamber": "House", "systemCode": "hsag00"});
        assert_eq!(
            committee_detail(&item, &Args::default()).as_deref(),
            Some("/committee/house/hsag00")
        );
    }

    #[test]
    fn detail_path_is_scoped_to_requested_congress() {
        let args = validate(
            &[CONGRESS, CHAMBER],
            Some(&json!({"congress": 118, "chamber": "senate"})),
        )
        .unwrap();
        let item = json!({"chamber": "Senate", "systemCode": "ssju00"});
        assert_eq!(
            committee_detail(&item, &args).as_deref(),
            Some("/committee/118/senate/ssju00")
        );
    }

    #[test]
    fn item_without_system_code_is_not_enriched() {
        let item = json!({"chamber": "House"});
        assert_eq!(committee_detail(&item, &Args::default()), None);
    }
}
