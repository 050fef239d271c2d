//! Members of Congress.

use serde_json::Value;

use super::args::Args;
use super::spec::{
    ArgKind, ArgSpec, CONGRESS, CURRENT_MEMBER, FROM_DATE, LIMIT, OFFSET, SORT, TO_DATE,
    ToolSpec, field,
};

const BIOGUIDE_ID: ArgSpec = ArgSpec::path(
    "bioguide_id",
    ArgKind::Text,
    "Member bioguide ID (e.g., 'P000197' for Nancy Pelosi)",
);
const STATE: ArgSpec = ArgSpec::path(
    "state",
    ArgKind::State,
    "Two-letter state code (e.g., 'CA', 'NY', 'TX')",
);
const DISTRICT: ArgSpec = ArgSpec::path(
    "district",
    ArgKind::Integer {
        min: 0,
        max: i64::MAX,
    },
    "Congressional district number (0 for at-large)",
);

const MEMBER_PAGE: &[ArgSpec] = &[BIOGUIDE_ID, LIMIT, OFFSET];

fn member_detail(item: &Value, _args: &Args) -> Option<String> {
    field(item, "bioguideId").map(|id| format!("/member/{id}"))
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::enriched(
        "list_members",
        "List all members of Congress with full details: biographical info, party \
         affiliation, terms served, leadership positions, and committee assignments.",
        "/member",
        "members",
        "member",
        member_detail,
        &[FROM_DATE, TO_DATE, SORT, LIMIT, OFFSET, CURRENT_MEMBER],
    ),
    ToolSpec::single(
        "get_member",
        "Get detailed information about a specific member of Congress: biographical data, \
         party affiliation, terms served, leadership positions, and committee assignments.",
        "/member/{bioguide_id}",
        &[BIOGUIDE_ID],
    ),
    ToolSpec::window(
        "get_member_sponsored_legislation",
        "Get legislation sponsored by a member.",
        "/member/{bioguide_id}/sponsored-legislation",
        MEMBER_PAGE,
    ),
    ToolSpec::window(
        "get_member_cosponsored_legislation",
        "Get legislation cosponsored by a member.",
        "/member/{bioguide_id}/cosponsored-legislation",
        MEMBER_PAGE,
    ),
    ToolSpec::enriched(
        "list_members_by_congress",
        "List members who served in a specific Congress with full details.",
        "/member/congress/{congress}",
        "members",
        "member",
        member_detail,
        &[CONGRESS, FROM_DATE, TO_DATE, SORT, LIMIT, OFFSET, CURRENT_MEMBER],
    ),
    ToolSpec::enriched(
        "list_members_by_state",
        "List members from a specific state with full details.",
        "/member/{state}",
        "members",
        "member",
        member_detail,
        &[STATE, FROM_DATE, TO_DATE, SORT, LIMIT, OFFSET, CURRENT_MEMBER],
    ),
    ToolSpec::enriched(
        "list_members_by_state_and_district",
        "List representatives from a specific congressional district with full details.",
        "/member/{state}/{district}",
        "members",
        "member",
        member_detail,
        &[STATE, DISTRICT, FROM_DATE, TO_DATE, SORT, LIMIT, OFFSET, CURRENT_MEMBER],
    ),
];
