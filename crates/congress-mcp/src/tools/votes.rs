//! House roll call votes.

use serde_json::Value;

use super::args::Args;
use super::spec::{ArgKind, ArgSpec, CONGRESS, LIMIT, OFFSET, SORT, ToolSpec, field, positive};

const SESSION: ArgSpec = ArgSpec::path(
    "session",
    ArgKind::Integer { min: 1, max: 2 },
    "Session number (1 or 2)",
);
const ROLL_CALL_NUMBER: ArgSpec = positive("roll_call_number", "Roll call vote number");

fn vote_detail(item: &Value, args: &Args) -> Option<String> {
    let congress = args.segment("congress")?;
    let session = args.segment("session")?;
    let roll_call = field(item, "rollCallNumber")?;
    Some(format!("/house-vote/{congress}/{session}/{roll_call}"))
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::enriched(
        "list_house_votes",
        "List House roll call votes for a Congress and session with full details: question, \
         result, vote totals by party, and the legislation voted on.",
        "/house-vote/{congress}/{session}",
        "houseRollCallVotes",
        "houseRollCallVote",
        vote_detail,
        &[CONGRESS, SESSION, SORT, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_house_vote",
        "Get detailed information about a specific House roll call vote.",
        "/house-vote/{congress}/{session}/{roll_call_number}",
        &[CONGRESS, SESSION, ROLL_CALL_NUMBER],
    ),
    ToolSpec::window(
        "get_house_vote_members",
        "Get individual member votes for a House roll call vote.",
        "/house-vote/{congress}/{session}/{roll_call_number}/members",
        &[CONGRESS, SESSION, ROLL_CALL_NUMBER, LIMIT, OFFSET],
    ),
];
