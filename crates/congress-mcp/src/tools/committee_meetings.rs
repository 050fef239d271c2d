//! Committee meetings.

use serde_json::Value;

use super::args::Args;
use super::spec::{ArgKind, ArgSpec, CHAMBER, CONGRESS, LIMIT, OFFSET, ToolSpec, field};

const EVENT_ID: ArgSpec = ArgSpec::path("event_id", ArgKind::Text, "Meeting event ID");

fn meeting_detail(item: &Value, args: &Args) -> Option<String> {
    let congress = args.segment("congress")?;
    let chamber = args.segment("chamber")?;
    let event_id = field(item, "eventId")?;
    Some(format!("/committee-meeting/{congress}/{chamber}/{event_id}"))
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::enriched(
        "list_committee_meetings",
        "List committee meetings by Congress and chamber with full details: meeting type, \
         committees, witnesses, documents, and related legislation.",
        "/committee-meeting/{congress}/{chamber}",
        "committeeMeetings",
        "committeeMeeting",
        meeting_detail,
        &[CONGRESS, CHAMBER, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_committee_meeting",
        "Get detailed information about a specific committee meeting.",
        "/committee-meeting/{congress}/{chamber}/{event_id}",
        &[CONGRESS, CHAMBER, EVENT_ID],
    ),
];
