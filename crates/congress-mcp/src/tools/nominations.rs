//! Presidential nominations.

use super::spec::{ArgSpec, CONGRESS, LIMIT, OFFSET, ToolSpec, positive};

const NOMINATION_NUMBER: ArgSpec = positive("nomination_number", "Nomination number");
const ORDINAL: ArgSpec = positive(
    "ordinal",
    "Position of nominee within the nomination (1 for first nominee)",
);

const NOMINATION_PAGE: &[ArgSpec] = &[CONGRESS, NOMINATION_NUMBER, LIMIT, OFFSET];

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::list(
        "list_nominations",
        "List presidential nominations for a specific Congress. Nominations include cabinet \
         positions, judges, ambassadors, and military promotions.",
        "/nomination/{congress}",
        "nominations",
        &[CONGRESS, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_nomination",
        "Get detailed information about a specific nomination: nominee, position, \
         organization, status, and actions.",
        "/nomination/{congress}/{nomination_number}",
        &[CONGRESS, NOMINATION_NUMBER],
    ),
    ToolSpec::single(
        "get_nomination_nominees",
        "Get information about a specific nominee within a nomination. Some nominations \
         (e.g., military promotions) contain many nominees.",
        "/nomination/{congress}/{nomination_number}/{ordinal}",
        &[CONGRESS, NOMINATION_NUMBER, ORDINAL],
    ),
    ToolSpec::window(
        "get_nomination_actions",
        "Get actions taken on a nomination: committee referral, hearings, votes, and \
         confirmation.",
        "/nomination/{congress}/{nomination_number}/actions",
        NOMINATION_PAGE,
    ),
    ToolSpec::window(
        "get_nomination_committees",
        "Get committees assigned to a nomination.",
        "/nomination/{congress}/{nomination_number}/committees",
        NOMINATION_PAGE,
    ),
    ToolSpec::window(
        "get_nomination_hearings",
        "Get printed hearings related to a nomination.",
        "/nomination/{congress}/{nomination_number}/hearings",
        NOMINATION_PAGE,
    ),
];
