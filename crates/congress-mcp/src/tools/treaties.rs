//! Treaties submitted to the Senate.

use super::spec::{ArgKind, ArgSpec, CONGRESS, LIMIT, OFFSET, ToolSpec, positive};

const CONGRESS_FILTER: ArgSpec = ArgSpec::optional_path(
    "congress",
    ArgKind::Congress,
    "Congress number (e.g., 118). If not provided, lists all treaties.",
);
const TREATY_NUMBER: ArgSpec = positive("treaty_number", "Treaty number");
const TREATY_SUFFIX: ArgSpec = ArgSpec::path(
    "treaty_suffix",
    ArgKind::Text,
    "Treaty part suffix (e.g., 'A', 'B') for partitioned treaties",
);
const TREATY_SUFFIX_FILTER: ArgSpec = ArgSpec::optional_path(
    "treaty_suffix",
    ArgKind::Text,
    "Treaty part suffix for partitioned treaties",
);

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::list(
        "list_treaties",
        "List treaties submitted to the Senate for advice and consent, optionally for one \
         Congress.",
        "/treaty/{congress?}",
        "treaties",
        &[CONGRESS_FILTER, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_treaty",
        "Get detailed information about a specific treaty: topic, countries, transmittal \
         date, and ratification status.",
        "/treaty/{congress}/{treaty_number}",
        &[CONGRESS, TREATY_NUMBER],
    ),
    ToolSpec::single(
        "get_treaty_part",
        "Get information about a specific part of a partitioned treaty.",
        "/treaty/{congress}/{treaty_number}/{treaty_suffix}",
        &[CONGRESS, TREATY_NUMBER, TREATY_SUFFIX],
    ),
    ToolSpec::window(
        "get_treaty_actions",
        "Get actions taken on a treaty, or on one part of a partitioned treaty.",
        "/treaty/{congress}/{treaty_number}/{treaty_suffix?}/actions",
        &[CONGRESS, TREATY_NUMBER, TREATY_SUFFIX_FILTER, LIMIT, OFFSET],
    ),
    ToolSpec::window(
        "get_treaty_committees",
        "Get committees assigned to a treaty.",
        "/treaty/{congress}/{treaty_number}/committees",
        &[CONGRESS, TREATY_NUMBER, LIMIT, OFFSET],
    ),
];
