//! Amendments.

use super::spec::{ArgKind, ArgSpec, CONGRESS, EnumKind, LIMIT, OFFSET, ToolSpec, positive};

const AMENDMENT_TYPE: ArgSpec = ArgSpec::path(
    "amendment_type",
    ArgKind::Enum(EnumKind::Amendment),
    "Amendment type: hamdt (House), samdt (Senate), suamdt (Senate Unprinted)",
);
const AMENDMENT_NUMBER: ArgSpec = positive("amendment_number", "Amendment number");

const AMENDMENT: &[ArgSpec] = &[CONGRESS, AMENDMENT_TYPE, AMENDMENT_NUMBER];
const AMENDMENT_PAGE: &[ArgSpec] = &[CONGRESS, AMENDMENT_TYPE, AMENDMENT_NUMBER, LIMIT, OFFSET];

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::list(
        "list_amendments",
        "List all amendments for a specific Congress. Returns House and Senate amendments \
         with basic metadata.",
        "/amendment/{congress}",
        "amendments",
        &[CONGRESS, LIMIT, OFFSET],
    ),
    ToolSpec::list(
        "list_amendments_by_type",
        "List amendments filtered by type: hamdt (House Amendment), samdt (Senate \
         Amendment), suamdt (Senate Unprinted Amendment).",
        "/amendment/{congress}/{amendment_type}",
        "amendments",
        &[CONGRESS, AMENDMENT_TYPE, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_amendment",
        "Get detailed information about a specific amendment, including sponsor, purpose, \
         and the measure it amends.",
        "/amendment/{congress}/{amendment_type}/{amendment_number}",
        AMENDMENT,
    ),
    ToolSpec::window(
        "get_amendment_actions",
        "Get all actions taken on an amendment.",
        "/amendment/{congress}/{amendment_type}/{amendment_number}/actions",
        AMENDMENT_PAGE,
    ),
    ToolSpec::window(
        "get_amendment_cosponsors",
        "Get cosponsors of an amendment.",
        "/amendment/{congress}/{amendment_type}/{amendment_number}/cosponsors",
        AMENDMENT_PAGE,
    ),
    ToolSpec::window(
        "get_amendment_amendments",
        "Get amendments to an amendment (second-degree amendments).",
        "/amendment/{congress}/{amendment_type}/{amendment_number}/amendments",
        AMENDMENT_PAGE,
    ),
    ToolSpec::single(
        "get_amendment_text",
        "Get text versions of an amendment with links to available formats.",
        "/amendment/{congress}/{amendment_type}/{amendment_number}/text",
        AMENDMENT,
    ),
];
