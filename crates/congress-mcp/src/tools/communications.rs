//! House and Senate communications.

use super::spec::{ArgKind, ArgSpec, CONGRESS, EnumKind, LIMIT, OFFSET, ToolSpec, positive};

const HOUSE_TYPE: ArgSpec = ArgSpec::path(
    "communication_type",
    ArgKind::Enum(EnumKind::HouseCommunication),
    "Communication type: ec (Executive), pm (Presidential Message), pt (Petition), ml (Memorial)",
);
const SENATE_TYPE: ArgSpec = ArgSpec::path(
    "communication_type",
    ArgKind::Enum(EnumKind::SenateCommunication),
    "Communication type: ec (Executive), pom (Petition/Memorial), pm (Presidential Message)",
);
const COMMUNICATION_NUMBER: ArgSpec = positive("communication_number", "Communication number");

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::list(
        "list_house_communications",
        "List House communications by Congress and type: executive communications, \
         presidential messages, petitions, and memorials.",
        "/house-communication/{congress}/{communication_type}",
        "houseCommunications",
        &[CONGRESS, HOUSE_TYPE, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_house_communication",
        "Get detailed information about a specific House communication.",
        "/house-communication/{congress}/{communication_type}/{communication_number}",
        &[CONGRESS, HOUSE_TYPE, COMMUNICATION_NUMBER],
    ),
    ToolSpec::list(
        "list_senate_communications",
        "List Senate communications by Congress and type: executive communications, \
         petitions or memorials, and presidential messages.",
        "/senate-communication/{congress}/{communication_type}",
        "senateCommunications",
        &[CONGRESS, SENATE_TYPE, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_senate_communication",
        "Get detailed information about a specific Senate communication.",
        "/senate-communication/{congress}/{communication_type}/{communication_number}",
        &[CONGRESS, SENATE_TYPE, COMMUNICATION_NUMBER],
    ),
];
