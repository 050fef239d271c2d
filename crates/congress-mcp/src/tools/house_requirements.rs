//! House requirements: reporting obligations placed on executive agencies.

use super::spec::{ArgSpec, LIMIT, OFFSET, ToolSpec, positive};

const REQUIREMENT_NUMBER: ArgSpec = positive("requirement_number", "Requirement number");

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::list(
        "list_house_requirements",
        "List House requirements: reports and communications that executive agencies must \
         submit to the House.",
        "/house-requirement",
        "houseRequirements",
        &[LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_house_requirement",
        "Get detailed information about a specific House requirement.",
        "/house-requirement/{requirement_number}",
        &[REQUIREMENT_NUMBER],
    ),
    ToolSpec::window(
        "get_house_requirement_communications",
        "Get communications that match a House requirement.",
        "/house-requirement/{requirement_number}/matching-communications",
        &[REQUIREMENT_NUMBER, LIMIT, OFFSET],
    ),
];
