//! CRS bill summaries.

use super::spec::{
    ArgKind, ArgSpec, CONGRESS, EnumKind, FROM_DATE, LIMIT, OFFSET, SORT, TO_DATE, ToolSpec,
};

const BILL_TYPE: ArgSpec = ArgSpec::path(
    "bill_type",
    ArgKind::Enum(EnumKind::Bill),
    "REQUIRED bill type string. Must be one of: hr, s, hjres, sjres, hconres, sconres, hres, \
     sres. Example: 'hr' for H.R. bills",
);

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::list(
        "list_summaries",
        "List recent bill summaries written by the Congressional Research Service.",
        "/summaries",
        "summaries",
        &[FROM_DATE, TO_DATE, SORT, LIMIT, OFFSET],
    ),
    ToolSpec::list(
        "list_summaries_by_congress",
        "List bill summaries for a specific Congress.",
        "/summaries/{congress}",
        "summaries",
        &[CONGRESS, FROM_DATE, TO_DATE, SORT, LIMIT, OFFSET],
    ),
    ToolSpec::list(
        "list_summaries_by_type",
        "List bill summaries filtered by Congress and bill type.",
        "/summaries/{congress}/{bill_type}",
        "summaries",
        &[CONGRESS, BILL_TYPE, FROM_DATE, TO_DATE, SORT, LIMIT, OFFSET],
    ),
];
