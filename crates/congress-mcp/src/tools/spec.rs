//! Declarative tool descriptions.
//!
//! A tool is a path template plus typed arguments plus a result shape. The
//! catalog turns these into JSON schemas for `tools/list` and into client
//! calls for `tools/call`.

use congress_types::params::parse_param;
use congress_types::{
    AmendmentType, BillType, Chamber, HouseCommunicationType, LawType, ParamEnum, ReportType,
    SenateCommunicationType,
};
use serde_json::Value;

use super::args::Args;

/// Which closed enum an argument is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumKind {
    Bill,
    Amendment,
    Chamber,
    Law,
    Report,
    HouseCommunication,
    SenateCommunication,
}

impl EnumKind {
    pub fn codes(self) -> Vec<&'static str> {
        match self {
            EnumKind::Bill => BillType::codes(),
            EnumKind::Amendment => AmendmentType::codes(),
            EnumKind::Chamber => Chamber::codes(),
            EnumKind::Law => LawType::codes(),
            EnumKind::Report => ReportType::codes(),
            EnumKind::HouseCommunication => HouseCommunicationType::codes(),
            EnumKind::SenateCommunication => SenateCommunicationType::codes(),
        }
    }

    /// Validate and return the canonical code.
    pub(crate) fn parse(self, field: &str, value: &Value) -> Result<&'static str, String> {
        match self {
            EnumKind::Bill => parse_param::<BillType>(field, value).map(ParamEnum::code),
            EnumKind::Amendment => parse_param::<AmendmentType>(field, value).map(ParamEnum::code),
            EnumKind::Chamber => parse_param::<Chamber>(field, value).map(ParamEnum::code),
            EnumKind::Law => parse_param::<LawType>(field, value).map(ParamEnum::code),
            EnumKind::Report => parse_param::<ReportType>(field, value).map(ParamEnum::code),
            EnumKind::HouseCommunication => {
                parse_param::<HouseCommunicationType>(field, value).map(ParamEnum::code)
            }
            EnumKind::SenateCommunication => {
                parse_param::<SenateCommunicationType>(field, value).map(ParamEnum::code)
            }
        }
    }
}

/// Value type and bounds of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Congress number, 1 to 200.
    Congress,
    Integer { min: i64, max: i64 },
    /// Identifier such as a bioguide ID or committee code.
    Text,
    /// Two-letter state code, upper-cased.
    State,
    Enum(EnumKind),
    /// `YYYY-MM-DD`.
    Date,
    /// `updateDate+asc` or `updateDate+desc`.
    Sort,
    Bool,
}

/// Where a validated argument ends up in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Substituted into the path template.
    Path,
    /// Sent as the named query parameter.
    Query(&'static str),
    /// Sent as `fromDateTime=<date>T00:00:00Z`.
    FromDate,
    /// Sent as `toDateTime=<date>T23:59:59Z`.
    ToDate,
    Limit,
    Offset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
    pub role: Role,
    pub required: bool,
    pub description: &'static str,
}

impl ArgSpec {
    pub const fn path(name: &'static str, kind: ArgKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            role: Role::Path,
            required: true,
            description,
        }
    }

    /// A path segment dropped from the URL when the argument is absent.
    pub const fn optional_path(
        name: &'static str,
        kind: ArgKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            role: Role::Path,
            required: false,
            description,
        }
    }

    pub const fn query(
        name: &'static str,
        key: &'static str,
        kind: ArgKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            role: Role::Query(key),
            required: false,
            description,
        }
    }
}

/// Builds the detail path for one list item, given the call's arguments.
pub type DetailPath = fn(&Value, &Args) -> Option<String>;

/// How a tool calls the client and shapes its result.
#[derive(Clone, Copy)]
pub enum Shape {
    /// One request, raw body.
    Single,
    /// One request with `limit`/`offset`, raw body.
    Window,
    /// Paginated fetch of the array at `items`.
    List { items: &'static str },
    /// Paginated fetch with each item merged with its detail record.
    Enriched {
        items: &'static str,
        detail: &'static str,
        detail_path: DetailPath,
    },
}

#[derive(Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Path template: `{name}` is required, `{name?}` is dropped when absent.
    pub path: &'static str,
    pub args: &'static [ArgSpec],
    pub shape: Shape,
    /// Upstream answers unknown identifiers with a 500 mentioning `NoneType`.
    pub missing_on_server_error: bool,
}

impl ToolSpec {
    const fn new(
        name: &'static str,
        description: &'static str,
        path: &'static str,
        args: &'static [ArgSpec],
        shape: Shape,
    ) -> Self {
        Self {
            name,
            description,
            path,
            args,
            shape,
            missing_on_server_error: false,
        }
    }

    pub const fn single(
        name: &'static str,
        description: &'static str,
        path: &'static str,
        args: &'static [ArgSpec],
    ) -> Self {
        Self::new(name, description, path, args, Shape::Single)
    }

    pub const fn window(
        name: &'static str,
        description: &'static str,
        path: &'static str,
        args: &'static [ArgSpec],
    ) -> Self {
        Self::new(name, description, path, args, Shape::Window)
    }

    pub const fn list(
        name: &'static str,
        description: &'static str,
        path: &'static str,
        items: &'static str,
        args: &'static [ArgSpec],
    ) -> Self {
        Self::new(name, description, path, args, Shape::List { items })
    }

    pub const fn enriched(
        name: &'static str,
        description: &'static str,
        path: &'static str,
        items: &'static str,
        detail: &'static str,
        detail_path: DetailPath,
        args: &'static [ArgSpec],
    ) -> Self {
        Self::new(
            name,
            description,
            path,
            args,
            Shape::Enriched {
                items,
                detail,
                detail_path,
            },
        )
    }

    pub const fn missing_on_server_error(mut self) -> Self {
        self.missing_on_server_error = true;
        self
    }
}

impl std::fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// A list item field as a string, accepting numbers too.
pub(crate) fn field(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// Shared argument definitions.

pub const CONGRESS: ArgSpec =
    ArgSpec::path("congress", ArgKind::Congress, "Congress number (e.g., 118)");

pub const LIMIT: ArgSpec = ArgSpec {
    name: "limit",
    kind: ArgKind::Integer {
        min: 1,
        max: u32::MAX as i64,
    },
    role: Role::Limit,
    required: false,
    description: "Maximum results to return",
};

pub const OFFSET: ArgSpec = ArgSpec {
    name: "offset",
    kind: ArgKind::Integer {
        min: 0,
        max: u32::MAX as i64,
    },
    role: Role::Offset,
    required: false,
    description: "Starting position for pagination",
};

pub const FROM_DATE: ArgSpec = ArgSpec {
    name: "from_date",
    kind: ArgKind::Date,
    role: Role::FromDate,
    required: false,
    description: "Filter by update date start (YYYY-MM-DD)",
};

pub const TO_DATE: ArgSpec = ArgSpec {
    name: "to_date",
    kind: ArgKind::Date,
    role: Role::ToDate,
    required: false,
    description: "Filter by update date end (YYYY-MM-DD)",
};

pub const SORT: ArgSpec = ArgSpec::query(
    "sort",
    "sort",
    ArgKind::Sort,
    "Sort order: updateDate+asc or updateDate+desc",
);

pub const CURRENT_MEMBER: ArgSpec = ArgSpec::query(
    "current_member",
    "currentMember",
    ArgKind::Bool,
    "Filter by current membership status",
);

pub const CHAMBER: ArgSpec = ArgSpec::path(
    "chamber",
    ArgKind::Enum(EnumKind::Chamber),
    "Chamber: house or senate",
);

pub const COMMITTEE_CODE: ArgSpec = ArgSpec::path(
    "committee_code",
    ArgKind::Text,
    "Committee system code (e.g., 'hsju00' for House Judiciary)",
);

pub const fn positive(name: &'static str, description: &'static str) -> ArgSpec {
    ArgSpec::path(
        name,
        ArgKind::Integer {
            min: 1,
            max: i64::MAX,
        },
        description,
    )
}
