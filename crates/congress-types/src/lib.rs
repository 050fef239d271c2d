//! Shared error taxonomy and parameter enums for congress-mcp.

pub mod error;
pub mod params;

pub use error::{ApiError, ConfigError, CongressError, ToolError};
pub use params::{
    AmendmentType, BillType, Chamber, HouseCommunicationType, LawType, ParamEnum, ReportType,
    SenateCommunicationType,
};
