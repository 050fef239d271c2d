//! Congress.gov tools.
//!
//! Each domain module declares a static table of [`ToolSpec`]s; the
//! [`ToolRegistry`] indexes them by name and runs them against the client.

pub mod args;
pub mod registry;
pub mod spec;

mod amendments;
mod bills;
mod committee_meetings;
mod committee_prints;
mod committee_reports;
mod committees;
mod communications;
mod congress;
mod congressional_record;
mod crs_reports;
mod hearings;
mod house_requirements;
mod laws;
mod members;
mod nominations;
mod summaries;
mod treaties;
mod votes;

pub use args::{ArgValue, Args};
pub use registry::{ToolRegistry, list_output};
pub use spec::{ArgKind, ArgSpec, EnumKind, Role, Shape, ToolSpec};

/// Tool tables in `tools/list` order.
pub(crate) const ALL_GROUPS: &[&[ToolSpec]] = &[
    bills::TOOLS,
    amendments::TOOLS,
    laws::TOOLS,
    members::TOOLS,
    committees::TOOLS,
    committee_meetings::TOOLS,
    committee_prints::TOOLS,
    committee_reports::TOOLS,
    hearings::TOOLS,
    nominations::TOOLS,
    treaties::TOOLS,
    congressional_record::TOOLS,
    communications::TOOLS,
    house_requirements::TOOLS,
    votes::TOOLS,
    summaries::TOOLS,
    congress::TOOLS,
    crs_reports::TOOLS,
];
