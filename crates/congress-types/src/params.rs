//! Closed parameter enums accepted by Congress.gov endpoints.
//!
//! Each enum maps to the lowercase code the API expects in its URL paths.
//! Callers validate raw JSON arguments with [`parse_param`], which produces
//! prescriptive messages listing every accepted value so an agent can correct
//! its call instead of retrying the same input.

use std::fmt;

/// A closed set of string codes used as a request parameter.
pub trait ParamEnum: Sized + Copy + 'static {
    /// Every variant, in the order they are presented to callers.
    const ALL: &'static [Self];

    /// The wire code used in API paths (e.g. `"hr"`).
    fn code(self) -> &'static str;

    /// Upper-case short name (e.g. `"HR"`).
    fn name(self) -> &'static str;

    /// Human-readable description.
    fn description(self) -> &'static str;

    /// Case-insensitive lookup by code.
    fn from_code(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.code().eq_ignore_ascii_case(value))
    }

    /// All codes joined for use in messages and schemas.
    fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.code()).collect()
    }
}

macro_rules! param_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => ($code:literal, $short:literal, $desc:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant ),+
        }

        impl ParamEnum for $name {
            const ALL: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn code(self) -> &'static str {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $short ),+
                }
            }

            fn description(self) -> &'static str {
                match self {
                    $( $name::$variant => $desc ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as ParamEnum>::from_code(s).ok_or_else(|| {
                    format!(
                        "'{s}' is not a valid {}; expected one of: {}",
                        stringify!($name),
                        <$name as ParamEnum>::codes().join(", ")
                    )
                })
            }
        }
    };
}

param_enum! {
    /// Bill and resolution type codes.
    pub enum BillType {
        Hr => ("hr", "HR", "House Bill - Legislation originating in the House"),
        S => ("s", "S", "Senate Bill - Legislation originating in the Senate"),
        Hjres => ("hjres", "HJRES", "House Joint Resolution - Used for constitutional amendments and continuing resolutions"),
        Sjres => ("sjres", "SJRES", "Senate Joint Resolution - Used for constitutional amendments and continuing resolutions"),
        Hconres => ("hconres", "HCONRES", "House Concurrent Resolution - Expresses congressional sentiment, no force of law"),
        Sconres => ("sconres", "SCONRES", "Senate Concurrent Resolution - Expresses congressional sentiment, no force of law"),
        Hres => ("hres", "HRES", "House Simple Resolution - Addresses House matters only"),
        Sres => ("sres", "SRES", "Senate Simple Resolution - Addresses Senate matters only"),
    }
}

param_enum! {
    /// Amendment type codes.
    pub enum AmendmentType {
        Hamdt => ("hamdt", "HAMDT", "House Amendment"),
        Samdt => ("samdt", "SAMDT", "Senate Amendment"),
        Suamdt => ("suamdt", "SUAMDT", "Senate Unprinted Amendment"),
    }
}

param_enum! {
    /// Congressional chambers.
    pub enum Chamber {
        House => ("house", "HOUSE", "House of Representatives (435 voting members)"),
        Senate => ("senate", "SENATE", "Senate (100 members, 2 per state)"),
    }
}

param_enum! {
    /// Law type codes.
    pub enum LawType {
        Pub => ("pub", "PUB", "Public Law - Affects the general public"),
        Priv => ("priv", "PRIV", "Private Law - Affects specific individuals or entities"),
    }
}

param_enum! {
    /// Committee report type codes.
    pub enum ReportType {
        Hrpt => ("hrpt", "HRPT", "House Report"),
        Srpt => ("srpt", "SRPT", "Senate Report"),
        Erpt => ("erpt", "ERPT", "Executive Report (Senate only)"),
    }
}

param_enum! {
    /// House communication type codes.
    pub enum HouseCommunicationType {
        Ec => ("ec", "EC", "Executive Communication - From executive branch agencies"),
        Pm => ("pm", "PM", "Presidential Message - From the President"),
        Pt => ("pt", "PT", "Petition - From citizens or organizations"),
        Ml => ("ml", "ML", "Memorial - Formal statements from state legislatures"),
    }
}

param_enum! {
    /// Senate communication type codes.
    pub enum SenateCommunicationType {
        Ec => ("ec", "EC", "Executive Communication - From executive branch agencies"),
        Pom => ("pom", "POM", "Petition or Memorial - From citizens, organizations, or state legislatures"),
        Pm => ("pm", "PM", "Presidential Message - From the President"),
    }
}

/// Validate a raw JSON argument against a parameter enum.
///
/// The error string is meant to be shown to the calling agent verbatim.
pub fn parse_param<E: ParamEnum>(field: &str, value: &serde_json::Value) -> Result<E, String> {
    if let Some(s) = value.as_str() {
        if let Some(parsed) = E::from_code(s) {
            return Ok(parsed);
        }
    }
    Err(prescriptive_message(field, value, &E::codes()))
}

/// Build the message for an invalid enum value.
pub fn prescriptive_message(field: &str, value: &serde_json::Value, codes: &[&str]) -> String {
    let valid = codes.join(", ");
    match value {
        serde_json::Value::Null => format!(
            "null is not valid for '{field}'. This field is REQUIRED and cannot be null. \
             Must be one of: {valid}. Please retry with one of these exact string values."
        ),
        serde_json::Value::Bool(b) => {
            let example = codes.first().copied().unwrap_or_default();
            format!(
                "Boolean {b} is not valid for '{field}'. This field requires a STRING value, \
                 not a boolean. Must be one of: {valid}. Please retry with one of these exact \
                 string values (e.g. \"{example}\")."
            )
        }
        serde_json::Value::String(s) => format!(
            "'{s}' is not valid for '{field}'. Must be one of: {valid}. \
             Please retry with one of these exact string values."
        ),
        other => format!(
            "'{other}' is not valid for '{field}'. Must be one of: {valid}. \
             Please retry with one of these exact string values."
        ),
    }
}
