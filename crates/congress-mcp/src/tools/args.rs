//! Tool argument validation.
//!
//! Every message produced here is returned to the calling agent as-is, so
//! each one names the argument and what would have been accepted.

use std::fmt;

use chrono::NaiveDate;
use congress_api::{QueryParams, QueryValue};
use congress_types::params::prescriptive_message;
use serde_json::{Map, Value};

use super::spec::{ArgKind, ArgSpec, Role};

const MAX_CONGRESS: i64 = 200;

/// A validated argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Int(i64),
    Str(String),
    Bool(bool),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Int(n) => write!(f, "{n}"),
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&ArgValue> for QueryValue {
    fn from(value: &ArgValue) -> Self {
        match value {
            ArgValue::Int(n) => QueryValue::Int(*n),
            ArgValue::Str(s) => QueryValue::Str(s.clone()),
            ArgValue::Bool(b) => QueryValue::Bool(*b),
        }
    }
}

/// Arguments that passed validation, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: Vec<(ArgSpec, ArgValue)>,
}

impl Args {
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values
            .iter()
            .find(|(spec, _)| spec.name == name)
            .map(|(_, value)| value)
    }

    /// The argument rendered as a path segment.
    pub fn segment(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }

    /// Substitute `{name}` and `{name?}` segments of a path template.
    pub fn render_path(&self, template: &str) -> Result<String, String> {
        let mut path = String::with_capacity(template.len() + 16);
        for segment in template.split('/').filter(|s| !s.is_empty()) {
            let Some(inner) = segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
            else {
                path.push('/');
                path.push_str(segment);
                continue;
            };

            let (name, optional) = match inner.strip_suffix('?') {
                Some(name) => (name, true),
                None => (inner, false),
            };
            match self.segment(name) {
                Some(value) => {
                    path.push('/');
                    path.push_str(&value);
                }
                None if optional => {}
                None => return Err(format!("Missing required argument '{name}'")),
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }

    /// Query parameters for every argument that is not a path segment or
    /// page control.
    pub fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        for (spec, value) in &self.values {
            match spec.role {
                Role::Query(key) => {
                    params.insert(key.to_string(), value.into());
                }
                Role::FromDate => {
                    params.insert("fromDateTime".into(), format!("{value}T00:00:00Z").into());
                }
                Role::ToDate => {
                    params.insert("toDateTime".into(), format!("{value}T23:59:59Z").into());
                }
                Role::Path | Role::Limit | Role::Offset => {}
            }
        }
        params
    }

    pub fn limit(&self) -> Option<u32> {
        self.page_control(Role::Limit)
    }

    pub fn offset(&self) -> u32 {
        self.page_control(Role::Offset).unwrap_or(0)
    }

    fn page_control(&self, role: Role) -> Option<u32> {
        self.values.iter().find_map(|(spec, value)| match value {
            ArgValue::Int(n) if spec.role == role => u32::try_from(*n).ok(),
            _ => None,
        })
    }
}

/// Validate raw tool arguments against their declarations.
///
/// `null` counts as absent for optional arguments. Unknown names are
/// rejected so a typo does not silently drop a filter.
pub fn validate(specs: &[ArgSpec], raw: Option<&Value>) -> Result<Args, String> {
    let empty = Map::new();
    let object = match raw {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(object)) => object,
        Some(_) => return Err("Tool arguments must be a JSON object".into()),
    };

    if let Some(unknown) = object
        .keys()
        .find(|key| !specs.iter().any(|spec| spec.name == key.as_str()))
    {
        return Err(if specs.is_empty() {
            format!("Unknown argument '{unknown}'. This tool takes no arguments.")
        } else {
            let accepted: Vec<&str> = specs.iter().map(|spec| spec.name).collect();
            format!(
                "Unknown argument '{unknown}'. Accepted arguments: {}",
                accepted.join(", ")
            )
        });
    }

    let mut values = Vec::new();
    for spec in specs {
        match object.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    return Err(missing(spec));
                }
            }
            Some(value) => values.push((*spec, parse(spec, value)?)),
        }
    }

    let args = Args { values };
    check_date_order(specs, &args)?;
    Ok(args)
}

fn missing(spec: &ArgSpec) -> String {
    match spec.kind {
        ArgKind::Enum(kind) => prescriptive_message(spec.name, &Value::Null, &kind.codes()),
        _ => format!(
            "Missing required argument '{}' ({})",
            spec.name, spec.description
        ),
    }
}

fn parse(spec: &ArgSpec, value: &Value) -> Result<ArgValue, String> {
    let name = spec.name;
    match spec.kind {
        ArgKind::Congress => {
            let n = integer(name, value)?;
            if !(1..=MAX_CONGRESS).contains(&n) {
                return Err(format!(
                    "'{name}' must be a Congress number between 1 and {MAX_CONGRESS}, got {n}"
                ));
            }
            Ok(ArgValue::Int(n))
        }
        ArgKind::Integer { min, max } => {
            let n = integer(name, value)?;
            if n < min || n > max {
                return Err(if max >= i64::from(u32::MAX) {
                    format!("'{name}' must be at least {min}, got {n}")
                } else {
                    format!("'{name}' must be between {min} and {max}, got {n}")
                });
            }
            Ok(ArgValue::Int(n))
        }
        ArgKind::Text => {
            let text = match value {
                Value::String(s) => s.trim().to_string(),
                Value::Number(n) => n.to_string(),
                other => return Err(format!("'{name}' must be a string, got {other}")),
            };
            let valid = !text.is_empty()
                && text
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
            if !valid {
                return Err(format!(
                    "'{text}' is not valid for '{name}'. Use only letters, digits, '.', '_' or '-'."
                ));
            }
            // "." and ".." would be resolved away as URL path segments
            if text.chars().all(|c| c == '.') {
                return Err(format!(
                    "'{text}' is not valid for '{name}'. It must contain a letter, digit, '_' or '-'."
                ));
            }
            Ok(ArgValue::Str(text))
        }
        ArgKind::State => {
            let text = value.as_str().map(str::trim).unwrap_or_default();
            if text.len() != 2 || !text.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(format!(
                    "'{name}' must be a two-letter state code (e.g., 'CA'), got {value}"
                ));
            }
            Ok(ArgValue::Str(text.to_ascii_uppercase()))
        }
        ArgKind::Enum(kind) => kind
            .parse(name, value)
            .map(|code| ArgValue::Str(code.to_string())),
        ArgKind::Date => {
            let text = value.as_str().map(str::trim).unwrap_or_default();
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
                format!("'{name}' must be a date in YYYY-MM-DD format, got {value}")
            })?;
            Ok(ArgValue::Str(date.format("%Y-%m-%d").to_string()))
        }
        ArgKind::Sort => {
            let text = value.as_str().map(str::trim).unwrap_or_default();
            let direction = text
                .to_ascii_lowercase()
                .strip_prefix("updatedate")
                .map(|rest| rest.trim_start_matches(['+', ' ']).to_string());
            match direction.as_deref() {
                Some("asc") => Ok(ArgValue::Str("updateDate+asc".into())),
                Some("desc") => Ok(ArgValue::Str("updateDate+desc".into())),
                _ => Err(format!(
                    "{value} is not valid for '{name}'. Must be one of: updateDate+asc, updateDate+desc"
                )),
            }
        }
        ArgKind::Bool => match value {
            Value::Bool(b) => Ok(ArgValue::Bool(*b)),
            Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(ArgValue::Bool(true)),
            Value::String(s) if s.trim().eq_ignore_ascii_case("false") => {
                Ok(ArgValue::Bool(false))
            }
            other => Err(format!("'{name}' must be true or false, got {other}")),
        },
    }
}

/// Accept JSON integers, integral floats, and digit strings.
fn integer(name: &str, value: &Value) -> Result<i64, String> {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| format!("'{name}' must be an integer, got {value}"))
}

fn check_date_order(specs: &[ArgSpec], args: &Args) -> Result<(), String> {
    let by_role = |role: Role| {
        specs
            .iter()
            .find(|spec| spec.role == role)
            .and_then(|spec| args.get(spec.name))
    };
    if let (Some(ArgValue::Str(from)), Some(ArgValue::Str(to))) =
        (by_role(Role::FromDate), by_role(Role::ToDate))
    {
        // ISO dates order lexicographically
        if from > to {
            return Err(format!(
                "from_date ({from}) must not be after to_date ({to})"
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::spec::{
        CHAMBER, CONGRESS, CURRENT_MEMBER, EnumKind, FROM_DATE, LIMIT, OFFSET, SORT, TO_DATE,
        positive,
    };
    use serde_json::json;

    const BILL_TYPE: ArgSpec =
        ArgSpec::path("bill_type", ArgKind::Enum(EnumKind::Bill), "Bill type");
    const STATE: ArgSpec = ArgSpec::path("state", ArgKind::State, "State");
    const BIOGUIDE: ArgSpec = ArgSpec::path("bioguide_id", ArgKind::Text, "Bioguide ID");
    const YEAR: ArgSpec = ArgSpec::optional_path(
        "year",
        ArgKind::Integer {
            min: 1873,
            max: 2100,
        },
        "Year",
    );

    fn bill_args() -> Vec<ArgSpec> {
        vec![CONGRESS, BILL_TYPE, positive("bill_number", "Bill number"), LIMIT, OFFSET]
    }

    #[test]
    fn renders_path_and_page_controls() {
        let args = validate(
            &bill_args(),
            Some(&json!({"congress": 118, "bill_type": "HR", "bill_number": "3076", "limit": 5})),
        )
        .unwrap();
        assert_eq!(
            args.render_path("/bill/{congress}/{bill_type}/{bill_number}/actions")
                .unwrap(),
            "/bill/118/hr/3076/actions"
        );
        assert_eq!(args.limit(), Some(5));
        assert_eq!(args.offset(), 0);
        assert!(args.query().is_empty());
    }

    #[test]
    fn optional_segment_is_dropped_when_absent() {
        let args = validate(&[YEAR], None).unwrap();
        assert_eq!(
            args.render_path("/bound-congressional-record/{year?}")
                .unwrap(),
            "/bound-congressional-record"
        );

        let args = validate(&[YEAR], Some(&json!({"year": 1990}))).unwrap();
        assert_eq!(
            args.render_path("/bound-congressional-record/{year?}")
                .unwrap(),
            "/bound-congressional-record/1990"
        );
    }

    #[test]
    fn unknown_argument_lists_accepted_names() {
        let err = validate(&[CONGRESS, LIMIT], Some(&json!({"congress": 118, "limt": 5})))
            .unwrap_err();
        assert_eq!(
            err,
            "Unknown argument 'limt'. Accepted arguments: congress, limit"
        );

        let err = validate(&[], Some(&json!({"x": 1}))).unwrap_err();
        assert!(err.contains("takes no arguments"));
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        let err = validate(&[CONGRESS], Some(&json!([118]))).unwrap_err();
        assert_eq!(err, "Tool arguments must be a JSON object");
    }

    #[test]
    fn missing_required_enum_is_prescriptive() {
        let err = validate(&bill_args(), Some(&json!({"congress": 118, "bill_number": 1})))
            .unwrap_err();
        assert!(err.starts_with("null is not valid for 'bill_type'"));
        assert!(err.contains("hr, s, hjres"));

        let err = validate(
            &bill_args(),
            Some(&json!({"congress": 118, "bill_type": null, "bill_number": 1})),
        )
        .unwrap_err();
        assert!(err.contains("REQUIRED"));
    }

    #[test]
    fn missing_required_integer_names_the_argument() {
        let err = validate(&[CONGRESS], Some(&json!({}))).unwrap_err();
        assert_eq!(
            err,
            "Missing required argument 'congress' (Congress number (e.g., 118))"
        );
    }

    #[test]
    fn null_optional_is_absent() {
        let args = validate(
            &[LIMIT, OFFSET, SORT],
            Some(&json!({"limit": null, "offset": null, "sort": null})),
        )
        .unwrap();
        assert_eq!(args.limit(), None);
        assert_eq!(args.offset(), 0);
        assert!(args.query().is_empty());
    }

    #[test]
    fn congress_range_is_enforced() {
        let err = validate(&[CONGRESS], Some(&json!({"congress": 0}))).unwrap_err();
        assert!(err.contains("between 1 and 200, got 0"));
        let err = validate(&[CONGRESS], Some(&json!({"congress": "abc"}))).unwrap_err();
        assert_eq!(err, "'congress' must be an integer, got \"abc\"");
        assert!(validate(&[CONGRESS], Some(&json!({"congress": 118.0}))).is_ok());
    }

    #[test]
    fn integer_bounds_messages() {
        let err = validate(&[LIMIT], Some(&json!({"limit": 0}))).unwrap_err();
        assert_eq!(err, "'limit' must be at least 1, got 0");
        let err = validate(&[YEAR], Some(&json!({"year": 1800}))).unwrap_err();
        assert_eq!(err, "'year' must be between 1873 and 2100, got 1800");
        let err = validate(&[OFFSET], Some(&json!({"offset": -1}))).unwrap_err();
        assert!(err.contains("at least 0"));
    }

    #[test]
    fn text_rejects_path_characters() {
        let err = validate(&[BIOGUIDE], Some(&json!({"bioguide_id": "../bill"}))).unwrap_err();
        assert!(err.contains("Use only letters, digits"));
        let args = validate(&[BIOGUIDE], Some(&json!({"bioguide_id": " P000197 "}))).unwrap();
        assert_eq!(args.segment("bioguide_id").as_deref(), Some("P000197"));
    }

    #[test]
    fn text_rejects_dot_segments() {
        for dots in [".", "..", "..."] {
            let err = validate(&[BIOGUIDE], Some(&json!({"bioguide_id": dots}))).unwrap_err();
            assert!(err.contains("must contain a letter"), "{dots}: {err}");
        }
        let args = validate(&[BIOGUIDE], Some(&json!({"bioguide_id": "R.40097"}))).unwrap();
        assert_eq!(args.segment("bioguide_id").as_deref(), Some("R.40097"));
    }

    #[test]
    fn state_is_upper_cased() {
        let args = validate(&[STATE], Some(&json!({"state": "ca"}))).unwrap();
        assert_eq!(args.render_path("/member/{state}").unwrap(), "/member/CA");
        let err = validate(&[STATE], Some(&json!({"state": "Cal"}))).unwrap_err();
        assert!(err.contains("two-letter state code"));
    }

    #[test]
    fn dates_become_datetime_bounds() {
        let args = validate(
            &[FROM_DATE, TO_DATE],
            Some(&json!({"from_date": "2024-01-01", "to_date": "2024-03-31"})),
        )
        .unwrap();
        let query = args.query();
        assert_eq!(
            query.get("fromDateTime"),
            Some(&QueryValue::Str("2024-01-01T00:00:00Z".into()))
        );
        assert_eq!(
            query.get("toDateTime"),
            Some(&QueryValue::Str("2024-03-31T23:59:59Z".into()))
        );
    }

    #[test]
    fn invalid_and_inverted_dates_are_rejected() {
        let err = validate(&[FROM_DATE], Some(&json!({"from_date": "2024-02-30"}))).unwrap_err();
        assert!(err.contains("YYYY-MM-DD"));

        let err = validate(
            &[FROM_DATE, TO_DATE],
            Some(&json!({"from_date": "2024-05-01", "to_date": "2024-01-01"})),
        )
        .unwrap_err();
        assert_eq!(
            err,
            "from_date (2024-05-01) must not be after to_date (2024-01-01)"
        );
    }

    #[test]
    fn sort_is_normalized() {
        for raw in ["updateDate+desc", "UPDATEDATE desc", "updatedate+DESC"] {
            let args = validate(&[SORT], Some(&json!({ "sort": raw }))).unwrap();
            assert_eq!(
                args.query().get("sort"),
                Some(&QueryValue::Str("updateDate+desc".into()))
            );
        }
        assert!(validate(&[SORT], Some(&json!({"sort": "title+asc"}))).is_err());
    }

    #[test]
    fn bool_accepts_strings() {
        let args = validate(&[CURRENT_MEMBER], Some(&json!({"current_member": "TRUE"}))).unwrap();
        assert_eq!(
            args.query().get("currentMember"),
            Some(&QueryValue::Bool(true))
        );
        assert!(validate(&[CURRENT_MEMBER], Some(&json!({"current_member": 1}))).is_err());
    }

    #[test]
    fn chamber_enum_is_canonicalized() {
        let args = validate(&[CHAMBER], Some(&json!({"chamber": "House"}))).unwrap();
        assert_eq!(args.segment("chamber").as_deref(), Some("house"));
    }
}
