//! Enacted public and private laws.
//!
//! Upstream returns law listings under `bills` and law details under `bill`.

use serde_json::Value;

use super::args::Args;
use super::spec::{
    ArgKind, ArgSpec, CONGRESS, EnumKind, FROM_DATE, LIMIT, OFFSET, SORT, TO_DATE, ToolSpec,
    field, positive,
};

const LAW_TYPE: ArgSpec = ArgSpec::path(
    "law_type",
    ArgKind::Enum(EnumKind::Law),
    "REQUIRED law type string. Must be one of: pub (Public Law), priv (Private Law)",
);
const LAW_NUMBER: ArgSpec = positive("law_number", "Law number");

/// `/law/{congress}/{type}/{number}`. A listing item describes the
/// originating bill; its law number and type live under `laws`.
fn law_detail(item: &Value, args: &Args) -> Option<String> {
    let congress = args.segment("congress").or_else(|| field(item, "congress"))?;
    let law = item
        .get("laws")
        .and_then(Value::as_array)
        .and_then(|laws| laws.first());

    let law_type = match args.segment("law_type") {
        Some(code) => code,
        None => law.and_then(|l| field(l, "type")).map(|t| law_type_code(&t))?,
    };
    // "118-31" -> "31"
    let number = law.and_then(|l| field(l, "number")).map(|n| match n.rsplit_once('-') {
        Some((_, number)) => number.to_string(),
        None => n,
    })?;
    Some(format!("/law/{congress}/{law_type}/{number}"))
}

fn law_type_code(label: &str) -> String {
    if label.to_ascii_lowercase().starts_with("priv") {
        "priv".into()
    } else {
        "pub".into()
    }
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::enriched(
        "list_laws",
        "List all laws enacted by a specific Congress with full details. Returns both public \
         and private laws with originating bill info, enactment dates, and text links.",
        "/law/{congress}",
        "bills",
        "bill",
        law_detail,
        &[CONGRESS, FROM_DATE, TO_DATE, SORT, LIMIT, OFFSET],
    ),
    ToolSpec::enriched(
        "list_laws_by_type",
        "List laws filtered by type (pub or priv) with full details.",
        "/law/{congress}/{law_type}",
        "bills",
        "bill",
        law_detail,
        &[CONGRESS, LAW_TYPE, FROM_DATE, TO_DATE, SORT, LIMIT, OFFSET],
    ),
    ToolSpec::single(
        "get_law",
        "Get detailed information about a specific law, including the originating bill, \
         sponsors, actions, and text versions.",
        "/law/{congress}/{law_type}/{law_number}",
        &[CONGRESS, LAW_TYPE, LAW_NUMBER],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::args::validate;
    use serde_json::json;

    fn listing_args() -> Args {
        validate(&[CONGRESS], Some(&json!({"congress": 118}))).unwrap()
    }

    #[test]
    fn detail_path_uses_law_number_suffix() {
        let item = json!({
            "congress": 118,
            "number": "2882",
            "type": "HR",
            "laws": [{"number": "118-42", "type": "Public Law"}]
        });
        assert_eq!(
            law_detail(&item, &listing_args()).as_deref(),
            Some("/law/118/pub/42")
        );
    }

    #[test]
    fn private_law_type_is_recognized() {
        let item = json!({"laws": [{"number": "118-1", "type": "Private Law"}]});
        assert_eq!(
            law_detail(&item, &listing_args()).as_deref(),
            Some("/law/118/priv/1")
        );
    }

    #[test]
    fn requested_type_wins() {
        let args = validate(
            &[CONGRESS, LAW_TYPE],
            Some(&json!({"congress": 117, "law_type": "PRIV"})),
        )
        .unwrap();
        let item = json!({"laws": [{"number": "117-3", "type": "Public Law"}]});
        assert_eq!(law_detail(&item, &args).as_deref(), Some("/law/117/priv/3"));
    }

    #[test]
    fn item_without_laws_is_not_enriched() {
        let item = json!({"number": "2882", "type": "HR"});
        assert_eq!(law_detail(&item, &listing_args()), None);
    }
}
