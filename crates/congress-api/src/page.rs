//! Response page parsing and aggregated results.

use congress_types::ApiError;
use reqwest::Url;
use serde_json::{Map, Value};

/// One decoded page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Page {
    pub items: Vec<Value>,
    /// `pagination.count`: total matching items upstream.
    pub total: Option<u64>,
    /// Offset of the next page, if the upstream advertised one.
    pub next_offset: Option<u32>,
}

impl Page {
    /// Decode a page body. `offset` is the offset this page was requested at.
    pub fn parse(path: &str, body: Value, items_key: &str, offset: u32) -> Result<Self, ApiError> {
        let Value::Object(mut object) = body else {
            return Err(structure(path, "response body is not a JSON object"));
        };

        let items = match take_key(&mut object, items_key) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(structure(
                    path,
                    format!("'{items_key}' is {}, expected an array", kind(&other)),
                ));
            }
            None => {
                return Err(structure(
                    path,
                    format!("response has no '{items_key}' array"),
                ));
            }
        };

        let pagination = object.get("pagination").and_then(Value::as_object);
        let total = pagination
            .and_then(|p| p.get("count"))
            .and_then(Value::as_u64);
        let next_offset = pagination.and_then(|p| next_offset(p, offset, items.len()));

        Ok(Self {
            items,
            total,
            next_offset,
        })
    }
}

/// Remove `key`, falling back to a case-insensitive match. Some endpoints
/// disagree with their own docs on casing (`CRSReports` vs `crsReports`).
pub(crate) fn take_key(object: &mut Map<String, Value>, key: &str) -> Option<Value> {
    if let Some(value) = object.remove(key) {
        return Some(value);
    }
    let actual = object
        .keys()
        .find(|k| k.eq_ignore_ascii_case(key))
        .cloned()?;
    object.remove(&actual)
}

/// Work out where the next page starts.
///
/// The `offset` query parameter of `pagination.next` wins; a `next` link
/// without one falls back to `offset + received`. A link that does not move
/// forward is treated as the end of the listing.
fn next_offset(pagination: &Map<String, Value>, offset: u32, received: usize) -> Option<u32> {
    let link = pagination.get("next")?.as_str()?;
    if link.is_empty() {
        return None;
    }

    let advertised = parse_link(link).and_then(|url| {
        url.query_pairs()
            .find(|(key, _)| key == "offset")
            .and_then(|(_, value)| value.parse::<u32>().ok())
    });

    let next = advertised.unwrap_or_else(|| offset.saturating_add(received as u32));
    if next <= offset {
        tracing::warn!("pagination link does not advance past offset {offset}: {link}");
        return None;
    }
    Some(next)
}

fn parse_link(link: &str) -> Option<Url> {
    Url::parse(link).ok().or_else(|| {
        Url::parse("http://localhost/")
            .ok()
            .and_then(|base| base.join(link).ok())
    })
}

fn structure(path: &str, message: impl Into<String>) -> ApiError {
    ApiError::Structure {
        path: path.to_string(),
        message: message.into(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Items gathered from one or more pages, plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregated<T> {
    pub items: Vec<T>,
    /// Total matching items upstream, when reported.
    pub total: Option<u64>,
    /// More items exist beyond what was returned.
    pub has_more: bool,
    /// Offset the fetch started at.
    pub offset: u32,
    /// Upstream pages requested.
    pub pages: u32,
}

impl<T> Aggregated<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform items while keeping the metadata.
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> Aggregated<U> {
        Aggregated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            has_more: self.has_more,
            offset: self.offset,
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_items_and_pagination() {
        let body = json!({
            "bills": [{"number": "1"}, {"number": "2"}],
            "pagination": {
                "count": 812,
                "next": "https://api.congress.gov/v3/bill/118?offset=2&limit=2&format=json"
            }
        });
        let page = Page::parse("/bill/118", body, "bills", 0).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, Some(812));
        assert_eq!(page.next_offset, Some(2));
    }

    #[test]
    fn last_page_has_no_next() {
        let body = json!({"laws": [], "pagination": {"count": 0}});
        let page = Page::parse("/law/118", body, "laws", 0).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_offset, None);
    }

    #[test]
    fn null_next_ends_listing() {
        let body = json!({"bills": [1], "pagination": {"count": 1, "next": null}});
        let page = Page::parse("/bill", body, "bills", 0).unwrap();
        assert_eq!(page.next_offset, None);
    }

    #[test]
    fn next_without_offset_falls_back_to_received_count() {
        let body = json!({
            "members": [1, 2, 3],
            "pagination": {"count": 10, "next": "https://api.congress.gov/v3/member?limit=3"}
        });
        let page = Page::parse("/member", body, "members", 6).unwrap();
        assert_eq!(page.next_offset, Some(9));
    }

    #[test]
    fn relative_next_link_is_understood() {
        let body = json!({
            "nominations": [1],
            "pagination": {"next": "/v3/nomination?offset=40"}
        });
        let page = Page::parse("/nomination", body, "nominations", 20).unwrap();
        assert_eq!(page.next_offset, Some(40));
    }

    #[test]
    fn non_advancing_next_stops() {
        let body = json!({
            "bills": [1],
            "pagination": {"next": "https://api.congress.gov/v3/bill?offset=20"}
        });
        let page = Page::parse("/bill", body, "bills", 20).unwrap();
        assert_eq!(page.next_offset, None);
    }

    #[test]
    fn items_key_matches_case_insensitively() {
        let body = json!({"CRSReports": [{"id": "R1"}], "pagination": {"count": 1}});
        let page = Page::parse("/crsreport", body, "crsReports", 0).unwrap();
        assert_eq!(page.items, vec![json!({"id": "R1"})]);
    }

    #[test]
    fn missing_items_key_is_structure_error() {
        let err = Page::parse("/bill", json!({"error": "x"}), "bills", 0).unwrap_err();
        match err {
            ApiError::Structure { path, message } => {
                assert_eq!(path, "/bill");
                assert!(message.contains("'bills'"));
            }
            other => panic!("expected Structure, got {other:?}"),
        }
    }

    #[test]
    fn non_array_items_is_structure_error() {
        let err = Page::parse("/bill", json!({"bills": {"a": 1}}), "bills", 0).unwrap_err();
        assert!(err.to_string().contains("an object, expected an array"));
    }

    #[test]
    fn non_object_body_is_structure_error() {
        let err = Page::parse("/bill", json!([1, 2]), "bills", 0).unwrap_err();
        assert!(matches!(err, ApiError::Structure { .. }));
    }

    #[test]
    fn map_items_keeps_metadata() {
        let page = Aggregated {
            items: vec![1, 2],
            total: Some(9),
            has_more: true,
            offset: 4,
            pages: 1,
        };
        let mapped = page.map_items(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.total, Some(9));
        assert!(mapped.has_more);
        assert_eq!(mapped.offset, 4);
    }
}
