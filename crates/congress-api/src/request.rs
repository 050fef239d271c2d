//! Request descriptors: query values, page windows, and list fetches.

use std::collections::BTreeMap;

/// A single query-string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Bool(bool),
    /// Emitted as one `key=value` pair per element.
    List(Vec<String>),
}

impl QueryValue {
    pub(crate) fn append_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            QueryValue::Str(s) => out.push((key.to_string(), s.clone())),
            QueryValue::Int(n) => out.push((key.to_string(), n.to_string())),
            // Congress.gov expects lowercase booleans
            QueryValue::Bool(b) => out.push((key.to_string(), b.to_string())),
            QueryValue::List(values) => {
                out.extend(values.iter().map(|v| (key.to_string(), v.clone())));
            }
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        QueryValue::List(value)
    }
}

/// Query parameters keyed by name. Ordered so request URLs are stable.
pub type QueryParams = BTreeMap<String, QueryValue>;

/// One page of a paginated endpoint, for single-request fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageWindow {
    /// Page size; `None` means the configured default.
    pub limit: Option<u32>,
    pub offset: u32,
}

impl PageWindow {
    pub fn new(limit: Option<u32>, offset: u32) -> Self {
        Self { limit, offset }
    }
}

/// A paginated list fetch.
///
/// `items_key` names the top-level array in each response page, e.g.
/// `"bills"` for `/bill`.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub path: String,
    pub items_key: String,
    pub params: QueryParams,
    /// Total items wanted; `None` means the configured default.
    pub limit: Option<u32>,
    pub offset: u32,
}

impl FetchRequest {
    pub fn new(path: impl Into<String>, items_key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            items_key: items_key.into(),
            params: QueryParams::new(),
            limit: None,
            offset: 0,
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn params(mut self, params: QueryParams) -> Self {
        self.params.extend(params);
        self
    }

    pub fn limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

/// Flatten parameters into ordered query pairs.
pub(crate) fn query_pairs(params: &QueryParams) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(params.len());
    for (key, value) in params {
        value.append_pairs(key, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_params() {
        let request = FetchRequest::new("/bill/118", "bills")
            .param("sort", "updateDate+desc")
            .param("currentMember", true)
            .limit(Some(50))
            .offset(100);

        assert_eq!(request.path, "/bill/118");
        assert_eq!(request.items_key, "bills");
        assert_eq!(request.limit, Some(50));
        assert_eq!(request.offset, 100);
        assert_eq!(
            request.params.get("currentMember"),
            Some(&QueryValue::Bool(true))
        );
    }

    #[test]
    fn pairs_are_sorted_and_lists_repeat() {
        let mut params = QueryParams::new();
        params.insert("z".into(), QueryValue::Int(3));
        params.insert("a".into(), QueryValue::List(vec!["x".into(), "y".into()]));
        params.insert("m".into(), QueryValue::Bool(false));

        assert_eq!(
            query_pairs(&params),
            vec![
                ("a".to_string(), "x".to_string()),
                ("a".to_string(), "y".to_string()),
                ("m".to_string(), "false".to_string()),
                ("z".to_string(), "3".to_string()),
            ]
        );
    }
}
