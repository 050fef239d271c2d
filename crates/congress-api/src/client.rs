//! Congress.gov REST client.

use std::sync::Arc;

use congress_types::ApiError;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::page::{Aggregated, Page};
use crate::request::{FetchRequest, PageWindow, QueryParams, query_pairs};

/// Longest upstream error text carried into an [`ApiError`].
const MAX_ERROR_MESSAGE: usize = 300;

/// Client for the Congress.gov v3 API.
///
/// Cheap to clone; clones share the connection pool and configuration.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("congress-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network {
                path: String::new(),
                message: e.without_url().to_string(),
            })?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Check a requested limit against the configured bounds.
    ///
    /// `None` resolves to the configured default.
    pub fn resolve_limit(&self, limit: Option<u32>) -> Result<u32, ApiError> {
        match limit {
            None => Ok(self.config.default_limit.min(self.config.max_limit)),
            Some(0) => Err(ApiError::InvalidRequest {
                message: "limit must be at least 1".into(),
            }),
            Some(n) if n > self.config.max_limit => Err(ApiError::InvalidRequest {
                message: format!(
                    "limit {n} exceeds the maximum of {}",
                    self.config.max_limit
                ),
            }),
            Some(n) => Ok(n),
        }
    }

    /// Issue a single GET and return the decoded JSON object.
    ///
    /// With a window, `limit` and `offset` are added to the query.
    pub async fn get(
        &self,
        path: &str,
        params: &QueryParams,
        window: Option<PageWindow>,
    ) -> Result<Value, ApiError> {
        let mut query = query_pairs(params);
        if let Some(window) = window {
            let limit = self.resolve_limit(window.limit)?;
            query.push(("limit".into(), limit.to_string()));
            query.push(("offset".into(), window.offset.to_string()));
        }

        let body = self.send(path, &query).await?;
        if !body.is_object() {
            return Err(ApiError::Structure {
                path: path.to_string(),
                message: "response body is not a JSON object".into(),
            });
        }
        Ok(body)
    }

    /// Fetch up to `request.limit` items, following upstream pagination.
    ///
    /// Never returns more items than the resolved limit. Items keep upstream
    /// order across pages.
    pub async fn fetch(&self, request: &FetchRequest) -> Result<Aggregated<Value>, ApiError> {
        let limit = self.resolve_limit(request.limit)?;
        let base_query = query_pairs(&request.params);

        let mut items: Vec<Value> = Vec::with_capacity(limit as usize);
        let mut offset = request.offset;
        let mut total = None;
        let mut pages = 0u32;
        let mut has_more = false;

        loop {
            let remaining = limit - items.len() as u32;
            let page_limit = remaining.min(self.config.max_limit);

            let mut query = base_query.clone();
            query.push(("limit".into(), page_limit.to_string()));
            query.push(("offset".into(), offset.to_string()));

            tracing::debug!(
                "Fetching {} page {} (offset {offset}, limit {page_limit})",
                request.path,
                pages + 1
            );

            let body = self.send(&request.path, &query).await?;
            pages += 1;
            let page = Page::parse(&request.path, body, &request.items_key, offset)?;
            if page.total.is_some() {
                total = page.total;
            }

            let received = page.items.len();
            if received > remaining as usize {
                items.extend(page.items.into_iter().take(remaining as usize));
                has_more = true;
                break;
            }
            items.extend(page.items);

            if items.len() as u32 >= limit {
                has_more = page.next_offset.is_some()
                    || total.is_some_and(|t| t > u64::from(offset) + received as u64);
                break;
            }

            match page.next_offset {
                Some(next) if received > 0 => offset = next,
                _ => break,
            }
        }

        tracing::debug!(
            "Fetched {} items from {} in {pages} page(s)",
            items.len(),
            request.path
        );

        Ok(Aggregated {
            items,
            total,
            has_more,
            offset: request.offset,
            pages,
        })
    }

    /// Send one GET with auth, retrying transient failures.
    async fn send(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let retry = &self.config.retry;
        let auth = [("api_key", self.config.api_key.as_str()), ("format", "json")];

        let mut attempt = 0;
        loop {
            tracing::debug!("GET {path} (attempt {}/{})", attempt + 1, retry.attempts());

            let result = self.http.get(&url).query(&auth).query(query).send().await;

            let err = match result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        match read_json(path, response).await {
                            Ok(body) => return Ok(body),
                            Err(err) => err,
                        }
                    } else {
                        let retry_after = parse_retry_after(response.headers());
                        let body_text = response.text().await.unwrap_or_default();
                        let message = summarize_body(&body_text, &self.config.api_key);
                        classify_error(path, status.as_u16(), message, retry_after)
                    }
                }
                Err(e) => transport_error(path, e),
            };

            let Some(delay) = retry.next_delay(attempt, &err) else {
                return Err(err);
            };
            tracing::warn!(
                "Retryable error (attempt {}/{}): {err}. Retrying in {}ms...",
                attempt + 1,
                retry.attempts(),
                delay.as_millis(),
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

async fn read_json(path: &str, response: reqwest::Response) -> Result<Value, ApiError> {
    let text = response.text().await.map_err(|e| transport_error(path, e))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Structure {
        path: path.to_string(),
        message: format!("invalid JSON: {e}"),
    })
}

/// Map a reqwest failure, dropping the URL so the key never surfaces.
fn transport_error(path: &str, error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout {
            path: path.to_string(),
        }
    } else {
        ApiError::Network {
            path: path.to_string(),
            message: error.without_url().to_string(),
        }
    }
}

/// Parse the `retry-after` header value as seconds and convert to milliseconds.
fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(|secs| (secs * 1000.0) as u64)
}

/// Pull a readable message out of an upstream error body.
///
/// Congress.gov answers with `{"error": {"message": ...}}`, `{"error": "..."}`
/// or `{"message": ...}` depending on the failure.
fn summarize_body(body: &str, api_key: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| {
            v.pointer("/error/message")
                .or_else(|| v.get("error").filter(|e| e.is_string()))
                .or_else(|| v.get("message"))
                .and_then(Value::as_str)
        })
        .unwrap_or(body)
        .trim();

    let mut message: String = message.chars().take(MAX_ERROR_MESSAGE).collect();
    if !api_key.is_empty() && message.contains(api_key) {
        message = message.replace(api_key, "<redacted>");
    }
    message
}

/// Classify an HTTP error response into a typed ApiError.
fn classify_error(path: &str, status: u16, message: String, retry_after: Option<u64>) -> ApiError {
    let path = path.to_string();
    match status {
        401 | 403 => ApiError::Auth { path, status },
        404 => ApiError::NotFound { path },
        429 => ApiError::RateLimited {
            path,
            retry_after_ms: retry_after,
        },
        500..=599 => ApiError::Server {
            path,
            status,
            message,
        },
        _ => ApiError::Client {
            path,
            status,
            message,
        },
    }
}
