//! Congress.gov REST client: authenticated GETs with retry, transparent
//! pagination, and concurrent per-item enrichment.

mod client;
mod config;
mod enrich;
mod page;
mod request;
mod retry;

pub use client::ApiClient;
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_ENRICH_CONCURRENCY, DEFAULT_LIMIT, DEFAULT_TIMEOUT,
    MAX_LIMIT,
};
pub use enrich::{EnrichedItem, Enrichment, Outcome, SubResource};
pub use page::Aggregated;
pub use request::{FetchRequest, PageWindow, QueryParams, QueryValue};
pub use retry::{RetryConfig, is_retryable};
