//! Concurrent enrichment of list items with their detail sub-resources.
//!
//! A list fetch returns summary records. For each one the caller names the
//! sub-resources to fetch (usually the item's own detail endpoint). Those
//! fetches run concurrently under a semaphore bounded by
//! `ClientConfig::enrich_concurrency`, and each item collects its own
//! outcomes. A failing sub-fetch is recorded on its item and never aborts the
//! list. Output order always matches upstream order regardless of which
//! fetches finish first.

use congress_types::ApiError;
use futures_util::StreamExt;
use futures_util::future::join_all;
use futures_util::stream::FuturesUnordered;
use serde_json::{Map, Value, json};
use tokio::sync::Semaphore;

use crate::client::ApiClient;
use crate::page::{Aggregated, take_key};
use crate::request::{FetchRequest, QueryParams};

/// A sub-resource to fetch for one list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubResource {
    /// Name used when reporting the outcome, e.g. `"detail"`.
    pub label: String,
    pub path: String,
    /// Top-level key to unwrap from the response (e.g. `"bill"`).
    pub detail_key: Option<String>,
}

impl SubResource {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            detail_key: None,
        }
    }

    pub fn unwrap_key(mut self, key: impl Into<String>) -> Self {
        self.detail_key = Some(key.into());
        self
    }
}

/// Result of one sub-resource fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Fetched(Value),
    Failed {
        status: Option<u16>,
        message: String,
    },
}

/// A sub-resource and what came back for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub label: String,
    pub path: String,
    pub outcome: Outcome,
}

impl Enrichment {
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}

/// A list item with its sub-resource outcomes, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedItem {
    pub item: Value,
    pub enrichments: Vec<Enrichment>,
}

impl EnrichedItem {
    pub fn failures(&self) -> impl Iterator<Item = &Enrichment> {
        self.enrichments.iter().filter(|e| e.is_failed())
    }

    /// Every sub-resource came back.
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Flatten into one JSON object.
    ///
    /// Fetched objects are merged over the summary fields. Fetched non-object
    /// values are stored under their label. Failures are listed under
    /// `enrichmentErrors`.
    pub fn into_merged(self) -> Value {
        let mut merged = match self.item {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("item".into(), other);
                map
            }
        };

        let mut errors = Vec::new();
        for enrichment in self.enrichments {
            match enrichment.outcome {
                Outcome::Fetched(Value::Object(detail)) => merged.extend(detail),
                Outcome::Fetched(other) => {
                    merged.insert(enrichment.label, other);
                }
                Outcome::Failed { status, message } => errors.push(json!({
                    "resource": enrichment.label,
                    "path": enrichment.path,
                    "status": status,
                    "error": message,
                })),
            }
        }

        if !errors.is_empty() {
            merged.insert("enrichmentErrors".into(), Value::Array(errors));
        }
        Value::Object(merged)
    }
}

impl ApiClient {
    /// Fetch a list, then fetch each item's sub-resources concurrently.
    ///
    /// Fails only if the list fetch itself fails. `enrich` maps an item to
    /// the sub-resources to fetch for it; an empty vector leaves the item
    /// as-is.
    pub async fn fetch_with_enrichment<F>(
        &self,
        request: &FetchRequest,
        enrich: F,
    ) -> Result<Aggregated<EnrichedItem>, ApiError>
    where
        F: Fn(&Value) -> Vec<SubResource>,
    {
        let listing = self.fetch(request).await?;
        let plans: Vec<Vec<SubResource>> = listing.items.iter().map(&enrich).collect();
        let fetch_count: usize = plans.iter().map(Vec::len).sum();

        let concurrency = self.config().enrich_concurrency.max(1);
        tracing::debug!(
            "Enriching {} items from {} ({fetch_count} sub-fetches, concurrency {concurrency})",
            listing.items.len(),
            request.path
        );

        let semaphore = Semaphore::new(concurrency);
        let semaphore = &semaphore;

        let mut slots: Vec<Option<Vec<Enrichment>>> = vec![None; plans.len()];
        let mut pending: FuturesUnordered<_> = plans
            .into_iter()
            .enumerate()
            .map(move |(index, subs)| async move {
                let outcomes = join_all(
                    subs.into_iter()
                        .map(|sub| self.fetch_sub_resource(sub, semaphore)),
                )
                .await;
                (index, outcomes)
            })
            .collect();

        while let Some((index, outcomes)) = pending.next().await {
            slots[index] = Some(outcomes);
        }
        drop(pending);

        let failed = slots
            .iter()
            .flatten()
            .flatten()
            .filter(|e| e.is_failed())
            .count();
        if failed > 0 {
            tracing::warn!(
                "{failed} of {fetch_count} sub-fetches failed while enriching {}",
                request.path
            );
        }

        let mut slots = slots.into_iter();
        Ok(listing.map_items(|item| EnrichedItem {
            item,
            enrichments: slots.next().flatten().unwrap_or_default(),
        }))
    }

    async fn fetch_sub_resource(&self, sub: SubResource, semaphore: &Semaphore) -> Enrichment {
        let outcome = match semaphore.acquire().await {
            Ok(_permit) => match self.get(&sub.path, &QueryParams::new(), None).await {
                Ok(body) => Outcome::Fetched(unwrap_detail(body, sub.detail_key.as_deref())),
                Err(err) => {
                    tracing::debug!("Sub-fetch {} failed: {err}", sub.path);
                    Outcome::Failed {
                        status: err.status(),
                        message: err.to_string(),
                    }
                }
            },
            Err(_) => Outcome::Failed {
                status: None,
                message: "enrichment cancelled".into(),
            },
        };

        Enrichment {
            label: sub.label,
            path: sub.path,
            outcome,
        }
    }
}

fn unwrap_detail(body: Value, key: Option<&str>) -> Value {
    match (body, key) {
        (Value::Object(mut map), Some(key)) => match take_key(&mut map, key) {
            Some(detail) => detail,
            None => Value::Object(map),
        },
        (body, _) => body,
    }
}
