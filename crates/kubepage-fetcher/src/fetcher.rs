use std::collections::BTreeMap;
use std::future::Future;

use anyhow::Result;
use futures::StreamExt;
use tracing::{debug, warn};

use crate::aggregate::{self, PodFetch};
use crate::error::FetchError;
use crate::{budget, cursor, parser, token};
use kubepage_types::{CursorMap, FetchResult, Query};

/// Label marking pods as managed by kubepage.
const LABEL_MANAGED: &str = "kubepage";
const LABEL_APPLICATION_ID: &str = "application_id";
const LABEL_SCOPE_ID: &str = "scope_id";
const LABEL_DEPLOYMENT_ID: &str = "deployment_id";

/// Upper bound on pod log fetches in flight at once.
const MAX_CONCURRENT_POD_FETCHES: usize = 4;

/// External collaborator that discovers pods and returns raw log blobs.
///
/// `pod_logs` returns timestamped lines (`<timestamp><space><message>`)
/// bounded below by `since_time` (inclusive, when the source supports it)
/// and in size by `limit_bytes`.
pub trait LogSource {
    fn list_pods(
        &self,
        namespace: &str,
        labels: &BTreeMap<String, String>,
    ) -> impl Future<Output = Result<Vec<String>>> + Send;

    fn pod_logs(
        &self,
        namespace: &str,
        pod: &str,
        since_time: Option<&str>,
        limit_bytes: i64,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Build the pod label selector for a query. Identifier labels are only
/// included when the query sets them.
pub fn build_labels(query: &Query) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(LABEL_MANAGED.to_string(), "true".to_string());

    if !query.application_id.is_empty() {
        labels.insert(LABEL_APPLICATION_ID.to_string(), query.application_id.clone());
    }

    if !query.scope_id.is_empty() {
        labels.insert(LABEL_SCOPE_ID.to_string(), query.scope_id.clone());
    }

    if !query.deployment_id.is_empty() {
        labels.insert(LABEL_DEPLOYMENT_ID.to_string(), query.deployment_id.clone());
    }

    labels
}

/// The cross-pod log aggregation engine.
pub struct LogFetcher<S> {
    source: S,
}

impl<S: LogSource> LogFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch one page of logs across all pods matching the query.
    ///
    /// Token errors and pod listing failures abort the call; a single pod's
    /// retrieval failure never does — that pod just contributes nothing to
    /// this page and keeps its previous cursor, if any, out of the token.
    pub async fn fetch_logs(&self, query: &Query) -> Result<FetchResult, FetchError> {
        let labels = build_labels(query);

        let pods = self
            .source
            .list_pods(&query.namespace, &labels)
            .await
            .map_err(FetchError::PodList)?;

        if pods.is_empty() {
            return Ok(FetchResult::default());
        }

        let cursors = token::decode(&query.next_page_token)?;
        let limit_bytes = budget::pod_limit_bytes(query.limit, pods.len());

        // Bounded fan-out; completion order is irrelevant because the
        // merge sorts by timestamp and each fetch carries its pod name.
        let fetches = futures::stream::iter(
            pods.into_iter()
                .map(|pod| self.fetch_pod(query, pod, &cursors, limit_bytes)),
        )
        .buffer_unordered(MAX_CONCURRENT_POD_FETCHES)
        .collect::<Vec<_>>()
        .await;

        let (results, new_cursors) = aggregate::merge(fetches, query.limit);
        let next_page_token = token::encode(&new_cursors)?;

        Ok(FetchResult {
            results,
            next_page_token,
        })
    }

    /// Fetch and parse one pod's slice of the page. Retrieval failures are
    /// reported on the tracing side channel and degrade to an empty
    /// contribution.
    async fn fetch_pod(
        &self,
        query: &Query,
        pod: String,
        cursors: &CursorMap,
        limit_bytes: i64,
    ) -> PodFetch {
        let since_time = cursor::resolve_since_time(&pod, cursors, &query.start_time);

        match self
            .source
            .pod_logs(&query.namespace, &pod, since_time.as_deref(), limit_bytes)
            .await
        {
            Ok(raw) => {
                let (entries, last_timestamp) = parser::parse_log_lines(&raw, &query.filter);
                debug!(pod = %pod, entries = entries.len(), "fetched pod logs");
                PodFetch {
                    pod,
                    entries,
                    last_timestamp,
                }
            }
            Err(error) => {
                warn!(pod = %pod, error = %error, "failed to fetch logs from pod");
                PodFetch {
                    pod,
                    entries: Vec::new(),
                    last_timestamp: String::new(),
                }
            }
        }
    }
}
