//! Shared types for kubepage
//!
//! This crate contains the data structures passed between the fetcher core,
//! the Kubernetes collaborator, and the CLI.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pod name mapped to the timestamp of the last entry read from that pod.
///
/// Keys are only the pods observed during the current fetch; a pod that
/// disappeared since the previous page simply drops out of the map.
pub type CursorMap = HashMap<String, String>;

/// One log fetch request.
///
/// Empty strings mean "unset" for the optional fields, matching how the
/// values arrive from CLI flags.
#[derive(Clone, Debug, Default)]
pub struct Query {
    /// Kubernetes namespace to search in
    pub namespace: String,

    /// Application identifier label (empty = not part of the selector)
    pub application_id: String,

    /// Scope identifier label (empty = not part of the selector)
    pub scope_id: String,

    /// Deployment identifier label (empty = not part of the selector)
    pub deployment_id: String,

    /// Maximum number of entries in the returned page
    pub limit: usize,

    /// Continuation token from a previous page (empty = first page)
    pub next_page_token: String,

    /// Substring filter applied to whole raw lines (empty = keep everything)
    pub filter: String,

    /// ISO-8601 lower bound for the first page (empty = no lower bound)
    pub start_time: String,
}

/// A single log entry extracted from a raw line. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,

    /// ISO-8601 timestamp as emitted by the log source. Kept as a string:
    /// fixed-width RFC 3339 timestamps compare correctly lexicographically,
    /// and re-serializing must not alter the original precision.
    #[serde(rename = "datetime")]
    pub timestamp: String,
}

impl LogEntry {
    pub fn new(message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// One page of aggregated log entries plus the continuation token.
///
/// `next_page_token` is empty when no entries were read from any pod.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FetchResult {
    pub results: Vec<LogEntry>,

    #[serde(rename = "nextPageToken")]
    pub next_page_token: String,
}
