use kubepage_types::{CursorMap, LogEntry};

/// What one pod contributed to the current page.
pub(crate) struct PodFetch {
    pub pod: String,
    pub entries: Vec<LogEntry>,
    /// Timestamp of the last filter-passing entry, empty if none.
    pub last_timestamp: String,
}

/// Merge all pods' entries into one ascending page capped at `limit`, and
/// reduce the per-pod last-timestamps into the next cursor map.
///
/// A pod's cursor advances based on what it yielded before the global
/// truncation, not on what made the final page. Otherwise a chatty sibling
/// could push a pod's entries off the page and force its stream to be
/// re-read from the same position forever.
pub(crate) fn merge(fetches: Vec<PodFetch>, limit: usize) -> (Vec<LogEntry>, CursorMap) {
    let mut entries = Vec::new();
    let mut cursors = CursorMap::new();

    for fetch in fetches {
        if !fetch.last_timestamp.is_empty() {
            cursors.insert(fetch.pod, fetch.last_timestamp);
        }
        entries.extend(fetch.entries);
    }

    // Ties have no defined secondary order, so an unstable sort is fine.
    entries.sort_unstable_by(|a, b| a.timestamp.cmp(&b.timestamp));
    entries.truncate(limit);

    (entries, cursors)
}
