use kubepage_types::CursorMap;

/// Pick the effective lower bound for one pod's log fetch.
///
/// Precedence: the pod's cursor from the incoming token (continuing a
/// previous page), then the caller's global start time, then no lower bound
/// at all (read from the beginning of available logs).
pub(crate) fn resolve_since_time(
    pod_name: &str,
    cursors: &CursorMap,
    start_time: &str,
) -> Option<String> {
    if let Some(last_read) = cursors.get(pod_name) {
        return Some(last_read.clone());
    }

    if !start_time.is_empty() {
        return Some(start_time.to_string());
    }

    None
}
