/// Floor for a pod's share of the entry budget, so pods are never starved
/// to a near-zero fetch when many replicas split a small limit.
pub(crate) const MIN_LOGS_PER_POD: usize = 10;

/// Rough size assumed per log entry when converting the entry budget into
/// a byte ceiling for the log source.
const BYTES_PER_ENTRY: i64 = 1024;

/// Split the total entry limit evenly across pods and convert the share to
/// an approximate byte ceiling.
///
/// This is a heuristic, not an exact cap: the log source returns whatever
/// fits in the byte budget, and the aggregator's final truncation is what
/// enforces the hard limit.
pub(crate) fn pod_limit_bytes(total_limit: usize, pod_count: usize) -> i64 {
    let share = (total_limit / pod_count.max(1)).max(MIN_LOGS_PER_POD);
    share as i64 * BYTES_PER_ENTRY
}
