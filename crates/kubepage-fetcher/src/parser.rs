use kubepage_types::LogEntry;

/// Split a raw timestamped log blob into entries, applying the substring
/// filter and tracking the timestamp of the last entry that was kept.
///
/// Lines are expected as `<timestamp><space><message>`. Empty lines and
/// lines without a space are silently dropped; this is a best-effort parse
/// over a loosely structured text stream, so malformed input degrades to
/// fewer entries rather than an error. The filter, when non-empty, matches
/// against the whole raw line (timestamp included), and a filtered-out line
/// does not advance the returned last-timestamp.
pub(crate) fn parse_log_lines(raw: &str, filter: &str) -> (Vec<LogEntry>, String) {
    let mut entries = Vec::new();
    let mut last_timestamp = String::new();

    for line in raw.lines() {
        if line.is_empty() {
            continue;
        }

        let Some((timestamp, message)) = line.split_once(' ') else {
            continue;
        };

        if !filter.is_empty() && !line.contains(filter) {
            continue;
        }

        last_timestamp = timestamp.to_string();
        entries.push(LogEntry::new(message, timestamp));
    }

    (entries, last_timestamp)
}
