/// File naming and line encoding for tracking records
///
/// Layout under the tracking root:
/// - `{handler}-uploaded.txt`: one delivered path per line
/// - `{handler}-failed.txt`: one path per failed attempt

/// Success record file name: {handler}-uploaded.txt
pub fn success_file_name(handler: &str) -> String {
    format!("{}-uploaded.txt", handler)
}

/// Failure record file name: {handler}-failed.txt
pub fn failure_file_name(handler: &str) -> String {
    format!("{}-failed.txt", handler)
}

/// Encode a path as one record line, or `None` if it would span several lines
pub fn encode_line(path: &str) -> Option<String> {
    if path.contains(['\n', '\r']) {
        return None;
    }
    Some(format!("{}\n", path))
}

/// Decode a success record: lines kept byte for byte apart from a trailing
/// `\r`, empty lines dropped. Membership checks compare against these exactly.
pub fn decode_exact_lines(contents: &str) -> Vec<String> {
    contents
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Decode a failure record: trimmed lines, blank lines dropped
pub fn decode_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
