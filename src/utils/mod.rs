/// Returns everything after the first occurrence of `marker`, or `None` when
/// the marker is absent.
pub fn slice_after<'a>(haystack: &'a str, marker: &str) -> Option<&'a str> {
    haystack
        .find(marker)
        .map(|start| &haystack[start + marker.len()..])
}

/// Takes at most `count` characters from the front of `s`.
pub fn take_chars(s: &str, count: usize) -> String {
    s.chars().take(count).collect()
}

/// Joins a configured base URL and a path, tolerating a trailing slash on the base.
pub fn join_base(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
