use chrono::{DateTime, Utc};

/// Marker appended to text cut by `truncate_chars`.
pub const ELLIPSIS: &str = "...";

/// Cuts `text` to at most `limit` characters, appending `...` when anything was removed.
/// Counts Unicode scalar values so multi-byte characters are never split.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Renders an instant as a calendar date without time, e.g. `Tue Jan 02 2024`.
pub fn calendar_date(instant: &DateTime<Utc>) -> String {
    instant.format("%a %b %d %Y").to_string()
}
