// ABOUTME: Shared utility functions for Folio
// ABOUTME: Time-derived ID generation, technology tag parsing, HTML escaping

use chrono::Utc;

/// Generate a creation-time derived identifier (milliseconds since the epoch).
///
/// Ids must stay unique, so when the clock has not moved past `after`
/// the result is `after + 1`. Returns `None` once `after` is `i64::MAX`.
pub fn generate_time_id(after: Option<i64>) -> Option<i64> {
    let now = Utc::now().timestamp_millis();
    match after {
        Some(last) if now <= last => last.checked_add(1),
        _ => Some(now),
    }
}

/// Split a comma separated technology list into trimmed, non-empty tags
pub fn split_technologies(technologies: &str) -> Vec<String> {
    technologies
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Treat blank optional strings as absent
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// HTML escape helper
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
