use chrono::{DateTime, Utc};

/// Stand-in for every IP-like field
pub const PLACEHOLDER_IP: &str = "8.8.8.8";

/// Relative path of the generated blank image; every `uri` field points here
pub const PLACEHOLDER_URI: &str = "photos_and_videos/blank.jpg";

/// Stand-in for every `url` field
pub const PLACEHOLDER_URL: &str = "https://www.google.com";

/// Keys that start or end with `ip`.
///
/// Not anchored to word boundaries: `trip`, `zip` and `ipsum` match too.
pub fn is_ip_key(key: &str) -> bool {
    key.starts_with("ip") || key.ends_with("ip")
}

/// Integers become the current time for timestamp fields and zero otherwise.
/// `timestamp_ms` must be tested before `timestamp`, which it contains.
pub fn redact_integer(key: &str, now: DateTime<Utc>) -> i64 {
    if key.contains("timestamp_ms") {
        now.timestamp_millis()
    } else if key.contains("timestamp") {
        now.timestamp()
    } else {
        0
    }
}

pub fn redact_string(value: String, key: &str) -> String {
    if is_ip_key(key) {
        PLACEHOLDER_IP.to_string()
    } else if key == "uri" {
        PLACEHOLDER_URI.to_string()
    } else if key == "url" {
        PLACEHOLDER_URL.to_string()
    } else if key == "reaction" {
        // fixed emoji vocabulary, nothing personal in it
        value
    } else {
        value.chars().next().map(String::from).unwrap_or_default()
    }
}
