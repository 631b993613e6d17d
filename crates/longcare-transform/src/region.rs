//! Region label extraction from free-text addresses.
//!
//! Taiwanese addresses conventionally start with the city (市) or county (縣)
//! name, e.g. `台北市中山區...`. The extractor takes the shortest prefix that
//! ends in one of those markers. This is an approximation, not a gazetteer
//! lookup: an address that does not lead with its city or county gets a
//! wrong label (for example `復興北路1號市民大樓` yields `復興北路1號市`).

use std::sync::LazyLock;

use regex::Regex;

/// A run of non-marker characters followed by a city/county marker.
static REGION_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^市縣]+[市縣]").expect("Invalid region regex"));

/// Number of leading characters used when no marker is found.
const FALLBACK_PREFIX_CHARS: usize = 2;

/// Derives a region label from an address.
///
/// Returns `None` for an empty address. Otherwise returns the prefix up to and
/// including the first city/county marker, or the first two characters when
/// the address has no such prefix.
pub fn extract_region(address: &str) -> Option<String> {
    if address.is_empty() {
        return None;
    }
    if let Some(found) = REGION_PREFIX_REGEX.find(address) {
        return Some(found.as_str().to_string());
    }
    Some(address.chars().take(FALLBACK_PREFIX_CHARS).collect())
}
