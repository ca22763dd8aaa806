//! Listing rows: one line of key metadata, cheap to build for thousands
//! of keys because only the key, size and TTL are consulted. Payloads
//! are fetched lazily when an entry is opened.

use serde::Serialize;

use super::filter::{display_key, KeyFilter};
use crate::{entry::Ttl, format::detect};

/// One row of the key listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyRow {
    /// Key as shown to the operator (namespace marker stripped).
    pub display_key: String,
    /// Full key, kept for the follow-up value fetch.
    pub key: String,
    /// Formatted TTL column.
    pub ttl: String,
    /// Stored size in KiB, rounded to two decimals.
    pub size_kb: f64,
    /// Serialization column (the historical format name).
    pub serialization: String,
}

impl KeyRow {
    pub fn new(key: &str, size_bytes: usize, ttl: Ttl) -> Self {
        Self {
            display_key: display_key(key).to_owned(),
            key: key.to_owned(),
            ttl: ttl.to_string(),
            size_kb: (size_bytes as f64 / 1024.0 * 100.0).round() / 100.0,
            serialization: detect(key).serialization.to_string(),
        }
    }
}

/// Builds the filtered, sorted listing from `(key, size, ttl)` triples.
///
/// Rows sort case-insensitively by display key, matching what the
/// operator sees on screen.
pub fn build_rows(
    entries: impl IntoIterator<Item = (String, usize, Ttl)>,
    filter: &KeyFilter,
) -> Vec<KeyRow> {
    let mut rows: Vec<KeyRow> = entries
        .into_iter()
        .filter(|(key, _, _)| filter.matches(key))
        .map(|(key, size, ttl)| KeyRow::new(&key, size, ttl))
        .collect();
    rows.sort_by_key(|row| row.display_key.to_lowercase());
    rows
}
