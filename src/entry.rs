//! Input and output units of an inspection.

use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use crate::{decode::Value, error::DecodeError};

/// TTL sentinel the store uses for keys without an expiry.
pub const TTL_PERSISTENT: i64 = -1;
/// TTL sentinel the store uses for keys that do not exist. A key can
/// disappear between listing and fetch; callers see it as this value.
pub const TTL_MISSING: i64 = -2;

/// One stored entry, as fetched from the store-access collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// The full key the payload was stored under, markers included.
    pub key: String,
    /// The stored bytes, before any decompression.
    pub payload: Bytes,
    /// Remaining TTL in seconds, or one of the negative sentinels.
    pub ttl_seconds: i64,
}

impl RawEntry {
    pub fn new(key: impl Into<String>, payload: impl Into<Bytes>, ttl_seconds: i64) -> Self {
        Self {
            key: key.into(),
            payload: payload.into(),
            ttl_seconds,
        }
    }

    pub fn ttl(&self) -> Ttl {
        Ttl::from_seconds(self.ttl_seconds)
    }
}

/// Expiry state of a key, decoded from the store sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// The key vanished between listing and fetch.
    Missing,
    /// No expiry set.
    Persistent,
    /// Expires after this many seconds.
    Expires(u64),
}

impl Ttl {
    pub fn from_seconds(seconds: i64) -> Ttl {
        match seconds {
            TTL_MISSING => Ttl::Missing,
            s if s >= 0 => Ttl::Expires(s as u64),
            _ => Ttl::Persistent,
        }
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ttl::Missing => write!(f, "missing"),
            Ttl::Persistent => write!(f, "No TTL"),
            Ttl::Expires(s) if *s >= 60 => write!(f, "{} min", s / 60),
            Ttl::Expires(_) => write!(f, "< 1 min"),
        }
    }
}

/// The result of decoding one entry.
///
/// Always produced, even when decoding failed; `decode_error` then
/// names the failed stage and `structured_value` holds the best-effort
/// fallback. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedEntry {
    /// The decoded tree, or the fallback rendering on failure.
    pub structured_value: Value,
    /// Length of the stored payload, before decompression.
    pub size_bytes: usize,
    /// Human-readable `serialization (compression)` summary.
    pub format_label: String,
    /// The error that stopped full decoding, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(serialize_with = "serialize_error")]
    pub decode_error: Option<DecodeError>,
}

impl DecodedEntry {
    pub fn has_error(&self) -> bool {
        self.decode_error.is_some()
    }

    /// Stored size in KiB, rounded to two decimals, as the listing
    /// column shows it.
    pub fn size_kb(&self) -> f64 {
        (self.size_bytes as f64 / 1024.0 * 100.0).round() / 100.0
    }
}

fn serialize_error<S: serde::Serializer>(
    error: &Option<DecodeError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(err) => serializer.serialize_str(&err.to_string()),
        None => serializer.serialize_none(),
    }
}
