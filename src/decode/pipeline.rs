//! The two-stage decode pipeline.
//!
//! Decompression first, deserialization second, and neither stage is
//! allowed to fail the call: whatever happens, the caller gets a
//! [`DecodedEntry`] carrying the most-decoded representation achieved
//! plus the error that stopped further progress. The pipeline is a pure
//! function of its arguments (no I/O, no shared state) and is safe to
//! run concurrently across entries.

use std::borrow::Cow;

use tracing::warn;

use super::{
    decompress::decompress,
    deserialize::{deserialize, fallback_value},
    value::Value,
};
use crate::{
    entry::{DecodedEntry, RawEntry},
    format::FormatTag,
};

/// Decodes one entry under the given classification.
///
/// `size_bytes` of the result always reflects the stored payload length,
/// independent of the decode outcome. When both stages fail, the
/// decompression error is reported: it is the root cause, and the
/// deserialization attempt ran on bytes already known to be suspect.
pub fn decode(raw: &RawEntry, tag: FormatTag) -> DecodedEntry {
    let size_bytes = raw.payload.len();
    let format_label = tag.label();

    let (bytes, decompression_error) = match decompress(tag.compression, &raw.payload) {
        Ok(bytes) => (bytes, None),
        Err(err) => {
            warn!(key = %raw.key, %err, "treating payload as already-decompressed");
            (Cow::Borrowed(raw.payload.as_ref()), Some(err))
        }
    };

    let (structured_value, deserialization_error) = match deserialize(tag.serialization, &bytes) {
        Ok(value) => (value, None),
        Err(err) => {
            warn!(key = %raw.key, %err, "falling back to raw rendering");
            (fallback_value(tag.serialization, &bytes), Some(err))
        }
    };

    DecodedEntry {
        structured_value,
        size_bytes,
        format_label,
        decode_error: decompression_error.or(deserialization_error),
    }
}

/// Convenience wrapper: classify the key, then decode.
pub fn decode_detected(raw: &RawEntry) -> DecodedEntry {
    decode(raw, crate::format::detect(&raw.key))
}
