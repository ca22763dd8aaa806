//! Key-driven format detection.
//!
//! The writers embed two markers into every key:
//!
//! * the first two characters name the compression algorithm
//!   (`c0`..`c3`),
//! * the two characters after the first `.` name the serialization
//!   format (`s2`..`s4`).
//!
//! A key like `c1go.s3:user:42` therefore means "gzip-compressed JSON".
//! Both markers are part of the wire contract with the store and must be
//! preserved exactly; anything unrecognized falls through to a default
//! instead of failing. Detection never reads the payload.

use super::{Compression, FormatTag, Serialization};

/// Classifies a key into a [`FormatTag`].
///
/// Pure and total: any string, including the empty one, maps to a tag.
/// Malformed or short keys get the defaults (`BinaryStructured`,
/// uncompressed).
pub fn detect(key: &str) -> FormatTag {
    FormatTag {
        compression: detect_compression(key),
        serialization: detect_serialization(key),
    }
}

fn detect_compression(key: &str) -> Compression {
    let bytes = key.as_bytes();
    // Writers never produce a bare two-character key, so the marker is
    // only trusted when something follows it.
    if bytes.len() > 2 {
        match &bytes[..2] {
            b"c0" => return Compression::None,
            b"c1" => return Compression::Gzip,
            b"c2" => return Compression::Snappy,
            b"c3" => return Compression::Lz4,
            _ => {}
        }
    }
    Compression::None
}

fn detect_serialization(key: &str) -> Serialization {
    let bytes = key.as_bytes();
    if bytes.len() > 4 {
        if let Some(dot) = bytes.iter().position(|&b| b == b'.') {
            let rest = &bytes[dot + 1..];
            if rest.len() > 1 {
                match &rest[..2] {
                    b"s2" => return Serialization::MessagePack,
                    b"s3" => return Serialization::Json,
                    b"s4" => return Serialization::WrappedJson,
                    _ => {}
                }
            }
        }
    }
    Serialization::BinaryStructured
}
