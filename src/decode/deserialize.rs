//! Stage 2 of the pipeline: turning decompressed bytes into a [`Value`].
//!
//! One function per format, all returning the same generic tree. Empty
//! input decodes to `Null` for every format; nothing here panics on
//! malformed data.

use tracing::debug;

use super::{binary, value::Value};
use crate::{error::DecodeError, format::Serialization};

/// Envelope header sizes probed for wrapped JSON, in order. The real
/// header layout of the legacy writer is unconfirmed; offset 0 covers
/// writers that never prepended one, the rest are the common fixed
/// widths (version byte, type tag, word, double word).
pub const WRAPPED_HEADER_OFFSETS: &[usize] = &[0, 1, 2, 4, 8];

/// Deserializes `bytes` according to `format`.
pub fn deserialize(format: Serialization, bytes: &[u8]) -> Result<Value, DecodeError> {
    if bytes.is_empty() {
        return Ok(Value::Null);
    }
    match format {
        Serialization::Json => from_json(bytes),
        Serialization::WrappedJson => from_wrapped_json(bytes),
        Serialization::MessagePack => from_msgpack(bytes),
        Serialization::BinaryStructured => from_binary(bytes),
    }
}

/// The fallback value attached to an entry when `format` fails to parse:
/// lossy text for the JSON flavors (their payloads are almost-text), raw
/// bytes for the binary ones.
pub fn fallback_value(format: Serialization, bytes: &[u8]) -> Value {
    match format {
        Serialization::Json | Serialization::WrappedJson => Value::lossy_text(bytes),
        Serialization::MessagePack | Serialization::BinaryStructured => Value::from_raw(bytes),
    }
}

fn from_json(bytes: &[u8]) -> Result<Value, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| fail(Serialization::Json, err))
}

fn from_wrapped_json(bytes: &[u8]) -> Result<Value, DecodeError> {
    let mut last_err = None;
    for &offset in WRAPPED_HEADER_OFFSETS {
        if offset >= bytes.len() {
            break;
        }
        match serde_json::from_slice::<Value>(&bytes[offset..]) {
            Ok(value) => {
                if offset > 0 {
                    debug!(offset, "wrapped json body found after envelope header");
                }
                return Ok(value);
            }
            Err(err) => last_err = Some(err),
        }
    }

    let reason = match last_err {
        Some(err) => err.to_string(),
        None => "payload shorter than any known envelope header".to_owned(),
    };
    Err(DecodeError::Deserialization {
        format: Serialization::WrappedJson,
        reason,
    })
}

fn from_msgpack(bytes: &[u8]) -> Result<Value, DecodeError> {
    rmp_serde::from_slice(bytes).map_err(|err| fail(Serialization::MessagePack, err))
}

fn from_binary(bytes: &[u8]) -> Result<Value, DecodeError> {
    binary::decode_payload(bytes).map_err(|err| fail(Serialization::BinaryStructured, err))
}

fn fail(format: Serialization, err: impl ToString) -> DecodeError {
    DecodeError::Deserialization {
        format,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_null_for_every_format() {
        for format in [
            Serialization::BinaryStructured,
            Serialization::MessagePack,
            Serialization::Json,
            Serialization::WrappedJson,
        ] {
            assert_eq!(deserialize(format, &[]).expect("empty"), Value::Null);
        }
    }

    #[test]
    fn json_document() {
        let value = deserialize(Serialization::Json, br#"{"a":1}"#).expect("parse");
        assert_eq!(value.get("a"), Some(&Value::Int(1)));
    }

    #[test]
    fn wrapped_json_without_header_parses_at_offset_zero() {
        let value = deserialize(Serialization::WrappedJson, br#"[1,2]"#).expect("parse");
        assert_eq!(value, Value::Array(vec![Value::Int(1), Value::Int(2)]));
    }

    #[test]
    fn wrapped_json_probes_common_header_widths() {
        let body = br#"{"ok":true}"#;
        for header_len in [1usize, 2, 4, 8] {
            let mut payload = vec![0xD9; header_len];
            payload.extend_from_slice(body);
            let value =
                deserialize(Serialization::WrappedJson, &payload).expect("parse past header");
            assert_eq!(value.get("ok"), Some(&Value::Bool(true)), "{header_len}");
        }
    }

    #[test]
    fn wrapped_json_with_unknown_header_width_fails() {
        let mut payload = vec![0xD9; 5]; // not a probed width
        payload.extend_from_slice(br#"{"ok":true}"#);
        let err = deserialize(Serialization::WrappedJson, &payload).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Deserialization {
                format: Serialization::WrappedJson,
                ..
            }
        ));
    }

    #[test]
    fn msgpack_value() {
        let payload = rmp_serde::to_vec(&(1u8, "two")).expect("encode");
        let value = deserialize(Serialization::MessagePack, &payload).expect("parse");
        assert_eq!(
            value,
            Value::Array(vec![Value::Int(1), Value::Str("two".into())])
        );
    }

    #[test]
    fn malformed_msgpack_fails() {
        // fixmap of one entry, then nothing.
        let err = deserialize(Serialization::MessagePack, &[0x81]).unwrap_err();
        assert!(matches!(err, DecodeError::Deserialization { .. }));
    }

    #[test]
    fn binary_garbage_fails() {
        let err = deserialize(Serialization::BinaryStructured, &[0x99, 0x01, 0x02]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Deserialization {
                format: Serialization::BinaryStructured,
                ..
            }
        ));
    }

    #[test]
    fn fallback_policy_per_format() {
        assert_eq!(
            fallback_value(Serialization::Json, &[b'a', 0xFF]),
            Value::Str("a\u{FFFD}".into())
        );
        assert_eq!(
            fallback_value(Serialization::BinaryStructured, &[0xFF, 0x01]),
            Value::Bytes(vec![0xFF, 0x01])
        );
        assert_eq!(
            fallback_value(Serialization::MessagePack, b"text"),
            Value::Str("text".into())
        );
    }
}
