use thiserror::Error;

use crate::format::{Compression, Serialization};

/// Failure of one stage of the decode pipeline.
///
/// Neither variant ever propagates out of [`crate::decode::decode`]; a
/// stage failure is captured here and attached to the produced entry next
/// to the best-effort value. There is deliberately no "unknown format"
/// variant: the detector always defaults instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The compressed stream was corrupt or truncated.
    #[error("decompression failed ({algorithm}): {reason}")]
    Decompression {
        algorithm: Compression,
        reason: String,
    },

    /// The (decompressed) payload was malformed for the detected format.
    #[error("deserialization failed ({format}): {reason}")]
    Deserialization {
        format: Serialization,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failed_stage() {
        let err = DecodeError::Decompression {
            algorithm: Compression::Gzip,
            reason: "unexpected end of stream".into(),
        };
        assert_eq!(
            err.to_string(),
            "decompression failed (gzip): unexpected end of stream"
        );

        let err = DecodeError::Deserialization {
            format: Serialization::Json,
            reason: "expected value at line 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "deserialization failed (json): expected value at line 1"
        );
    }
}
