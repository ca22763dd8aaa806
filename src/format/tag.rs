use std::fmt;

use serde::{Deserialize, Serialize};

/// Compression algorithm applied to a payload before it was stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compression {
    /// Payload stored as-is.
    None,
    /// Deflate stream with a gzip header.
    Gzip,
    /// Snappy block (or framed) compression.
    Snappy,
    /// LZ4 frame compression.
    Lz4,
}

/// Serialization format of the decompressed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Serialization {
    /// The legacy self-describing binary envelope, the default for keys
    /// without a recognized marker. Historically labelled "gob".
    BinaryStructured,
    /// MessagePack.
    MessagePack,
    /// Plain JSON document.
    Json,
    /// JSON body preceded by a short binary envelope header.
    /// Historically labelled "gojson".
    WrappedJson,
}

/// Immutable classification of a stored entry.
///
/// Computed from the key alone; it never depends on whether the payload
/// actually decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatTag {
    pub compression: Compression,
    pub serialization: Serialization,
}

impl FormatTag {
    /// Human-readable summary, e.g. `json (gzip)` or `msgpack`.
    pub fn label(&self) -> String {
        match self.compression {
            Compression::None => self.serialization.to_string(),
            compression => format!("{} ({})", self.serialization, compression),
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compression::None => "none",
            Compression::Gzip => "gzip",
            Compression::Snappy => "snappy",
            Compression::Lz4 => "lz4",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Serialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The historical writer-side names; operators know these from the
        // key convention, so they are kept verbatim in labels.
        let name = match self {
            Serialization::BinaryStructured => "gob",
            Serialization::MessagePack => "msgpack",
            Serialization::Json => "json",
            Serialization::WrappedJson => "gojson",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_omits_none_compression() {
        let tag = FormatTag {
            compression: Compression::None,
            serialization: Serialization::Json,
        };
        assert_eq!(tag.label(), "json");
    }

    #[test]
    fn label_includes_compression_when_present() {
        let tag = FormatTag {
            compression: Compression::Lz4,
            serialization: Serialization::MessagePack,
        };
        assert_eq!(tag.label(), "msgpack (lz4)");
    }
}
