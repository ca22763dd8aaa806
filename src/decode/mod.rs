//! Decoding of stored payloads into displayable values.
//!
//! ## Architecture
//!
//! A payload goes through two stages, both driven by the [`FormatTag`]
//! computed from the key:
//!
//! 1. `decompress` reverses the storage compression (gzip, snappy,
//!    lz4, or nothing),
//! 2. `deserialize` parses the result with one of four backends
//!    (JSON, wrapped JSON, MessagePack, or the legacy binary envelope)
//!    into the shared [`Value`] tree.
//!
//! [`fn@decode`] glues the stages together with the best-effort
//! fallback policy: a failed stage is recorded on the entry, never
//! raised.
//!
//! ## Modules
//!
//! - [`pipeline`] — the two-stage driver and fallback policy
//! - [`mod@decompress`] — stage 1
//! - [`mod@deserialize`] — stage 2 dispatch
//! - [`binary`] — the legacy self-describing envelope codec
//! - [`varint`] — length encoding used by the envelope
//! - [`value`] — the generic tree all backends produce
//!
//! [`FormatTag`]: crate::format::FormatTag

pub mod binary;
pub mod decompress;
pub mod deserialize;
pub mod pipeline;
pub mod value;
pub mod varint;

pub use decompress::decompress;
pub use deserialize::{deserialize, fallback_value, WRAPPED_HEADER_OFFSETS};
pub use pipeline::{decode, decode_detected};
pub use value::Value;
