/// Ports to external collaborators (entry sources).
pub mod application;
/// Viewer configuration loading.
pub mod config;
/// The decompress-then-deserialize pipeline and its backends.
pub mod decode;
/// Input/output units: raw entries, decoded entries, TTL.
pub mod entry;
/// Error types: decode stages, viewer glue.
pub mod error;
/// Key-driven classification of compression and serialization.
pub mod format;
/// Logging initialization (tracing).
pub mod logging;
/// Listing, filtering and rendering around the pipeline.
pub mod view;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Store-access port and the in-memory implementation.
pub use application::{EntrySource, MemorySource};
/// Viewer configuration.
pub use config::Settings;
/// Pipeline entry points and the generic tree value.
pub use decode::{decode, decode_detected, Value};
/// Inspection units.
pub use entry::{DecodedEntry, RawEntry, Ttl};
/// Error types.
pub use error::{DecodeError, ViewError};
/// Format detection.
pub use format::{detect, Compression, FormatTag, Serialization};
/// Viewer helpers: listing rows, filtering, rendering.
pub use view::{build_rows, display_key, inspect, to_ansi, to_pretty_json, KeyFilter, KeyRow};
