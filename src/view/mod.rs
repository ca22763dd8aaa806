//! Viewer glue: everything between the decode pipeline and a screen.
//!
//! Filtering and listing rows, display-key handling, value rendering,
//! and [`inspect`], the fetch-classify-decode path behind "open this
//! key".

pub mod filter;
pub mod render;
pub mod row;

pub use filter::{display_key, KeyFilter, NAMESPACE_MARKER};
pub use render::{to_ansi, to_pretty_json};
pub use row::{build_rows, KeyRow};

use crate::{
    application::EntrySource,
    decode::decode,
    entry::DecodedEntry,
    error::ViewError,
    format::detect,
};

/// Fetches and decodes one entry.
///
/// A key that disappeared between listing and fetch surfaces as
/// [`ViewError::KeyNotFound`]; decode failures do not surface here at
/// all; they ride inside the returned entry.
pub fn inspect<S: EntrySource>(source: &S, key: &str) -> Result<DecodedEntry, ViewError> {
    let raw = source
        .entry(key)?
        .ok_or_else(|| ViewError::KeyNotFound(key.to_owned()))?;
    Ok(decode(&raw, detect(&raw.key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::MemorySource;

    #[test]
    fn inspect_decodes_a_present_key() {
        let mut source = MemorySource::new();
        source.insert("c0go.s3:user:1", &br#"{"id":1}"#[..], 90);

        let entry = inspect(&source, "c0go.s3:user:1").expect("inspect");
        assert_eq!(entry.decode_error, None);
        assert_eq!(entry.format_label, "json");
    }

    #[test]
    fn inspect_reports_a_vanished_key() {
        let source = MemorySource::new();
        let err = inspect(&source, "c0go.s3:gone").unwrap_err();
        assert!(matches!(err, ViewError::KeyNotFound(_)));
    }
}
