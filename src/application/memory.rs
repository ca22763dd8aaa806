//! In-memory [`EntrySource`], backing tests and offline inspection.

use std::collections::HashMap;

use bytes::Bytes;

use super::EntrySource;
use crate::{
    entry::RawEntry,
    error::ViewError,
    view::KeyFilter,
};

/// A source over a fixed set of entries.
#[derive(Debug, Default)]
pub struct MemorySource {
    entries: HashMap<String, RawEntry>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, payload: impl Into<Bytes>, ttl_seconds: i64) {
        let key = key.into();
        self.entries
            .insert(key.clone(), RawEntry::new(key, payload, ttl_seconds));
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntrySource for MemorySource {
    fn keys(&self, pattern: &str) -> Result<Vec<String>, ViewError> {
        let filter = KeyFilter::new(pattern)?;
        Ok(self
            .entries
            .keys()
            .filter(|key| filter.matches(key))
            .cloned()
            .collect())
    }

    fn entry(&self, key: &str) -> Result<Option<RawEntry>, ViewError> {
        Ok(self.entries.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_respect_the_pattern() {
        let mut source = MemorySource::new();
        source.insert("c0go.s3:user:1", &b"{}"[..], -1);
        source.insert("c0go.s3:order:1", &b"{}"[..], -1);

        let mut keys = source.keys("user").expect("keys");
        keys.sort();
        assert_eq!(keys, ["c0go.s3:user:1"]);

        assert_eq!(source.keys("*").expect("keys").len(), 2);
    }

    #[test]
    fn missing_entry_is_none_not_error() {
        let source = MemorySource::new();
        assert!(source.entry("gone").expect("fetch").is_none());
    }
}
