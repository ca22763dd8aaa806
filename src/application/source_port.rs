//! Interface (port) to the store-access collaborator.
//!
//! The decode pipeline itself never talks to a store; whatever fetches
//! entries (a client process, a dump file, a test fixture) implements
//! this trait. Connection management, timeouts and retries all live
//! behind it, on the implementor's side.

use crate::{entry::RawEntry, error::ViewError};

pub trait EntrySource {
    /// Keys matching the store-side pattern (`*` for all), unsorted.
    fn keys(&self, pattern: &str) -> Result<Vec<String>, ViewError>;

    /// Fetches one entry. `Ok(None)` means the key disappeared since it
    /// was listed; a normal race, not a source failure.
    fn entry(&self, key: &str) -> Result<Option<RawEntry>, ViewError>;
}
