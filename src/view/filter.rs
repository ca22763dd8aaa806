//! Key filtering for the listing pane.

use globset::{GlobBuilder, GlobMatcher};

use crate::error::ViewError;

/// Namespace marker the writers prepend to every key after the
/// compression prefix. The listing shows keys without it.
pub const NAMESPACE_MARKER: &str = "go.";

/// The portion of a key shown to the operator: everything after the
/// namespace marker, or the whole key when the marker is absent.
pub fn display_key(key: &str) -> &str {
    match key.split_once(NAMESPACE_MARKER) {
        Some((_, rest)) => rest,
        None => key,
    }
}

/// Case-insensitive filter over display keys.
///
/// A pattern with glob metacharacters is used as-is; a bare word is
/// wrapped in `*word*`, so typing a fragment matches anywhere in the
/// key. `*` and the empty pattern match everything.
#[derive(Debug)]
pub struct KeyFilter {
    matcher: Option<GlobMatcher>,
}

impl KeyFilter {
    pub fn new(pattern: &str) -> Result<Self, ViewError> {
        if pattern.is_empty() || pattern == "*" {
            return Ok(Self { matcher: None });
        }

        let pattern = if pattern.contains(['*', '?', '[']) {
            pattern.to_owned()
        } else {
            format!("*{pattern}*")
        };
        let glob = GlobBuilder::new(&pattern)
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            matcher: Some(glob.compile_matcher()),
        })
    }

    pub fn matches(&self, key: &str) -> bool {
        match &self.matcher {
            None => true,
            Some(matcher) => matcher.is_match(display_key(key)),
        }
    }
}
