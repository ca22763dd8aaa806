use thiserror::Error;

/// Errors of the viewer glue around the decode pipeline.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid key pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("rendering failed: {0}")]
    Render(#[from] serde_json::Error),

    #[error("entry source error: {0}")]
    Source(String),
}
