use thiserror::Error;

/// Faults raised by the persistent substrate. Missing records are never
/// reported here; lookups return `None` instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Substrate(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("title is required")]
    TitleRequired,
    #[error(transparent)]
    Store(#[from] StoreError),
}
