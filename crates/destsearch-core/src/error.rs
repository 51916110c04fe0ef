// crates/destsearch-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading or caching a catalog.
///
/// Searching and driving the interaction state machine never fail; only the
/// I/O facing collaborators return this type.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid catalog data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
