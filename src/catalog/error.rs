//! Error types for Catalog Service calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (connect, timeout, decode).
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Catalog returned {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// The backend is unreachable.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Status { status, .. } => Some(*status),
            CatalogError::Transport(e) => e.status().map(|s| s.as_u16()),
            CatalogError::Unavailable(_) => None,
        }
    }
}
