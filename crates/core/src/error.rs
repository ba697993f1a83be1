//! Domain error model.

use thiserror::Error;

/// Result type used across the domain and store layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure a store operation can produce maps onto exactly one variant, and
/// every variant maps onto exactly one HTTP status at the API boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was missing or empty (e.g. `name`).
    #[error("{0}")]
    Validation(String),

    /// No record exists with the requested identifier.
    #[error("Item not found")]
    NotFound,

    /// The backing storage failed (connection, SQL, poisoned lock, corrupt row).
    #[error("{0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// `true` for failures caused by the caller rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound)
    }
}
