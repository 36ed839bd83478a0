use thiserror::Error;

use crate::billing::FieldError;
use crate::cache::CacheError;
use crate::storage::RepositoryError;

/// Errors surfaced by entity services.
///
/// `NotFound` and `Validation` are client-facing and carry structured detail;
/// the `Cache` and `Repository` variants are the internal class and are
/// reported generically at the boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The requested entity or collection does not exist.
    #[error("{0}")]
    NotFound(String),
    /// One or more request fields failed validation.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    /// Cache backend failure.
    #[error(transparent)]
    Cache(#[from] CacheError),
    /// Repository failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<FieldError> for ServiceError {
    fn from(error: FieldError) -> Self {
        Self::Validation(vec![error])
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
