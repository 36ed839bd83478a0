//! Pure functions for mapping service errors to HTTP status codes.

use crate::cache::CacheError;
use crate::storage::RepositoryError;

use super::ServiceError;

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Validation` -> 400 (Bad Request)
/// - `Cache`/`Repository` connection failures -> 503 (Service Unavailable)
/// - Any other `Cache`/`Repository` failure -> 500 (Internal Server Error)
pub fn service_error_to_status_code(error: &ServiceError) -> u16 {
    match error {
        ServiceError::NotFound(_) => 404,
        ServiceError::Validation(_) => 400,
        ServiceError::Cache(CacheError::ConnectionFailed(_)) => 503,
        ServiceError::Cache(_) => 500,
        ServiceError::Repository(RepositoryError::ConnectionFailed(_)) => 503,
        ServiceError::Repository(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::FieldError;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ServiceError::NotFound("Client not found with id: 7".to_string());
        assert_eq!(service_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error = ServiceError::Validation(vec![FieldError::new("name", "name cannot be empty")]);
        assert_eq!(service_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_cache_connection_failure_maps_to_503() {
        let error = ServiceError::Cache(CacheError::ConnectionFailed("refused".to_string()));
        assert_eq!(service_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_cache_operation_failure_maps_to_500() {
        let error = ServiceError::Cache(CacheError::OperationFailed("oom".to_string()));
        assert_eq!(service_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_repository_connection_failure_maps_to_503() {
        let error =
            ServiceError::Repository(RepositoryError::ConnectionFailed("refused".to_string()));
        assert_eq!(service_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_repository_query_failure_maps_to_500() {
        let error = ServiceError::Repository(RepositoryError::QueryFailed("bad sql".to_string()));
        assert_eq!(service_error_to_status_code(&error), 500);
    }
}
