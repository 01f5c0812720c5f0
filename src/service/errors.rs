//! Mapping from service errors to responses.

use crate::config::NotFoundPolicy;
use crate::error::ServiceError;
use crate::service::core::PersonOperationType;
use crate::service::response::{ServiceResponse, status};

/// Status code reporting `error` for `operation` under `policy`.
pub fn status_for_error(
    error: &ServiceError,
    operation: PersonOperationType,
    policy: NotFoundPolicy,
) -> u16 {
    match error {
        ServiceError::PersonNotFound { .. } => policy.status_for(operation),
        ServiceError::Validation(_) | ServiceError::InvalidRequest { .. } | ServiceError::Json(_) => {
            status::BAD_REQUEST
        }
        ServiceError::Repository(_) | ServiceError::Internal { .. } => {
            status::INTERNAL_SERVER_ERROR
        }
    }
}

/// Create the response for a failed operation.
pub fn create_error_response(
    error: &ServiceError,
    operation: PersonOperationType,
    policy: NotFoundPolicy,
) -> ServiceResponse {
    ServiceResponse::with_status(status_for_error(error, operation, policy))
}
