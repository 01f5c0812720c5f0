//! Error types for person service operations.
//!
//! Service operations never hand these to their callers: every error is
//! translated into a status code by the service layer before a
//! response is produced. They exist so the internals can use `?` and so log
//! lines carry a precise description of what went wrong.

use crate::person::PersonId;

/// Main error type for person service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request payload failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Errors raised by the injected repository backend
    #[error("Repository error: {0}")]
    Repository(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No person carries the requested id
    #[error("Person not found: {id}")]
    PersonNotFound { id: PersonId },

    /// Request payload was rejected by the repository
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Internal service errors
    #[error("Internal service error: {message}")]
    Internal { message: String },
}

/// Validation errors raised before a payload reaches the repository.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Payload has the wrong number of attributes
    #[error("Expected exactly {expected} attributes, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// Required attribute is missing
    #[error("Required attribute '{field}' is missing")]
    MissingField { field: String },

    /// Attribute is not part of the person schema
    #[error("Unknown attribute '{field}'")]
    UnknownField { field: String },

    /// Attribute value doesn't match the expected type
    #[error("Attribute '{field}' has invalid type, expected {expected}, got {actual}")]
    InvalidFieldType {
        field: String,
        expected: String,
        actual: String,
    },

    /// Request body is not a JSON object
    #[error("Request body must be a JSON object, got {actual}")]
    NotAnObject { actual: String },

    /// Client supplied an id, which is always assigned by the repository
    #[error("Client cannot provide 'id'")]
    ClientProvidedId,
}

impl ServiceError {
    /// Create a not-found error for the given id.
    pub fn not_found(id: PersonId) -> Self {
        Self::PersonNotFound { id }
    }

    /// Wrap a repository backend error.
    pub fn repository<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Repository(Box::new(error))
    }

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error describes a client mistake rather than a backend fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::PersonNotFound { .. } | Self::InvalidRequest { .. }
        )
    }
}

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Short JSON type name used in validation messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
