//! Service configuration.
//!
//! [`ServiceConfig`] controls the pieces of behaviour that are policy rather
//! than contract: the canonical path used for `Location` headers, how strictly
//! payloads are validated, and which status code reports a missing person.
//! The defaults reproduce the legacy behaviour exactly.

use crate::error::{ServiceError, ServiceResult};
use crate::person::PersonId;
use crate::service::{PersonOperationType, status};
use serde::{Deserialize, Serialize};

/// Default canonical collection path for person resources.
pub const DEFAULT_BASE_PATH: &str = "/api/v1/persons";

/// How request payloads are checked before they reach the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Create payloads must have exactly four attributes; names and value
    /// types are not checked. Update payloads are not checked.
    #[default]
    CountOnly,

    /// Payloads must use only `name`, `age`, `address` and `work`, with
    /// string values and a non-negative integer age. Create requires all four.
    StrictSchema,
}

/// Which status code reports an id that matches no person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundPolicy {
    /// get and update answer 400, delete answers 404.
    #[default]
    Legacy,

    /// Every operation answers 404.
    Uniform,
}

impl NotFoundPolicy {
    /// Status code for a missing person during `operation`.
    pub fn status_for(self, operation: PersonOperationType) -> u16 {
        match (self, operation) {
            (_, PersonOperationType::Delete) => status::NOT_FOUND,
            (NotFoundPolicy::Uniform, _) => status::NOT_FOUND,
            (NotFoundPolicy::Legacy, _) => status::BAD_REQUEST,
        }
    }
}

/// Configuration for a [`PersonService`](crate::service::PersonService).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Collection path used to build `Location` headers, without trailing slash.
    pub base_path: String,

    pub validation_mode: ValidationMode,

    pub not_found_policy: NotFoundPolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            validation_mode: ValidationMode::default(),
            not_found_policy: NotFoundPolicy::default(),
        }
    }
}

impl ServiceConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ServiceResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Canonical path of a single person, e.g. `/api/v1/persons/5`.
    pub fn location_for(&self, id: PersonId) -> String {
        format!("{}/{}", self.base_path, id)
    }

    /// Ensure the base path is usable for building locations.
    pub fn validate(&self) -> ServiceResult<()> {
        if self.base_path.is_empty() {
            return Err(ServiceError::internal("Base path cannot be empty"));
        }
        if !self.base_path.starts_with('/') {
            return Err(ServiceError::internal(format!(
                "Base path must start with '/': {}",
                self.base_path
            )));
        }
        if self.base_path.len() > 1 && self.base_path.ends_with('/') {
            return Err(ServiceError::internal(format!(
                "Base path must not end with '/': {}",
                self.base_path
            )));
        }
        Ok(())
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Debug, Clone, Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collection path used for `Location` headers.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.config.base_path = base_path.into();
        self
    }

    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.config.validation_mode = mode;
        self
    }

    pub fn with_not_found_policy(mut self, policy: NotFoundPolicy) -> Self {
        self.config.not_found_policy = policy;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> ServiceResult<ServiceConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.base_path, "/api/v1/persons");
        assert_eq!(config.validation_mode, ValidationMode::CountOnly);
        assert_eq!(config.not_found_policy, NotFoundPolicy::Legacy);
        assert!(config.validate().is_ok());
        assert_eq!(config.location_for(PersonId::new(5)), "/api/v1/persons/5");
    }

    #[test]
    fn test_not_found_status_codes() {
        use PersonOperationType::*;

        assert_eq!(NotFoundPolicy::Legacy.status_for(Get), 400);
        assert_eq!(NotFoundPolicy::Legacy.status_for(Update), 400);
        assert_eq!(NotFoundPolicy::Legacy.status_for(Delete), 404);

        assert_eq!(NotFoundPolicy::Uniform.status_for(Get), 404);
        assert_eq!(NotFoundPolicy::Uniform.status_for(Update), 404);
        assert_eq!(NotFoundPolicy::Uniform.status_for(Delete), 404);
    }

    #[test]
    fn test_builder() {
        let config = ServiceConfig::builder()
            .with_base_path("/people")
            .with_validation_mode(ValidationMode::StrictSchema)
            .with_not_found_policy(NotFoundPolicy::Uniform)
            .build()
            .unwrap();

        assert_eq!(config.location_for(PersonId::new(1)), "/people/1");
        assert_eq!(config.validation_mode, ValidationMode::StrictSchema);

        assert!(ServiceConfig::builder().with_base_path("").build().is_err());
        assert!(ServiceConfig::builder().with_base_path("people").build().is_err());
        assert!(ServiceConfig::builder().with_base_path("/people/").build().is_err());
    }

    #[test]
    fn test_from_json_uses_defaults_for_missing_fields() {
        let config = ServiceConfig::from_json_str(r#"{"validation_mode": "strict_schema"}"#).unwrap();
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
        assert_eq!(config.validation_mode, ValidationMode::StrictSchema);
        assert_eq!(config.not_found_policy, NotFoundPolicy::Legacy);

        assert!(ServiceConfig::from_json_str(r#"{"not_found_policy": "sometimes"}"#).is_err());
        assert!(ServiceConfig::from_json_str(r#"{"base_path": "nope"}"#).is_err());
    }
}
