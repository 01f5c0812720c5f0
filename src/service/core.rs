//! Service core: the operation types and the main dispatcher.

use crate::config::ServiceConfig;
use crate::context::RequestContext;
use crate::person::PersonId;
use crate::repository::PersonRepository;
use crate::service::response::ServiceResponse;
use crate::validation::PayloadValidator;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport-agnostic person service.
///
/// Holds policy only; all state lives in the repository carried by each
/// [`RequestContext`].
#[derive(Debug, Clone, Default)]
pub struct PersonService {
    pub(super) config: ServiceConfig,
    pub(super) validator: PayloadValidator,
}

/// The five person operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonOperationType {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl fmt::Display for PersonOperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// An operation together with its target id, if it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonOperation {
    List,
    Get(PersonId),
    Create,
    Update(PersonId),
    Delete(PersonId),
}

impl PersonOperation {
    pub fn operation_type(&self) -> PersonOperationType {
        match self {
            Self::List => PersonOperationType::List,
            Self::Get(_) => PersonOperationType::Get,
            Self::Create => PersonOperationType::Create,
            Self::Update(_) => PersonOperationType::Update,
            Self::Delete(_) => PersonOperationType::Delete,
        }
    }

    /// Target id for get, update and delete.
    pub fn id(&self) -> Option<PersonId> {
        match self {
            Self::Get(id) | Self::Update(id) | Self::Delete(id) => Some(*id),
            Self::List | Self::Create => None,
        }
    }
}

impl PersonService {
    /// Create a service with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let validator = PayloadValidator::new(config.validation_mode);
        Self { config, validator }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run `operation` against the context's repository.
    ///
    /// Never fails: every error is mapped to a status code.
    pub async fn handle_operation<R: PersonRepository>(
        &self,
        context: &RequestContext<R>,
        operation: PersonOperation,
    ) -> ServiceResponse {
        let request_id = context.request_id();
        let operation_type = operation.operation_type();

        info!(
            "Person service processing {} (id: {:?}, request: '{}')",
            operation_type,
            operation.id().map(PersonId::value),
            request_id
        );

        let result = match operation {
            PersonOperation::List => super::handlers::handle_list(self, context).await,
            PersonOperation::Get(id) => super::handlers::handle_get(self, context, id).await,
            PersonOperation::Create => super::handlers::handle_create(self, context).await,
            PersonOperation::Update(id) => super::handlers::handle_update(self, context, id).await,
            PersonOperation::Delete(id) => super::handlers::handle_delete(self, context, id).await,
        };

        match result {
            Ok(response) => {
                debug!(
                    "Person service completed {} with status {} (request: '{}')",
                    operation_type, response.status_code, request_id
                );
                response
            }
            Err(e) => {
                warn!(
                    "Person service {} failed: {} (request: '{}')",
                    operation_type, e, request_id
                );
                super::errors::create_error_response(&e, operation_type, self.config.not_found_policy)
            }
        }
    }

    /// List every person. Always 200.
    pub async fn list_persons<R: PersonRepository>(
        &self,
        context: &RequestContext<R>,
    ) -> ServiceResponse {
        self.handle_operation(context, PersonOperation::List).await
    }

    /// Fetch one person.
    pub async fn get_person<R: PersonRepository>(
        &self,
        context: &RequestContext<R>,
        id: PersonId,
    ) -> ServiceResponse {
        self.handle_operation(context, PersonOperation::Get(id)).await
    }

    /// Create a person from the context body.
    pub async fn create_person<R: PersonRepository>(
        &self,
        context: &RequestContext<R>,
    ) -> ServiceResponse {
        self.handle_operation(context, PersonOperation::Create).await
    }

    /// Merge the context body into an existing person.
    pub async fn update_person<R: PersonRepository>(
        &self,
        context: &RequestContext<R>,
        id: PersonId,
    ) -> ServiceResponse {
        self.handle_operation(context, PersonOperation::Update(id)).await
    }

    /// Delete a person.
    pub async fn delete_person<R: PersonRepository>(
        &self,
        context: &RequestContext<R>,
        id: PersonId,
    ) -> ServiceResponse {
        self.handle_operation(context, PersonOperation::Delete(id)).await
    }
}
