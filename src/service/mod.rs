//! Person service operations.
//!
//! The five operations (list, get, create, update, delete) read their input
//! from a [`RequestContext`](crate::context::RequestContext), call the injected
//! repository and return a [`ServiceResponse`]:
//!
//! | Operation | Success | Not found / rejected |
//! |-----------|---------|----------------------|
//! | list      | 200, every person | never fails |
//! | get       | 200, the person | 400 (404 with [`NotFoundPolicy::Uniform`](crate::config::NotFoundPolicy)) |
//! | create    | 201, new id, `Location` header | 400 |
//! | update    | 200, the merged person | 400 (404 with `Uniform`) |
//! | delete    | 204 | 404 |
//!
//! Backend faults answer 500.
//!
//! The free functions use the default [`PersonService`]; construct one with a
//! [`ServiceConfig`](crate::config::ServiceConfig) to change policy.
//!
//! # Examples
//!
//! ```rust
//! use person_service::context::ContextBuilder;
//! use person_service::repository::InMemoryPersonRepository;
//! use person_service::service;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let context = ContextBuilder::new()
//!     .json(json!({"name": "a", "age": 1, "address": "a", "work": "a"}))
//!     .with_repository(InMemoryPersonRepository::new())
//!     .build()?;
//!
//! let response = service::create_person(&context).await;
//! assert_eq!(response.status_code, 201);
//! assert_eq!(response.header("Location"), Some("/api/v1/persons/1"));
//! # Ok(())
//! # }
//! ```

mod core;
mod errors;
mod handlers;
pub mod response;

pub use self::core::{PersonOperation, PersonOperationType, PersonService};
pub use errors::{create_error_response, status_for_error};
pub use response::{LOCATION_HEADER, ServiceResponse, status};

use crate::context::RequestContext;
use crate::person::PersonId;
use crate::repository::PersonRepository;

/// List every person with the default service.
pub async fn list_persons<R: PersonRepository>(context: &RequestContext<R>) -> ServiceResponse {
    PersonService::default().list_persons(context).await
}

/// Fetch one person with the default service.
pub async fn get_person<R: PersonRepository>(
    context: &RequestContext<R>,
    id: PersonId,
) -> ServiceResponse {
    PersonService::default().get_person(context, id).await
}

/// Create a person from the context body with the default service.
pub async fn create_person<R: PersonRepository>(context: &RequestContext<R>) -> ServiceResponse {
    PersonService::default().create_person(context).await
}

/// Merge the context body into a person with the default service.
pub async fn update_person<R: PersonRepository>(
    context: &RequestContext<R>,
    id: PersonId,
) -> ServiceResponse {
    PersonService::default().update_person(context, id).await
}

/// Delete a person with the default service.
pub async fn delete_person<R: PersonRepository>(
    context: &RequestContext<R>,
    id: PersonId,
) -> ServiceResponse {
    PersonService::default().delete_person(context, id).await
}
