//! Person CRUD service layer for Rust.
//!
//! Provides HTTP-style list/get/create/update/delete operations over person
//! records, with storage delegated to an injected repository.
//!
//! # Core Components
//!
//! - [`PersonRepository`] - Trait for implementing storage backends
//! - [`InMemoryPersonRepository`] - Reference in-memory backend, seedable from JSON
//! - [`RequestContext`] - Per-request data plus the injected repository
//! - [`PersonService`] - The five operations, mapping outcomes to status codes
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use person_service::{ContextBuilder, InMemoryPersonRepository, PersonId, service};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = InMemoryPersonRepository::from_json_file("persons.json")?;
//! let context = ContextBuilder::new().with_repository(repository).build()?;
//!
//! let response = service::get_person(&context, PersonId::new(1)).await;
//! println!("{} {:?}", response.status_code, response.result);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod person;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{NotFoundPolicy, ServiceConfig, ServiceConfigBuilder, ValidationMode};
pub use context::{ContextBuilder, FileAttachment, Manager, ManagerRegistry, RequestContext};
pub use error::{ServiceError, ServiceResult, ValidationError};
pub use person::{Person, PersonData, PersonId};
pub use repository::{InMemoryPersonRepository, PersonRepository, RepositoryError};
pub use service::{PersonOperation, PersonOperationType, PersonService, ServiceResponse};
