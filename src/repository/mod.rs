//! Repository abstraction for person records.
//!
//! The [`PersonRepository`] trait is the seam at which persistence is swapped:
//! service operations only ever talk to this trait, and any backend (file,
//! database, remote service) can sit behind it.
//!
//! # Outcome model
//!
//! Normal outcomes are never errors:
//! - a missing record is `Ok(None)` from [`get_person`](PersonRepository::get_person)
//! - a payload with the wrong attribute count is `Ok(None)` from
//!   [`create_person`](PersonRepository::create_person)
//! - an unknown id is `Ok(false)` from update and delete
//!
//! `Err` is reserved for backend faults. The in-memory implementation never
//! produces one after construction.
//!
//! # Example Usage
//!
//! ```rust
//! use person_service::person::{PersonData, PersonId};
//! use person_service::repository::{InMemoryPersonRepository, PersonRepository};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = InMemoryPersonRepository::new();
//!
//! let data: PersonData = serde_json::from_value(json!({
//!     "name": "a", "age": 1, "address": "a", "work": "a"
//! }))?;
//! let id = repository.create_person(&data).await?.expect("four attributes");
//! assert_eq!(id, PersonId::new(1));
//!
//! let person = repository.get_person(id).await?;
//! assert!(person.is_some());
//!
//! assert!(repository.delete_person(id).await?);
//! assert!(!repository.delete_person(id).await?);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::RepositoryError;
pub use in_memory::InMemoryPersonRepository;

use crate::person::{Person, PersonData, PersonId};
use std::future::Future;

/// Storage contract for person records.
///
/// Every record handed out is an independent copy: mutating it never affects
/// the store, and later writes to the store never affect it.
pub trait PersonRepository: Send + Sync {
    /// The error type returned for backend faults.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return every stored person in the store's natural order.
    fn get_persons(&self) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send;

    /// Return the person whose id matches, or `None`.
    fn get_person(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send;

    /// Store a new person and return its assigned id.
    ///
    /// Returns `None` without touching the store unless `data` has exactly
    /// [`PERSON_ATTRIBUTE_COUNT`](crate::person::PERSON_ATTRIBUTE_COUNT) keys.
    /// Ids are allocated as `max_id + 1` and never reused.
    fn create_person(
        &self,
        data: &PersonData,
    ) -> impl Future<Output = Result<Option<PersonId>, Self::Error>> + Send;

    /// Merge `data` into every record carrying `id`.
    ///
    /// Keys present in `data` overwrite, absent keys keep their value. Returns
    /// `false` without touching the store if no record matches.
    fn update_person(
        &self,
        id: PersonId,
        data: &PersonData,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Remove the single record whose id field equals `id`.
    ///
    /// Returns `false` without touching the store if no record matches.
    fn delete_person(&self, id: PersonId) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
