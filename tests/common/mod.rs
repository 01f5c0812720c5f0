//! Shared fixtures for person service integration tests.

#![allow(dead_code)]

use person_service::context::{ContextBuilder, Manager, RequestContext};
use person_service::person::{Person, PersonData, PersonId};
use person_service::repository::{InMemoryPersonRepository, PersonRepository, RepositoryError};
use serde_json::{Value, json};
use std::sync::Mutex;

/// Seed file with four persons, ids 1 through 4.
pub const SEED_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/persons.json");

/// Number of records in the seed file.
pub const SEED_COUNT: usize = 4;

/// A fresh repository loaded from the seed file.
pub fn seeded_repository() -> InMemoryPersonRepository {
    InMemoryPersonRepository::from_json_file(SEED_PATH).expect("seed file should load")
}

/// A context over a fresh seeded repository, with an optional JSON body.
pub fn create_context(body: Option<Value>) -> RequestContext<InMemoryPersonRepository> {
    context_with(seeded_repository(), body)
}

/// A context over the given repository, with an optional JSON body.
pub fn context_with<R>(repository: R, body: Option<Value>) -> RequestContext<R> {
    let mut builder = ContextBuilder::new().with_repository(repository);
    if let Some(body) = body {
        builder = builder.json(body);
    }
    builder.build().expect("context should build")
}

/// The first seeded record.
pub fn user1() -> Value {
    json!({
        "id": 1,
        "name": "user1",
        "age": 10,
        "address": "address1",
        "work": "work1"
    })
}

/// A valid four-attribute create payload.
pub fn valid_payload() -> Value {
    json!({"name": "a", "age": 1, "address": "a", "work": "a"})
}

pub fn payload(value: Value) -> PersonData {
    serde_json::from_value(value).expect("payload should be an object")
}

/// Repository whose backend is always down.
#[derive(Debug, Clone, Default)]
pub struct UnavailableRepository;

impl PersonRepository for UnavailableRepository {
    type Error = RepositoryError;

    async fn get_persons(&self) -> Result<Vec<Person>, Self::Error> {
        Err(RepositoryError::unavailable("backend offline"))
    }

    async fn get_person(&self, _id: PersonId) -> Result<Option<Person>, Self::Error> {
        Err(RepositoryError::unavailable("backend offline"))
    }

    async fn create_person(&self, _data: &PersonData) -> Result<Option<PersonId>, Self::Error> {
        Err(RepositoryError::unavailable("backend offline"))
    }

    async fn update_person(&self, _id: PersonId, _data: &PersonData) -> Result<bool, Self::Error> {
        Err(RepositoryError::unavailable("backend offline"))
    }

    async fn delete_person(&self, _id: PersonId) -> Result<bool, Self::Error> {
        Err(RepositoryError::unavailable("backend offline"))
    }
}

/// Manager that records what it is told, for registry tests.
#[derive(Debug, Default)]
pub struct RecordingManager {
    pub events: Mutex<Vec<String>>,
}

impl RecordingManager {
    pub fn record(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }
}

impl Manager for RecordingManager {
    fn name(&self) -> &str {
        "recorder"
    }
}

/// Initialise test logging once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
