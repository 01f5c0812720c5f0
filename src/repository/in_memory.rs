//! In-memory person repository.
//!
//! The reference [`PersonRepository`] implementation. Records live in a `Vec`
//! behind a tokio `RwLock`, so insertion order is preserved and clones of the
//! repository share one store. It is typically seeded once at construction
//! from a JSON array of person objects.
//!
//! # Example Usage
//!
//! ```rust
//! use person_service::person::PersonId;
//! use person_service::repository::{InMemoryPersonRepository, PersonRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = InMemoryPersonRepository::from_json_str(
//!     r#"[{"id": 1, "name": "user1", "age": 10, "address": "address1", "work": "work1"}]"#,
//! )?;
//!
//! assert_eq!(repository.len().await, 1);
//! assert_eq!(repository.max_id().await, PersonId::new(1));
//! # Ok(())
//! # }
//! ```

use crate::person::{PERSON_ATTRIBUTE_COUNT, Person, PersonData, PersonId};
use crate::repository::{PersonRepository, RepositoryError};
use log::{debug, info, trace};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory person store.
///
/// Cloning is cheap and yields a handle onto the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonRepository {
    table: Arc<RwLock<PersonTable>>,
}

#[derive(Debug, Default)]
struct PersonTable {
    records: Vec<Person>,
    // Highest id ever assigned; survives deletes so ids are never reused.
    max_id: u64,
}

impl InMemoryPersonRepository {
    /// Create an empty repository. The first allocated id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `records`.
    ///
    /// Fails if two records share an id.
    pub fn from_records(records: Vec<Person>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::with_capacity(records.len());
        for person in &records {
            if !seen.insert(person.id()) {
                return Err(RepositoryError::DuplicateId { id: person.id() });
            }
        }

        let max_id = records.iter().map(|p| p.id().value()).max().unwrap_or(0);
        info!(
            "Seeded in-memory person repository with {} records (max id {})",
            records.len(),
            max_id
        );

        Ok(Self {
            table: Arc::new(RwLock::new(PersonTable { records, max_id })),
        })
    }

    /// Create a repository from a JSON array of person objects.
    pub fn from_json_str(json: &str) -> Result<Self, RepositoryError> {
        let raw: Vec<Value> = serde_json::from_str(json)?;
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                if !value.is_object() {
                    return Err(RepositoryError::malformed_record(
                        index,
                        "record is not a JSON object",
                    ));
                }
                Person::from_value(value)
                    .map_err(|e| RepositoryError::malformed_record(index, e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    /// Create a repository from a JSON seed file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        debug!("Loading person seed data from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|source| RepositoryError::SeedIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.table.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.records.is_empty()
    }

    /// Highest id assigned so far, including deleted records.
    pub async fn max_id(&self) -> PersonId {
        PersonId::new(self.table.read().await.max_id)
    }
}

impl PersonRepository for InMemoryPersonRepository {
    type Error = RepositoryError;

    async fn get_persons(&self) -> Result<Vec<Person>, Self::Error> {
        let table = self.table.read().await;
        Ok(table.records.clone())
    }

    async fn get_person(&self, id: PersonId) -> Result<Option<Person>, Self::Error> {
        let table = self.table.read().await;
        Ok(table.records.iter().find(|p| p.id() == id).cloned())
    }

    async fn create_person(&self, data: &PersonData) -> Result<Option<PersonId>, Self::Error> {
        if data.len() != PERSON_ATTRIBUTE_COUNT {
            debug!(
                "Rejecting person payload with {} attributes (expected {})",
                data.len(),
                PERSON_ATTRIBUTE_COUNT
            );
            return Ok(None);
        }

        let mut table = self.table.write().await;
        let max_id = PersonId::new(table.max_id);
        let id = max_id
            .next()
            .ok_or(RepositoryError::IdSpaceExhausted { max_id })?;
        table.records.push(Person::new(id, data.clone()));
        table.max_id = id.value();

        trace!("Stored person {} ({} records)", id, table.records.len());
        Ok(Some(id))
    }

    async fn update_person(&self, id: PersonId, data: &PersonData) -> Result<bool, Self::Error> {
        let mut table = self.table.write().await;
        let mut matched = false;

        for person in table.records.iter_mut().filter(|p| p.id() == id) {
            person.merge(data);
            matched = true;
        }

        if matched {
            trace!("Merged {} attributes into person {}", data.len(), id);
        }
        Ok(matched)
    }

    async fn delete_person(&self, id: PersonId) -> Result<bool, Self::Error> {
        let mut table = self.table.write().await;

        match table.records.iter().position(|p| p.id() == id) {
            Some(index) => {
                table.records.remove(index);
                trace!("Removed person {} ({} records left)", id, table.records.len());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
