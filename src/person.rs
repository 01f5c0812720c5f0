//! The person record and its identifier.
//!
//! A [`Person`] is an integer [`PersonId`] plus an open map of attributes.
//! The conventional attributes are `name`, `age`, `address` and `work`
//! ([`PERSON_ATTRIBUTES`]); their value types are opaque unless the service
//! runs in strict-schema mode (see [`crate::validation`]).
//!
//! The serialized form is flat, with the id alongside the attributes:
//!
//! ```rust
//! use person_service::person::{Person, PersonId};
//! use serde_json::json;
//!
//! let person = Person::from_value(json!({
//!     "id": 1,
//!     "name": "user1",
//!     "age": 10,
//!     "address": "address1",
//!     "work": "work1"
//! })).unwrap();
//!
//! assert_eq!(person.id(), PersonId::new(1));
//! assert_eq!(person.get("name"), Some(&json!("user1")));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Attribute names a person carries besides its id.
pub const PERSON_ATTRIBUTES: [&str; 4] = ["name", "age", "address", "work"];

/// Number of caller-supplied attributes a create payload must have.
pub const PERSON_ATTRIBUTE_COUNT: usize = PERSON_ATTRIBUTES.len();

/// Key under which the identifier is serialized.
pub const ID_KEY: &str = "id";

/// Inbound attribute payload for create and update operations.
pub type PersonData = Map<String, Value>;

/// Repository-assigned person identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    /// Wrap a raw identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw identifier.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The identifier allocated after this one, or `None` once the id space
    /// is used up.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl From<u64> for PersonId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// A stored person.
///
/// The id is held apart from the attribute map so that merges can never
/// overwrite it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    #[serde(flatten)]
    attributes: PersonData,
}

impl Person {
    /// Create a person from an id and its attributes.
    ///
    /// An `id` key inside `attributes` is discarded in favour of `id`.
    pub fn new(id: PersonId, mut attributes: PersonData) -> Self {
        attributes.remove(ID_KEY);
        Self { id, attributes }
    }

    /// Parse a person from its flat JSON form.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn attributes(&self) -> &PersonData {
        &self.attributes
    }

    /// Get a single attribute by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Set a single attribute, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if key == ID_KEY {
            return None;
        }
        self.attributes.insert(key, value)
    }

    /// Overwrite every attribute present in `data`, leaving the rest untouched.
    ///
    /// An `id` key in `data` is ignored. Returns the number of attributes written.
    pub fn merge(&mut self, data: &PersonData) -> usize {
        let mut written = 0;
        for (key, value) in data {
            if key == ID_KEY {
                continue;
            }
            self.attributes.insert(key.clone(), value.clone());
            written += 1;
        }
        written
    }

    /// Flat JSON form with `id` alongside the attributes.
    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(self.attributes.len() + 1);
        object.insert(ID_KEY.to_string(), Value::from(self.id.value()));
        for (key, value) in &self.attributes {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user1() -> Person {
        Person::from_value(json!({
            "id": 1,
            "name": "user1",
            "age": 10,
            "address": "address1",
            "work": "work1"
        }))
        .unwrap()
    }

    #[test]
    fn test_person_round_trips_flat_json() {
        let person = user1();
        assert_eq!(person.id(), PersonId::new(1));
        assert_eq!(person.attributes().len(), 4);
        assert_eq!(
            person.to_value(),
            json!({
                "id": 1,
                "name": "user1",
                "age": 10,
                "address": "address1",
                "work": "work1"
            })
        );
        assert_eq!(serde_json::to_value(&person).unwrap(), person.to_value());
    }

    #[test]
    fn test_person_requires_numeric_id() {
        assert!(Person::from_value(json!({"name": "no id"})).is_err());
        assert!(Person::from_value(json!({"id": "1", "name": "x"})).is_err());
        assert!(Person::from_value(json!({"id": -1, "name": "x"})).is_err());
    }

    #[test]
    fn test_new_discards_id_attribute() {
        let mut data = PersonData::new();
        data.insert("id".to_string(), json!(99));
        data.insert("name".to_string(), json!("a"));

        let person = Person::new(PersonId::new(5), data);
        assert_eq!(person.id(), PersonId::new(5));
        assert_eq!(person.get("id"), None);
        assert_eq!(person.to_value()["id"], json!(5));
    }

    #[test]
    fn test_merge_overwrites_only_present_keys() {
        let mut person = user1();
        let mut update = PersonData::new();
        update.insert("name".to_string(), json!("updated"));

        assert_eq!(person.merge(&update), 1);
        assert_eq!(person.get("name"), Some(&json!("updated")));
        assert_eq!(person.get("age"), Some(&json!(10)));
        assert_eq!(person.get("address"), Some(&json!("address1")));
        assert_eq!(person.get("work"), Some(&json!("work1")));
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let mut person = user1();
        let before = person.clone();
        assert_eq!(person.merge(&PersonData::new()), 0);
        assert_eq!(person, before);
    }

    #[test]
    fn test_merge_and_set_never_touch_id() {
        let mut person = user1();
        let mut update = PersonData::new();
        update.insert("id".to_string(), json!(42));

        assert_eq!(person.merge(&update), 0);
        assert_eq!(person.set("id", json!(42)), None);
        assert_eq!(person.id(), PersonId::new(1));
    }

    #[test]
    fn test_person_id_parsing() {
        assert_eq!("17".parse::<PersonId>().unwrap(), PersonId::new(17));
        assert_eq!(" 3 ".parse::<PersonId>().unwrap(), PersonId::new(3));
        assert!("abc".parse::<PersonId>().is_err());
        assert!("-1".parse::<PersonId>().is_err());
        assert_eq!(PersonId::new(4).next(), Some(PersonId::new(5)));
        assert_eq!(PersonId::new(u64::MAX).next(), None);
        assert_eq!(PersonId::new(4).to_string(), "4");
    }
}
