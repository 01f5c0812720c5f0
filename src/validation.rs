//! Payload validation applied before any mutation.
//!
//! In [`ValidationMode::CountOnly`] only the attribute count of a create
//! payload is checked, matching what the repository itself enforces. In
//! [`ValidationMode::StrictSchema`] the attribute names and value types are
//! checked as well.

use crate::config::ValidationMode;
use crate::error::{ValidationError, json_type_name};
use crate::person::{ID_KEY, PERSON_ATTRIBUTE_COUNT, PERSON_ATTRIBUTES, PersonData};
use serde_json::Value;

/// Validates create and update payloads according to a [`ValidationMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PayloadValidator {
    mode: ValidationMode,
}

impl PayloadValidator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Interpret a request body as an attribute map.
    pub fn payload_from_body(body: &Value) -> Result<PersonData, ValidationError> {
        match body {
            Value::Object(map) => Ok(map.clone()),
            // An absent body arrives as null and counts as empty.
            Value::Null => Ok(PersonData::new()),
            other => Err(ValidationError::NotAnObject {
                actual: json_type_name(other).to_string(),
            }),
        }
    }

    /// Validate a create payload.
    pub fn validate_create(&self, data: &PersonData) -> Result<(), ValidationError> {
        match self.mode {
            ValidationMode::CountOnly => check_count(data),
            ValidationMode::StrictSchema => {
                check_known_fields(data)?;
                for field in PERSON_ATTRIBUTES {
                    if !data.contains_key(field) {
                        return Err(ValidationError::MissingField {
                            field: field.to_string(),
                        });
                    }
                }
                check_types(data)?;
                check_count(data)
            }
        }
    }

    /// Validate an update payload. An empty payload is always valid.
    pub fn validate_update(&self, data: &PersonData) -> Result<(), ValidationError> {
        match self.mode {
            ValidationMode::CountOnly => Ok(()),
            ValidationMode::StrictSchema => {
                check_known_fields(data)?;
                check_types(data)
            }
        }
    }
}

fn check_count(data: &PersonData) -> Result<(), ValidationError> {
    if data.len() != PERSON_ATTRIBUTE_COUNT {
        return Err(ValidationError::FieldCount {
            expected: PERSON_ATTRIBUTE_COUNT,
            actual: data.len(),
        });
    }
    Ok(())
}

fn check_known_fields(data: &PersonData) -> Result<(), ValidationError> {
    for key in data.keys() {
        if key == ID_KEY {
            return Err(ValidationError::ClientProvidedId);
        }
        if !PERSON_ATTRIBUTES.contains(&key.as_str()) {
            return Err(ValidationError::UnknownField { field: key.clone() });
        }
    }
    Ok(())
}

fn check_types(data: &PersonData) -> Result<(), ValidationError> {
    for (key, value) in data {
        let valid = match key.as_str() {
            "age" => value.as_u64().is_some(),
            _ => value.is_string(),
        };
        if !valid {
            let expected = if key == "age" {
                "non-negative integer"
            } else {
                "string"
            };
            return Err(ValidationError::InvalidFieldType {
                field: key.clone(),
                expected: expected.to_string(),
                actual: json_type_name(value).to_string(),
            });
        }
    }
    Ok(())
}
