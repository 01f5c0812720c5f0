//! Structured responses produced by service operations.

use crate::error::ServiceResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// HTTP-style status codes used by the service.
pub mod status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const NO_CONTENT: u16 = 204;
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Header naming the canonical path of a newly created person.
pub const LOCATION_HEADER: &str = "Location";

/// Outcome of a service operation.
///
/// Failures carry no result payload; the status code is the whole story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceResponse {
    pub status_code: u16,
    pub result: Option<Value>,
    pub headers: HashMap<String, String>,
}

impl ServiceResponse {
    /// Response with the given status and no payload.
    pub fn with_status(status_code: u16) -> Self {
        Self {
            status_code,
            result: None,
            headers: HashMap::new(),
        }
    }

    /// 200 with a payload.
    pub fn ok(result: Value) -> Self {
        Self {
            result: Some(result),
            ..Self::with_status(status::OK)
        }
    }

    /// 201 with a payload and a `Location` header.
    pub fn created(result: Value, location: impl Into<String>) -> Self {
        Self {
            result: Some(result),
            ..Self::with_status(status::CREATED)
        }
        .with_header(LOCATION_HEADER, location)
    }

    /// 204 with no payload.
    pub fn no_content() -> Self {
        Self::with_status(status::NO_CONTENT)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// True for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Header lookup, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Deserialize the result payload, if any.
    pub fn result_as<T: DeserializeOwned>(&self) -> ServiceResult<Option<T>> {
        match &self.result {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }
}
