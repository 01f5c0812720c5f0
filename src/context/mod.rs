//! Per-request context for person service operations.
//!
//! A [`RequestContext`] bundles everything an operation may read for one call:
//! the JSON body, query parameters, headers, form fields, file attachments,
//! the injected repository and a registry of named managers. It is built once
//! by [`ContextBuilder`] and is read-only afterwards.
//!
//! # Examples
//!
//! ```rust
//! use person_service::context::ContextBuilder;
//! use person_service::repository::InMemoryPersonRepository;
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let context = ContextBuilder::new()
//!     .json(json!({"name": "updated"}))
//!     .header("Content-Type", "application/json")
//!     .with_repository(InMemoryPersonRepository::new())
//!     .build()?;
//!
//! assert_eq!(context.header("content-type"), Some("application/json"));
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod managers;

pub use builder::ContextBuilder;
pub use managers::{Manager, ManagerRegistry};

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// An uploaded file carried by a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl FileAttachment {
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            data: data.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Inbound request data plus the injected repository.
#[derive(Debug, Clone)]
pub struct RequestContext<R> {
    request_id: String,
    body: Value,
    params: HashMap<String, String>,
    headers: HashMap<String, String>,
    form: HashMap<String, String>,
    files: HashMap<String, FileAttachment>,
    repository: R,
    managers: ManagerRegistry,
}

impl<R> RequestContext<R> {
    /// Start building a context.
    pub fn builder() -> ContextBuilder<R> {
        ContextBuilder::new()
    }

    /// Identifier used to correlate log lines for this request.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The JSON body; `Value::Null` when the request had none.
    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Header lookup, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn form(&self) -> &HashMap<String, String> {
        &self.form
    }

    pub fn form_field(&self, name: &str) -> Option<&str> {
        self.form.get(name).map(String::as_str)
    }

    pub fn files(&self) -> &HashMap<String, FileAttachment> {
        &self.files
    }

    pub fn file(&self, name: &str) -> Option<&FileAttachment> {
        self.files.get(name)
    }

    /// The injected repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn managers(&self) -> &ManagerRegistry {
        &self.managers
    }

    /// Look up a registered manager by name.
    pub fn manager(&self, name: &str) -> Option<Arc<dyn Manager>> {
        self.managers.get(name)
    }

    /// Look up a registered manager by name as its concrete type.
    pub fn manager_as<M: Manager>(&self, name: &str) -> Option<Arc<M>> {
        self.managers.get_as(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryPersonRepository;
    use serde_json::json;

    struct AuthManager {
        realm: String,
    }

    impl Manager for AuthManager {
        fn name(&self) -> &str {
            "auth"
        }
    }

    #[test]
    fn test_context_exposes_request_data() {
        let context = ContextBuilder::new()
            .json(json!({"name": "a"}))
            .param("verbose", "true")
            .header("X-Trace", "abc")
            .form_field("comment", "hello")
            .file(
                "avatar",
                FileAttachment::new("avatar.png", vec![1, 2, 3]).with_content_type("image/png"),
            )
            .request_id("req-1")
            .with_repository(InMemoryPersonRepository::new())
            .build()
            .unwrap();

        assert_eq!(context.request_id(), "req-1");
        assert_eq!(context.body(), &json!({"name": "a"}));
        assert_eq!(context.param("verbose"), Some("true"));
        assert_eq!(context.param("missing"), None);
        assert_eq!(context.header("x-trace"), Some("abc"));
        assert_eq!(context.header("X-TRACE"), Some("abc"));
        assert_eq!(context.form_field("comment"), Some("hello"));

        let avatar = context.file("avatar").unwrap();
        assert_eq!(avatar.filename, "avatar.png");
        assert_eq!(avatar.content_type.as_deref(), Some("image/png"));
        assert_eq!(avatar.len(), 3);
    }

    #[test]
    fn test_context_defaults() {
        let context = ContextBuilder::new()
            .with_repository(InMemoryPersonRepository::new())
            .build()
            .unwrap();

        assert_eq!(context.body(), &Value::Null);
        assert!(context.params().is_empty());
        assert!(context.headers().is_empty());
        assert!(context.form().is_empty());
        assert!(context.files().is_empty());
        assert!(context.managers().is_empty());
        // Generated ids are UUIDs.
        assert_eq!(context.request_id().len(), 36);
    }

    #[test]
    fn test_context_manager_lookup() {
        let context = ContextBuilder::new()
            .with_manager(AuthManager {
                realm: "people".to_string(),
            })
            .with_repository(InMemoryPersonRepository::new())
            .build()
            .unwrap();

        assert_eq!(context.manager("auth").unwrap().name(), "auth");
        assert_eq!(context.manager_as::<AuthManager>("auth").unwrap().realm, "people");
        assert!(context.manager("audit").is_none());
    }
}
