//! Builder for [`RequestContext`].

use super::{FileAttachment, Manager, ManagerRegistry, RequestContext};
use crate::error::{ServiceError, ServiceResult};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Fluent builder for a [`RequestContext`].
///
/// Every request-data slot defaults to empty; the repository is required.
#[derive(Debug, Clone)]
pub struct ContextBuilder<R> {
    request_id: Option<String>,
    body: Value,
    params: HashMap<String, String>,
    headers: HashMap<String, String>,
    form: HashMap<String, String>,
    files: HashMap<String, FileAttachment>,
    repository: Option<R>,
    managers: ManagerRegistry,
}

impl<R> Default for ContextBuilder<R> {
    fn default() -> Self {
        Self {
            request_id: None,
            body: Value::Null,
            params: HashMap::new(),
            headers: HashMap::new(),
            form: HashMap::new(),
            files: HashMap::new(),
            repository: None,
            managers: ManagerRegistry::new(),
        }
    }
}

impl<R> ContextBuilder<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed request id instead of a generated UUID.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn params(mut self, params: HashMap<String, String>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn form_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(name.into(), value.into());
        self
    }

    pub fn form(mut self, form: HashMap<String, String>) -> Self {
        self.form.extend(form);
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FileAttachment) -> Self {
        self.files.insert(name.into(), file);
        self
    }

    /// Inject the repository the operations will use.
    pub fn with_repository(mut self, repository: R) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Register a manager under its own name.
    pub fn with_manager<M: Manager>(mut self, manager: M) -> Self {
        self.managers.register(manager);
        self
    }

    /// Register a manager under an explicit name.
    pub fn with_named_manager<M: Manager>(mut self, name: impl Into<String>, manager: M) -> Self {
        self.managers.register_named(name, manager);
        self
    }

    /// Build the context. Fails if no repository was injected.
    pub fn build(self) -> ServiceResult<RequestContext<R>> {
        let repository = self
            .repository
            .ok_or_else(|| ServiceError::internal("Request context requires a repository"))?;

        Ok(RequestContext {
            request_id: self
                .request_id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            body: self.body,
            params: self.params,
            headers: self.headers,
            form: self.form,
            files: self.files,
            repository,
            managers: self.managers,
        })
    }
}
