//! # Todo Service
//!
//! The stateless orchestration layer between a parsed request and the store:
//! validates client payloads against the Todo schema, checks pagination
//! parameters, delegates to the store client, and maps store outcomes into
//! the [`TodoError`] taxonomy. It holds no mutable state of its own — all
//! state lives in the store actor.

use crate::model::{Todo, TodoId};
use crate::schema::{self, Violation};
use crate::todo_actor::TodoError;
use async_trait::async_trait;
use resource_actor::{StoreAccess, StoreClient, StoreError};
use serde_json::Value;
use tracing::{debug, instrument};

/// Pagination window for listing todos.
///
/// Matches the service defaults: up to 10 records from the start of the
/// collection. Values are signed so that out-of-range client input reaches
/// the validation step instead of being clamped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Service for interacting with the Todo store.
#[derive(Clone)]
pub struct TodoService {
    inner: StoreClient<Todo>,
}

impl TodoService {
    pub fn new(inner: StoreClient<Todo>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreAccess<Todo> for TodoService {
    type Error = TodoError;

    fn inner(&self) -> &StoreClient<Todo> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(id) => TodoError::NotFound(id),
            other => TodoError::StoreUnavailable(other.to_string()),
        }
    }
}

impl TodoService {
    /// Validates `payload` against the Todo schema and appends a new record.
    ///
    /// Returns the record including its store-assigned id. A client-supplied
    /// `id` in the payload is ignored.
    #[instrument(skip(self, payload))]
    pub async fn create_todo(&self, payload: &Value) -> Result<Todo, TodoError> {
        let fields = schema::todo_fields(payload).map_err(TodoError::ValidationFailed)?;
        debug!(?fields, "Payload validated");
        self.inner.create(fields).await.map_err(Self::map_error)
    }

    /// Lists todos in insertion order.
    ///
    /// Negative `limit` or `offset` are rejected as `ValidationFailed`; an
    /// offset beyond the end of the collection yields an empty page.
    #[instrument(skip(self))]
    pub async fn list_todos(&self, page: Page) -> Result<Vec<Todo>, TodoError> {
        let mut violations = Vec::new();
        if page.limit < 0 {
            violations.push(Violation {
                field: "limit".into(),
                message: "must be greater than or equal to 0".into(),
            });
        }
        if page.offset < 0 {
            violations.push(Violation {
                field: "offset".into(),
                message: "must be greater than or equal to 0".into(),
            });
        }
        if !violations.is_empty() {
            return Err(TodoError::ValidationFailed(violations));
        }

        self.inner
            .list(page.offset as usize, page.limit as usize)
            .await
            .map_err(Self::map_error)
    }

    /// Fetches a todo by id; a missing record is `NotFound`.
    #[instrument(skip(self))]
    pub async fn get_todo(&self, id: TodoId) -> Result<Todo, TodoError> {
        self.get(id)
            .await?
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }

    /// Validates `payload` exactly like create and replaces all fields of
    /// the record with `id`. No partial-patch semantics: an absent `is_done`
    /// resets to `false`.
    #[instrument(skip(self, payload))]
    pub async fn update_todo(&self, id: TodoId, payload: &Value) -> Result<Todo, TodoError> {
        let fields = schema::todo_fields(payload).map_err(TodoError::ValidationFailed)?;
        debug!(?fields, "Payload validated");
        self.inner.replace(id, fields).await.map_err(Self::map_error)
    }

    /// Deletes the record with `id`; no payload on success.
    #[instrument(skip(self))]
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), TodoError> {
        self.delete(id).await
    }
}
