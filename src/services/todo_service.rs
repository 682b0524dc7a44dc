//! Resource service for todos.
//!
//! This is the single place that decides whether an identifier or input
//! shape makes sense, so the HTTP layer can stay a pure protocol adapter.
//! Every call goes straight to the store — no in-process cache, the store is
//! the sole source of truth. Errors are surfaced typed, never logged or
//! swallowed here.
use std::sync::Arc;

use thiserror::Error;

use crate::repos::error::StoreError;
use crate::repos::todo_store::{Todo, TodoStore};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller-supplied shape violates the todo contract
    /// (missing/empty title, malformed identifier).
    #[error("validation failed: {0}")]
    Validation(&'static str),
    #[error("todo not found")]
    NotFound,
    /// The store is unreachable or faulted.
    #[error("store failure: {0}")]
    Infrastructure(#[source] StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            // What counts as malformed is the store's call; it still means
            // the caller handed us a bad identifier.
            StoreError::MalformedId => ServiceError::Validation("invalid todo id"),
            StoreError::Backend(_) => ServiceError::Infrastructure(e),
        }
    }
}

/// Create input. `title` is optional at the wire so its absence reaches the
/// service as a validation failure instead of a deserialization rejection.
#[derive(Debug, Default)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Partial update: absent fields leave the stored record unchanged.
#[derive(Debug, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// All todos in the store's natural retrieval order.
    pub async fn list(&self) -> Result<Vec<Todo>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    /// Validates the input, persists a new record, and returns it with the
    /// store-assigned id. Nothing is persisted on failure.
    pub async fn create(&self, input: CreateTodo) -> Result<Todo, ServiceError> {
        let title = match &input.title {
            Some(t) if !t.trim().is_empty() => t.as_str(),
            _ => return Err(ServiceError::Validation("title is required")),
        };
        let completed = input.completed.unwrap_or(false);

        Ok(self.store.insert(title, completed).await?)
    }

    /// Applies the supplied fields to the record with `id`; absent fields are
    /// left unchanged. Returns the record's current state after the write.
    pub async fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo, ServiceError> {
        if let Some(title) = &patch.title
            && title.trim().is_empty()
        {
            return Err(ServiceError::Validation("title cannot be empty"));
        }

        self.store
            .update_by_id(id, patch.title.as_deref(), patch.completed)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Permanently removes the record with `id`.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if self.store.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}
