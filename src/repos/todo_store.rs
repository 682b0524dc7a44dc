//! Document-store contract for todo records.
//!
//! The store owns persisted records and assigns their ids; everything above
//! it holds only transient copies during a single request. Ids are opaque
//! strings here — each backend decides what counts as structurally valid and
//! reports `StoreError::MalformedId` for anything else.
use async_trait::async_trait;

use crate::repos::error::StoreResult;

/// A persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Minimal CRUD surface over the document store.
///
/// Implementations must be cheap to clone or shared via `Arc`; every call
/// goes straight to the backend (no caching layer in between).
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Persist a new record; the store assigns the id.
    async fn insert(&self, title: &str, completed: bool) -> StoreResult<Todo>;

    /// All records in the backend's natural retrieval order.
    async fn find_all(&self) -> StoreResult<Vec<Todo>>;

    /// `Ok(None)` when no record has this id.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>>;

    /// Apply the supplied fields; absent fields keep their stored value.
    /// `Ok(None)` when no record has this id.
    async fn update_by_id(
        &self,
        id: &str,
        title: Option<&str>,
        completed: Option<bool>,
    ) -> StoreResult<Option<Todo>>;

    /// Returns whether a record was actually removed.
    async fn delete_by_id(&self, id: &str) -> StoreResult<bool>;
}
