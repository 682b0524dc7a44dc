/*
 * Responsibility
 * - in-memory TodoStore (tests and local runs without Postgres)
 * - mirrors the Postgres backend's id rules (uuid strings)
 */
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::repos::error::{StoreError, StoreResult};
use crate::repos::todo_store::{Todo, TodoStore};

#[derive(Clone, Default)]
pub struct MemoryTodoStore {
    // Vec keeps insertion order, which is this backend's natural retrieval order.
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// Same id rules as the Postgres backend, so malformed-id behavior matches.
fn check_id(id: &str) -> StoreResult<()> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| StoreError::MalformedId)
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn insert(&self, title: &str, completed: bool) -> StoreResult<Todo> {
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed,
        };
        self.todos.lock().await.push(todo.clone());
        Ok(todo)
    }

    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        Ok(self.todos.lock().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        check_id(id)?;
        Ok(self
            .todos
            .lock()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn update_by_id(
        &self,
        id: &str,
        title: Option<&str>,
        completed: Option<bool>,
    ) -> StoreResult<Option<Todo>> {
        check_id(id)?;

        let mut todos = self.todos.lock().await;
        let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        if let Some(title) = title {
            todo.title = title.to_string();
        }
        if let Some(completed) = completed {
            todo.completed = completed;
        }

        Ok(Some(todo.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        check_id(id)?;

        let mut todos = self.todos.lock().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);

        Ok(todos.len() < before)
    }
}
