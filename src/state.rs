/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 * - Clone is expected to be cheap (Arc inside)
 */
use std::sync::Arc;

use crate::repos::todo_store::TodoStore;
use crate::services::todo_service::TodoService;

#[derive(Clone)]
pub struct AppState {
    pub todos: TodoService,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self {
            todos: TodoService::new(store),
        }
    }
}
