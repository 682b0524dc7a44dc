/*
 * Responsibility
 * - URL structure under /api
 * - /health for liveness, /todos for the resource surface
 */
use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use crate::api::handlers::{
    health::health,
    todos::{create_todo, delete_todo, list_todos, update_todo},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{todo_id}",
            delete(delete_todo).put(update_todo),
        )
}
