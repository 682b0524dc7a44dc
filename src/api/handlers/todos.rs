/*
 * Responsibility
 * - /todos CRUD handlers
 * - Path/Json via extractors, service call, fixed status/body mapping
 *
 * The failure mapping is deliberately coarse: each endpoint collapses every
 * service failure (validation, not-found, infrastructure) into one fixed
 * status/message pair. Handlers never inspect the failure kind.
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::dto::todos::{CreateTodoRequest, TodoResponse, UpdateTodoRequest},
    error::{Failure, failure},
    state::AppState,
};

pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, Failure> {
    let todos = state
        .todos
        .list()
        .await
        .map_err(|_| failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch todos"))?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), Failure> {
    let todo = state
        .todos
        .create(req.into())
        .await
        .map_err(|_| failure(StatusCode::BAD_REQUEST, "Failed to create todo"))?;

    Ok((StatusCode::CREATED, Json(todo.into())))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, Failure> {
    let todo = state
        .todos
        .update(&todo_id, req.into())
        .await
        .map_err(|_| failure(StatusCode::NOT_FOUND, "Todo not found"))?;

    Ok(Json(todo.into()))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<StatusCode, Failure> {
    state
        .todos
        .delete(&todo_id)
        .await
        .map_err(|_| failure(StatusCode::NOT_FOUND, "Todo not found"))?;

    Ok(StatusCode::NO_CONTENT)
}
