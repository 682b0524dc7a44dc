/*
 * Responsibility
 * - todo request/response DTOs
 * - shape checks live in the service, not here: `title` is Option so a
 *   missing field reaches the service instead of failing deserialization
 */
use serde::{Deserialize, Serialize};

use crate::repos::todo_store::Todo;
use crate::services::todo_service::{CreateTodo, TodoPatch};

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl From<CreateTodoRequest> for CreateTodo {
    fn from(req: CreateTodoRequest) -> Self {
        CreateTodo {
            title: req.title,
            completed: req.completed,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(req: UpdateTodoRequest) -> Self {
        TodoPatch {
            title: req.title,
            completed: req.completed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        TodoResponse {
            id: todo.id,
            title: todo.title,
            completed: todo.completed,
        }
    }
}
