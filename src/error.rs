/*
 * Responsibility
 * - client-facing error body ({"error": "..."})
 * - helper producing the fixed (status, body) pair a handler maps failures to
 *
 * Note: handlers never inspect the failure kind. Each endpoint collapses
 * every service failure into one fixed status/message pair, so the helper
 * takes both explicitly instead of deriving them from an error type.
 */
use axum::{Json, http::StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type Failure = (StatusCode, Json<ErrorResponse>);

pub fn failure(status: StatusCode, message: &str) -> Failure {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
