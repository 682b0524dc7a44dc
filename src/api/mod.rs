/*
 * Responsibility
 * - public surface of the API module (re-export routes())
 */
pub mod dto;
pub mod handlers;
mod routes;

pub use routes::routes;
