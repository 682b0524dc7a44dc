pub mod error;
pub mod memory;
pub mod pg;
pub mod todo_store;
