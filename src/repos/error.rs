/*
 * Responsibility
 * - the meaning a store backend reports upward
 */
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer errors.
///
/// Kept string-based so the `TodoStore` trait stays backend-agnostic;
/// callers decide what each kind means for their protocol.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The supplied id is not a structurally valid identifier for this backend.
    #[error("malformed todo id")]
    MalformedId,
    /// The backend is unreachable or returned an unexpected fault.
    #[error("store backend error: {0}")]
    Backend(String),
}
