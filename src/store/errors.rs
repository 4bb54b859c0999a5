//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A thread panicked while holding the store lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}
