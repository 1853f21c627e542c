//! Error types for the repository layer

use grocery_core::CustomerId;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A required argument was absent
    #[error("Missing required argument: {argument}")]
    MissingArgument { argument: &'static str },

    /// Insert with a key that is already taken
    #[error("A customer with id {id} already exists")]
    DuplicateKey { id: CustomerId },

    /// Update or delete of a key that does not exist
    #[error("Customer not found: {id}")]
    NotFound { id: CustomerId },

    /// Backing document missing, unreadable or malformed at load time
    #[error("Could not initialize json database: {reason}")]
    Initialization { reason: String },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid path provided
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// No id left above the current maximum
    #[error("No customer id available after {max}")]
    IdExhausted { max: CustomerId },

    /// A storage lock was poisoned by a panicking holder
    #[error("Storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl RepositoryError {
    pub(crate) fn initialization(reason: impl Into<String>) -> Self {
        RepositoryError::Initialization {
            reason: reason.into(),
        }
    }
}

/// Unwrap an optional argument or fail with [`RepositoryError::MissingArgument`]
///
/// # Example
/// ```rust
/// use grocery_repository::{require, RepositoryError};
///
/// assert_eq!(require(Some(5), "value").unwrap(), 5);
/// assert!(matches!(
///     require::<i32>(None, "value"),
///     Err(RepositoryError::MissingArgument { argument: "value" })
/// ));
/// ```
pub fn require<T>(value: Option<T>, argument: &'static str) -> RepositoryResult<T> {
    value.ok_or(RepositoryError::MissingArgument { argument })
}
