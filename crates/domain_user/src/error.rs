//! User domain errors

use thiserror::Error;

use core_kernel::SecurityError;

/// Errors that can occur in the user domain
#[derive(Debug, Error)]
pub enum UserError {
    /// Input failed validation, nothing was changed
    #[error("Invalid user data: {0}")]
    Validation(String),

    /// Profile text did not name a known profile
    #[error("Invalid profile '{0}', expected one of ADMIN, GESTION, CONSULTA")]
    InvalidProfile(String),

    /// A user with the same name already exists
    #[error("User already exists: {0}")]
    Duplicate(String),

    /// No user with the given name
    #[error("User not found: {0}")]
    NotFound(String),

    /// Password hashing failed
    #[error(transparent)]
    Security(#[from] SecurityError),

    /// The backing store could not be written
    #[error("User store failure: {0}")]
    Storage(String),
}

impl UserError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        UserError::Validation(message.into())
    }

    /// Creates a not found error
    pub fn not_found(name: impl Into<String>) -> Self {
        UserError::NotFound(name.into())
    }

    /// Creates a storage error
    pub fn storage(message: impl std::fmt::Display) -> Self {
        UserError::Storage(message.to_string())
    }

    /// Returns true if the store rejected a write
    pub fn is_storage(&self) -> bool {
        matches!(self, UserError::Storage(_))
    }
}
