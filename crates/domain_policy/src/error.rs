//! Policy domain errors
//!
//! This module defines all error types that can occur within the
//! policy domain.

use thiserror::Error;

use core_kernel::PolicyNumber;

use crate::policy::PolicyKind;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Policy data failed validation, nothing was changed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Text did not name a known value of a closed enumeration
    #[error("Unknown {kind} '{value}'")]
    UnknownCode {
        kind: &'static str,
        value: String,
    },

    /// A policy with the same number already exists
    #[error("Policy number already in use: {0}")]
    Duplicate(PolicyNumber),

    /// No policy with the given number
    #[error("Policy not found: {0}")]
    NotFound(PolicyNumber),

    /// Every number of the variant has been issued
    #[error("No {0} policy numbers left")]
    NumbersExhausted(PolicyKind),

    /// The renewal premium does not fit in a decimal
    #[error("Renewal premium of policy {0} is out of range")]
    PremiumOverflow(PolicyNumber),

    /// The backing store could not be written
    #[error("Policy store failure: {0}")]
    Storage(String),
}

impl PolicyError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PolicyError::Validation(message.into())
    }

    /// Creates an unknown code error
    pub fn unknown_code(kind: &'static str, value: &str) -> Self {
        PolicyError::UnknownCode {
            kind,
            value: value.trim().to_string(),
        }
    }

    /// Creates a storage error
    pub fn storage(message: impl std::fmt::Display) -> Self {
        PolicyError::Storage(message.to_string())
    }

    /// Returns true if the store rejected a write
    pub fn is_storage(&self) -> bool {
        matches!(self, PolicyError::Storage(_))
    }
}
