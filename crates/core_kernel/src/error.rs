//! Core error types used across the system

use thiserror::Error;
use crate::security::SecurityError;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Security error: {0}")]
    Security(#[from] SecurityError),

    #[error("Invalid date '{0}', expected dd/MM/yyyy")]
    InvalidDate(String),
}
