//! Console error handling

use std::io;
use thiserror::Error;

use core_kernel::CoreError;
use domain_policy::PolicyError;
use domain_user::UserError;

/// Prefix put in front of every error shown to the user
pub const ERROR_PREFIX: &str = "ERROR - ";

/// Console I/O failures
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input reached end of file; the session is over
    #[error("Console input closed")]
    Closed,

    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Why a menu action did not complete
///
/// Everything but `Console` is reported and the menu carries on.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("{0}")]
    User(#[from] UserError),

    #[error("{0}")]
    Policy(#[from] PolicyError),

    #[error("{0}")]
    Core(#[from] CoreError),

    /// An answer could not be read as the expected type
    #[error("Invalid {field}: '{value}'")]
    Parse { field: &'static str, value: String },
}

impl ActionError {
    /// Creates a parse error for a field
    pub fn parse(field: &'static str, value: &str) -> Self {
        ActionError::Parse {
            field,
            value: value.to_string(),
        }
    }
}
