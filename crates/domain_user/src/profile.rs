//! User profiles (access levels)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::normalize_code;

use crate::error::UserError;

/// Access level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    /// Full access: users and policies
    Admin,
    /// Policy management
    Management,
    /// Read-only policy queries
    Consult,
}

impl Profile {
    /// All profiles in menu order
    pub const ALL: [Profile; 3] = [Profile::Admin, Profile::Management, Profile::Consult];

    /// Code written to the users file
    pub fn code(&self) -> &'static str {
        match self {
            Profile::Admin => "ADMIN",
            Profile::Management => "GESTION",
            Profile::Consult => "CONSULTA",
        }
    }

    /// Parses a profile, falling back to `Consult` for anything unrecognized
    ///
    /// Used when reading stored users, where an unreadable profile must not
    /// drop the user.
    pub fn parse_lenient(value: &str) -> Profile {
        value.parse().unwrap_or(Profile::Consult)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Profile {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "ADMIN" => Ok(Profile::Admin),
            "GESTION" | "MANAGEMENT" => Ok(Profile::Management),
            "CONSULTA" | "CONSULT" => Ok(Profile::Consult),
            _ => Err(UserError::InvalidProfile(s.trim().to_string())),
        }
    }
}
