//! The user entity
//!
//! A user is identified by name. The password is hashed as soon as the user is
//! built from clear text; users read back from storage keep the stored hash.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{is_storable, join_record, PasswordHasher};

use crate::error::UserError;
use crate::profile::Profile;

/// Number of fields in a persisted user line
pub const USER_FIELD_COUNT: usize = 3;

/// A console user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    password_hash: String,
    profile: Profile,
}

impl User {
    /// Creates a user from a clear-text password, hashing it
    ///
    /// # Errors
    ///
    /// Returns `UserError::Validation` for a blank name or password, or a name
    /// that cannot be stored; `UserError::Security` if hashing fails.
    pub fn new(
        name: &str,
        password: &str,
        profile: Profile,
        hasher: &dyn PasswordHasher,
    ) -> Result<Self, UserError> {
        let name = validate_name(name)?;
        if password.trim().is_empty() {
            return Err(UserError::validation("password must not be blank"));
        }

        Ok(Self {
            name,
            password_hash: hasher.hash(password)?,
            profile,
        })
    }

    /// Rebuilds a user whose password is already hashed
    ///
    /// # Errors
    ///
    /// Returns `UserError::Validation` for a blank name or hash
    pub fn from_stored(name: &str, password_hash: &str, profile: Profile) -> Result<Self, UserError> {
        let name = validate_name(name)?;
        let password_hash = password_hash.trim();
        if password_hash.is_empty() {
            return Err(UserError::validation("stored password hash is blank"));
        }

        Ok(Self {
            name,
            password_hash: password_hash.to_string(),
            profile,
        })
    }

    /// Rebuilds a user from the fields of a persisted line
    ///
    /// Requires exactly `name`, `hash` and `profile`, none blank. The profile
    /// is parsed leniently.
    ///
    /// # Errors
    ///
    /// Returns `UserError::Validation` on a wrong field count or blank field
    pub fn from_fields(fields: &[&str]) -> Result<Self, UserError> {
        if fields.len() != USER_FIELD_COUNT {
            return Err(UserError::validation(format!(
                "expected {} fields, found {}",
                USER_FIELD_COUNT,
                fields.len()
            )));
        }
        if fields[2].trim().is_empty() {
            return Err(UserError::validation("profile must not be blank"));
        }

        Self::from_stored(fields[0], fields[1], Profile::parse_lenient(fields[2]))
    }

    /// Returns the user name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored password hash
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns the profile
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Checks a clear-text password against the stored hash
    pub fn verify_password(&self, password: &str, hasher: &dyn PasswordHasher) -> bool {
        hasher.verify(password, &self.password_hash)
    }

    /// Replaces the stored hash with an already hashed password
    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
    }

    /// Serializes as `name;hash;profile`
    pub fn to_record(&self) -> String {
        join_record([self.name.as_str(), self.password_hash.as_str(), self.profile.code()])
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(name = {}, profile = {})", self.name, self.profile)
    }
}

fn validate_name(name: &str) -> Result<String, UserError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(UserError::validation("name must not be blank"));
    }
    if !is_storable(name) {
        return Err(UserError::validation("name must not contain ';' or line breaks"));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::BcryptHasher;

    fn hasher() -> BcryptHasher {
        BcryptHasher::new(BcryptHasher::MIN_COST).unwrap()
    }

    #[test]
    fn test_new_hashes_password() {
        let user = User::new("root", "root123", Profile::Admin, &hasher()).unwrap();

        assert_eq!(user.name(), "root");
        assert_ne!(user.password_hash(), "root123");
        assert!(user.verify_password("root123", &hasher()));
        assert!(!user.verify_password("wrong", &hasher()));
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(matches!(
            User::new("  ", "pw", Profile::Admin, &hasher()),
            Err(UserError::Validation(_))
        ));
        assert!(matches!(
            User::new("ana", "", Profile::Admin, &hasher()),
            Err(UserError::Validation(_))
        ));
    }

    #[test]
    fn test_separator_in_name_rejected() {
        assert!(User::new("a;b", "pw", Profile::Consult, &hasher()).is_err());
    }

    #[test]
    fn test_record_layout() {
        let user = User::from_stored("ana", "$2b$04$abc", Profile::Management).unwrap();
        assert_eq!(user.to_record(), "ana;$2b$04$abc;GESTION");
    }

    #[test]
    fn test_from_fields_requires_three() {
        assert!(User::from_fields(&["ana", "hash"]).is_err());
        assert!(User::from_fields(&["ana", "hash", "ADMIN", "x"]).is_err());
        assert!(User::from_fields(&["ana", "hash", " "]).is_err());
    }

    #[test]
    fn test_from_fields_lenient_profile() {
        let user = User::from_fields(&["ana", "hash", "boss"]).unwrap();
        assert_eq!(user.profile(), Profile::Consult);
    }

    #[test]
    fn test_display_hides_hash() {
        let user = User::from_stored("ana", "$2b$04$secret", Profile::Admin).unwrap();
        assert!(!user.to_string().contains("secret"));
    }
}
