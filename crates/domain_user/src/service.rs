//! User service
//!
//! Thin facade over a [`UserRepository`]: it hashes clear-text passwords and
//! checks credentials, and otherwise defers to the store.

use tracing::{info, warn};

use core_kernel::PasswordHasher;

use crate::error::UserError;
use crate::profile::Profile;
use crate::repository::UserRepository;
use crate::user::User;

/// Login, creation, deletion and queries over users
pub struct UserService {
    repository: Box<dyn UserRepository>,
    hasher: Box<dyn PasswordHasher>,
}

impl UserService {
    /// Creates a service over the given store and hasher
    pub fn new(repository: Box<dyn UserRepository>, hasher: Box<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Checks credentials and returns the user's profile
    ///
    /// Returns `None` both for an unknown name and for a wrong password.
    pub fn login(&self, name: &str, password: &str) -> Option<Profile> {
        let Some(user) = self.repository.find(name) else {
            warn!(user = %name, "Login attempt for unknown user");
            return None;
        };

        if user.verify_password(password, self.hasher.as_ref()) {
            info!(user = %name, profile = %user.profile(), "Login succeeded");
            Some(user.profile())
        } else {
            warn!(user = %name, "Login failed: wrong password");
            None
        }
    }

    /// Creates a user, hashing `password`
    ///
    /// # Errors
    ///
    /// `UserError::Validation` for blank input, `UserError::Duplicate` if the
    /// name is taken, `UserError::Storage` if the store could not persist it
    pub fn create(&mut self, name: &str, password: &str, profile: Profile) -> Result<(), UserError> {
        let user = User::new(name, password, profile, self.hasher.as_ref())?;
        let name = user.name().to_string();
        self.repository.add(user)?;
        info!(user = %name, %profile, "User created");
        Ok(())
    }

    /// Deletes a user by name
    pub fn delete(&mut self, name: &str) -> Result<(), UserError> {
        self.repository.remove(name)?;
        info!(user = %name, "User deleted");
        Ok(())
    }

    /// Replaces a user's password with the hash of `new_password`
    ///
    /// # Errors
    ///
    /// `UserError::Validation` for a blank password, `UserError::NotFound` for
    /// an unknown user
    pub fn change_password(&mut self, name: &str, new_password: &str) -> Result<(), UserError> {
        if new_password.trim().is_empty() {
            return Err(UserError::validation("password must not be blank"));
        }
        if self.repository.find(name).is_none() {
            return Err(UserError::not_found(name));
        }

        let new_hash = self.hasher.hash(new_password)?;
        self.repository.change_password(name, new_hash)?;
        info!(user = %name, "Password changed");
        Ok(())
    }

    /// Finds a user by name
    pub fn find(&self, name: &str) -> Option<&User> {
        self.repository.find(name)
    }

    /// Lists every user
    pub fn list_all(&self) -> &[User] {
        self.repository.list_all()
    }

    /// Lists the users holding `profile`
    pub fn list_by_profile(&self, profile: Profile) -> Vec<&User> {
        self.repository.list_by_profile(profile)
    }

    /// Returns true if at least one user exists
    pub fn has_users(&self) -> bool {
        !self.repository.is_empty()
    }
}
