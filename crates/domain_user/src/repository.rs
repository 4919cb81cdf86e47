//! User store port and the in-memory store
//!
//! `UserRepository` is the port the user service talks to. Implementations:
//!
//! - [`InMemoryUserRepository`]: list-backed, used in simulation mode and as
//!   the lookup layer of every other store
//! - `infra_file::FileUserRepository`: mirrors each mutation to a text file

use tracing::debug;

use crate::error::UserError;
use crate::profile::Profile;
use crate::user::User;

/// Storage operations for users
///
/// Names are unique across the store. Mutations return `Err` instead of
/// `false`; lookups return `None` when absent.
pub trait UserRepository {
    /// Adds a user, failing with `UserError::Duplicate` if the name exists
    fn add(&mut self, user: User) -> Result<(), UserError>;

    /// Finds a user by name
    fn find(&self, name: &str) -> Option<&User>;

    /// Removes a user by name, failing with `UserError::NotFound` if absent
    fn remove(&mut self, name: &str) -> Result<(), UserError>;

    /// Lists every user in insertion order
    fn list_all(&self) -> &[User];

    /// Lists the users holding `profile`
    fn list_by_profile(&self, profile: Profile) -> Vec<&User> {
        self.list_all()
            .iter()
            .filter(|user| user.profile() == profile)
            .collect()
    }

    /// Replaces the stored hash of a user
    fn change_password(&mut self, name: &str, new_hash: String) -> Result<(), UserError>;

    /// Returns true if no user is stored
    fn is_empty(&self) -> bool {
        self.list_all().is_empty()
    }
}

/// List-backed user store
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every user
    pub fn clear(&mut self) {
        self.users.clear();
    }

    /// Returns the number of users
    pub fn len(&self) -> usize {
        self.users.len()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn add(&mut self, user: User) -> Result<(), UserError> {
        if self.find(user.name()).is_some() {
            return Err(UserError::Duplicate(user.name().to_string()));
        }
        debug!(user = %user.name(), profile = %user.profile(), "User added to store");
        self.users.push(user);
        Ok(())
    }

    fn find(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name() == name)
    }

    fn remove(&mut self, name: &str) -> Result<(), UserError> {
        let index = self
            .users
            .iter()
            .position(|user| user.name() == name)
            .ok_or_else(|| UserError::not_found(name))?;
        self.users.remove(index);
        debug!(user = %name, "User removed from store");
        Ok(())
    }

    fn list_all(&self) -> &[User] {
        &self.users
    }

    fn change_password(&mut self, name: &str, new_hash: String) -> Result<(), UserError> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.name() == name)
            .ok_or_else(|| UserError::not_found(name))?;
        user.set_password_hash(new_hash);
        debug!(user = %name, "Password hash replaced");
        Ok(())
    }
}
