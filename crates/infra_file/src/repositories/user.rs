//! File-backed user repository
//!
//! Wraps an [`InMemoryUserRepository`] and mirrors every change to a text
//! file, one `name;hash;profile` line per user.
//!
//! | Operation         | File write                         | Memory updated   |
//! |-------------------|------------------------------------|------------------|
//! | `add`             | append, after the memory insert    | always on insert |
//! | `remove`          | full rewrite, before memory        | only on success  |
//! | `change_password` | full rewrite, before memory        | only on success  |
//!
//! A failed append leaves the user in memory; the error is still returned.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use core_kernel::split_record;
use domain_user::{InMemoryUserRepository, Profile, User, UserError, UserRepository};

use crate::error::StorageError;
use crate::line_store::{FsLineStore, LineStore};

/// User repository persisted to a text file
pub struct FileUserRepository {
    memory: InMemoryUserRepository,
    store: Box<dyn LineStore>,
    path: PathBuf,
}

impl FileUserRepository {
    /// Creates a repository over `path` on the local filesystem
    ///
    /// Nothing is read until [`load_initial`](Self::load_initial) is called.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_store(path, Box::new(FsLineStore::new()))
    }

    /// Creates a repository over `path` using the given line store
    pub fn with_store(path: impl Into<PathBuf>, store: Box<dyn LineStore>) -> Self {
        Self {
            memory: InMemoryUserRepository::new(),
            store,
            path: path.into(),
        }
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the in-memory users with the file content
    ///
    /// Stored hashes are kept as read. Lines without exactly three non-blank
    /// fields are skipped with a warning.
    ///
    /// # Returns
    ///
    /// The number of users loaded
    ///
    /// # Errors
    ///
    /// `StorageError::Io` if the file cannot be read, `StorageError::Empty`
    /// if it holds no lines
    pub fn load_initial(&mut self) -> Result<usize, StorageError> {
        let lines = self.store.read_lines(&self.path)?;
        if lines.is_empty() {
            return Err(StorageError::Empty(self.path.clone()));
        }

        self.memory.clear();
        for (index, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let loaded = User::from_fields(&split_record(line))
                .and_then(|user| self.memory.add(user));
            if let Err(e) = loaded {
                warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    error = %e,
                    "Skipping user line"
                );
            }
        }

        let count = self.memory.len();
        info!(path = %self.path.display(), users = count, "Users loaded");
        Ok(count)
    }

    fn rewrite<'a>(&self, users: impl Iterator<Item = &'a User>) -> Result<(), StorageError> {
        let lines: Vec<String> = users.map(User::to_record).collect();
        self.store.write_lines(&self.path, &lines)
    }
}

impl UserRepository for FileUserRepository {
    fn add(&mut self, user: User) -> Result<(), UserError> {
        let line = user.to_record();
        self.memory.add(user)?;
        self.store.append_line(&self.path, &line)?;
        debug!(path = %self.path.display(), "User appended to file");
        Ok(())
    }

    fn find(&self, name: &str) -> Option<&User> {
        self.memory.find(name)
    }

    fn remove(&mut self, name: &str) -> Result<(), UserError> {
        if self.memory.find(name).is_none() {
            return Err(UserError::not_found(name));
        }
        self.rewrite(self.memory.list_all().iter().filter(|user| user.name() != name))?;
        self.memory.remove(name)
    }

    fn list_all(&self) -> &[User] {
        self.memory.list_all()
    }

    fn list_by_profile(&self, profile: Profile) -> Vec<&User> {
        self.memory.list_by_profile(profile)
    }

    fn change_password(&mut self, name: &str, new_hash: String) -> Result<(), UserError> {
        let mut updated = self
            .memory
            .find(name)
            .cloned()
            .ok_or_else(|| UserError::not_found(name))?;
        updated.set_password_hash(new_hash.clone());

        self.rewrite(self.memory.list_all().iter().map(|user| {
            if user.name() == name {
                &updated
            } else {
                user
            }
        }))?;
        self.memory.change_password(name, new_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.txt");
        std::fs::write(
            &path,
            "root;$2b$04$abc;ADMIN\nbroken line\nana;;GESTION\n\nluis;$2b$04$def;CONSULTA;extra\nmar;$2b$04$ghi;GESTION\n",
        )
        .unwrap();

        let mut repository = FileUserRepository::open(&path);
        let loaded = repository.load_initial().unwrap();

        assert_eq!(loaded, 2);
        assert!(repository.find("root").is_some());
        assert_eq!(repository.find("mar").unwrap().profile(), Profile::Management);
    }

    #[test]
    fn test_empty_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.txt");
        std::fs::write(&path, "").unwrap();

        let mut repository = FileUserRepository::open(&path);

        assert!(matches!(repository.load_initial(), Err(StorageError::Empty(_))));
    }
}
