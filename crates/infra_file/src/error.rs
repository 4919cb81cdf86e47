//! Storage error types
//!
//! Every failure carries the path it happened on, so the console can report
//! which data file is at fault.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use domain_policy::PolicyError;
use domain_user::UserError;

/// Errors that can occur while reading or writing data files
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but holds no data to load
    #[error("Data file {} is empty", .0.display())]
    Empty(PathBuf),
}

impl StorageError {
    /// Creates an I/O error for `path`
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_file::StorageError;
    /// use std::io;
    ///
    /// let error = StorageError::io("data/users.txt", io::Error::from(io::ErrorKind::NotFound));
    /// assert!(error.to_string().contains("data/users.txt"));
    /// ```
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        StorageError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns the path the failure happened on
    pub fn path(&self) -> &Path {
        match self {
            StorageError::Io { path, .. } => path,
            StorageError::Empty(path) => path,
        }
    }

    /// Returns true if the file was missing
    pub fn is_missing_file(&self) -> bool {
        matches!(self, StorageError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

impl From<StorageError> for UserError {
    fn from(error: StorageError) -> Self {
        UserError::storage(error)
    }
}

impl From<StorageError> for PolicyError {
    fn from(error: StorageError) -> Self {
        PolicyError::storage(error)
    }
}
