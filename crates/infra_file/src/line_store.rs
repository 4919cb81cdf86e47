//! Line-oriented file access
//!
//! Data files hold one record per line. The repositories only ever append a
//! line or rewrite the whole file, so that is all [`LineStore`] offers.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::error::StorageError;

/// Reads and writes text files one line at a time
pub trait LineStore {
    /// Reads every line of the file
    ///
    /// # Errors
    ///
    /// `StorageError::Io` if the file is missing or unreadable
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, StorageError>;

    /// Appends one line, creating the file if needed
    fn append_line(&self, path: &Path, line: &str) -> Result<(), StorageError>;

    /// Replaces the whole file with `lines`
    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<(), StorageError>;

    /// Returns true if the file exists
    fn exists(&self, path: &Path) -> bool;
}

/// [`LineStore`] over the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLineStore;

impl FsLineStore {
    /// Creates a filesystem line store
    pub fn new() -> Self {
        FsLineStore
    }

    fn ensure_parent(path: &Path) -> Result<(), StorageError> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))
            }
            _ => Ok(()),
        }
    }
}

impl LineStore for FsLineStore {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, StorageError> {
        let content = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn append_line(&self, path: &Path, line: &str) -> Result<(), StorageError> {
        Self::ensure_parent(path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| StorageError::io(path, e))?;
        writeln!(file, "{}", line).map_err(|e| StorageError::io(path, e))?;
        debug!(path = %path.display(), "Line appended");
        Ok(())
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<(), StorageError> {
        Self::ensure_parent(path)?;
        let mut content = lines.join("\n");
        if !lines.is_empty() {
            content.push('\n');
        }
        fs::write(path, content).map_err(|e| StorageError::io(path, e))?;
        debug!(path = %path.display(), lines = lines.len(), "File rewritten");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
