//! In-memory Line Store
//!
//! A [`LineStore`] kept in memory, with switches that make reads or writes
//! fail. Clones share the same files, so a test can keep one handle while
//! the repository owns another.

use infra_file::{LineStore, StorageError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug, Default)]
struct Files {
    content: HashMap<PathBuf, Vec<String>>,
    fail_reads: bool,
    fail_writes: bool,
}

/// Line store backed by a shared in-memory map
#[derive(Debug, Clone, Default)]
pub struct MemoryLineStore {
    files: Rc<RefCell<Files>>,
}

impl MemoryLineStore {
    /// Creates a store with no files
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or replaces a file
    pub fn with_file<I, S>(self, path: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files
            .borrow_mut()
            .content
            .insert(path.into(), lines.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the lines of a file, empty if it does not exist
    pub fn lines(&self, path: impl AsRef<Path>) -> Vec<String> {
        self.files
            .borrow()
            .content
            .get(path.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    /// Makes every following append and rewrite fail
    pub fn fail_writes(&self, fail: bool) {
        self.files.borrow_mut().fail_writes = fail;
    }

    /// Makes every following read fail
    pub fn fail_reads(&self, fail: bool) {
        self.files.borrow_mut().fail_reads = fail;
    }

    fn injected(path: &Path) -> StorageError {
        StorageError::io(path, io::Error::other("injected failure"))
    }
}

impl LineStore for MemoryLineStore {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, StorageError> {
        let files = self.files.borrow();
        if files.fail_reads {
            return Err(Self::injected(path));
        }
        files
            .content
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::io(path, io::Error::from(io::ErrorKind::NotFound)))
    }

    fn append_line(&self, path: &Path, line: &str) -> Result<(), StorageError> {
        let mut files = self.files.borrow_mut();
        if files.fail_writes {
            return Err(Self::injected(path));
        }
        files
            .content
            .entry(path.to_path_buf())
            .or_default()
            .push(line.to_string());
        Ok(())
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<(), StorageError> {
        let mut files = self.files.borrow_mut();
        if files.fail_writes {
            return Err(Self::injected(path));
        }
        files.content.insert(path.to_path_buf(), lines.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().content.contains_key(path)
    }
}
