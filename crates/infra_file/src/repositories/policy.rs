//! File-backed policy repository
//!
//! Wraps an [`InMemoryPolicyRepository`] and mirrors inserts and deletions
//! to a text file in the line format of [`domain_policy::codec`]. Inserts
//! append; deletions rewrite the file first and touch memory only once the
//! rewrite succeeded.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use core_kernel::PolicyNumber;
use domain_policy::{
    to_record, InMemoryPolicyRepository, ParserRegistry, Policy, PolicyError, PolicyKind,
    PolicyRepository,
};

use crate::error::StorageError;
use crate::line_store::{FsLineStore, LineStore};

/// Policy repository persisted to a text file
pub struct FilePolicyRepository {
    memory: InMemoryPolicyRepository,
    store: Box<dyn LineStore>,
    path: PathBuf,
}

impl FilePolicyRepository {
    /// Creates a repository over `path` on the local filesystem
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_store(path, Box::new(FsLineStore::new()))
    }

    /// Creates a repository over `path` using the given line store
    pub fn with_store(path: impl Into<PathBuf>, store: Box<dyn LineStore>) -> Self {
        Self {
            memory: InMemoryPolicyRepository::new(),
            store,
            path: path.into(),
        }
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the in-memory policies with the file content
    ///
    /// Each line is routed to the parser registered for its discriminator.
    /// Lines no parser can read, and numbers already loaded, are skipped.
    /// Afterwards every variant's sequence continues after its highest
    /// loaded number; variants with no line keep their counter.
    ///
    /// # Arguments
    ///
    /// * `parsers` - Discriminator to parser map
    ///
    /// # Returns
    ///
    /// The number of policies loaded
    ///
    /// # Errors
    ///
    /// `StorageError::Io` if the file cannot be read, `StorageError::Empty`
    /// if it holds no lines
    pub fn load_initial(&mut self, parsers: &ParserRegistry) -> Result<usize, StorageError> {
        let lines = self.store.read_lines(&self.path)?;
        if lines.is_empty() {
            return Err(StorageError::Empty(self.path.clone()));
        }

        self.memory.clear();
        for (index, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some(policy) = parsers.parse_line(line) else {
                warn!(path = %self.path.display(), line = index + 1, "Skipping unreadable policy line");
                continue;
            };
            if let Err(e) = self.memory.add(policy) {
                warn!(path = %self.path.display(), line = index + 1, error = %e, "Skipping policy line");
            }
        }
        self.memory.sync_sequences();

        let count = self.memory.len();
        info!(path = %self.path.display(), policies = count, "Policies loaded");
        Ok(count)
    }

    /// Returns the number the next policy of `kind` will get, `None` once exhausted
    pub fn peek_number(&self, kind: PolicyKind) -> Option<PolicyNumber> {
        self.memory.sequence().peek(kind)
    }
}

impl PolicyRepository for FilePolicyRepository {
    fn issue_number(&mut self, kind: PolicyKind) -> Result<PolicyNumber, PolicyError> {
        self.memory.issue_number(kind)
    }

    fn add(&mut self, policy: Policy) -> Result<(), PolicyError> {
        let line = to_record(&policy);
        self.memory.add(policy)?;
        self.store.append_line(&self.path, &line)?;
        debug!(path = %self.path.display(), "Policy appended to file");
        Ok(())
    }

    fn find(&self, number: PolicyNumber) -> Option<&Policy> {
        self.memory.find(number)
    }

    fn remove(&mut self, number: PolicyNumber) -> Result<(), PolicyError> {
        if self.memory.find(number).is_none() {
            return Err(PolicyError::NotFound(number));
        }
        let lines: Vec<String> = self
            .memory
            .list_all()
            .iter()
            .filter(|policy| policy.number() != number)
            .map(to_record)
            .collect();
        self.store.write_lines(&self.path, &lines)?;
        self.memory.remove(number)
    }

    fn list_all(&self) -> &[Policy] {
        self.memory.list_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_policy::{parse_auto, parse_home, parse_life};

    fn parsers() -> ParserRegistry {
        let mut registry = ParserRegistry::new();
        registry
            .register(PolicyKind::Home, parse_home)
            .register(PolicyKind::Auto, parse_auto)
            .register(PolicyKind::Life, parse_life);
        registry
    }

    #[test]
    fn test_load_syncs_sequences_and_skips_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policies.txt");
        std::fs::write(
            &path,
            "SeguroVida;105;12345678A;100;01/01/1980;BAJO;1000\n\
             SeguroVida;110;12345678A;100;01/01/1980;ALTO;1000\n\
             SeguroVida;110;87654321B;100;01/01/1980;ALTO;1000\n\
             SeguroBarco;1;12345678A;100\n\
             SeguroVida;99;12345678A;100;01/01/1980;MEDIO;1000\n",
        )
        .unwrap();

        let mut repository = FilePolicyRepository::open(&path);
        let loaded = repository.load_initial(&parsers()).unwrap();

        assert_eq!(loaded, 3);
        assert_eq!(repository.issue_number(PolicyKind::Life).unwrap().value(), 111);
        assert_eq!(repository.peek_number(PolicyKind::Auto), Some(PolicyNumber::new(400000)));
    }

    #[test]
    fn test_load_of_last_possible_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policies.txt");
        std::fs::write(&path, "SeguroVida;4294967295;12345678A;100;01/01/1980;BAJO;1000\n").unwrap();

        let mut repository = FilePolicyRepository::open(&path);

        assert_eq!(repository.load_initial(&parsers()).unwrap(), 1);
        assert_eq!(repository.peek_number(PolicyKind::Life), None);
        assert!(matches!(
            repository.issue_number(PolicyKind::Life),
            Err(PolicyError::NumbersExhausted(PolicyKind::Life))
        ));
    }
}
