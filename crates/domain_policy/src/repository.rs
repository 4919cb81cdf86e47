//! Policy store port and the in-memory store
//!
//! The store owns the number sequences as well as the policies, so two
//! stores never share counters.

use tracing::{debug, warn};

use core_kernel::PolicyNumber;

use crate::error::PolicyError;
use crate::policy::{Policy, PolicyKind};
use crate::sequence::PolicyNumberSequence;

/// Storage operations for policies
///
/// Numbers are unique across the store.
pub trait PolicyRepository {
    /// Hands out the next number for a variant
    ///
    /// Fails with `PolicyError::NumbersExhausted` once the variant has
    /// issued `u32::MAX`.
    fn issue_number(&mut self, kind: PolicyKind) -> Result<PolicyNumber, PolicyError>;

    /// Adds a policy, failing with `PolicyError::Duplicate` if the number exists
    fn add(&mut self, policy: Policy) -> Result<(), PolicyError>;

    /// Finds a policy by number
    fn find(&self, number: PolicyNumber) -> Option<&Policy>;

    /// Removes a policy, failing with `PolicyError::NotFound` if absent
    fn remove(&mut self, number: PolicyNumber) -> Result<(), PolicyError>;

    /// Lists every policy in insertion order
    fn list_all(&self) -> &[Policy];

    /// Lists the policies of one variant
    fn list_by_kind(&self, kind: PolicyKind) -> Vec<&Policy> {
        self.list_all()
            .iter()
            .filter(|policy| policy.kind() == kind)
            .collect()
    }

    /// Lists policies by logical type name; an unknown name matches nothing
    fn list_by_type(&self, type_name: &str) -> Vec<&Policy> {
        match PolicyKind::from_type_name(type_name.trim()) {
            Some(kind) => self.list_by_kind(kind),
            None => Vec::new(),
        }
    }
}

/// List-backed policy store
#[derive(Debug, Default, Clone)]
pub struct InMemoryPolicyRepository {
    policies: Vec<Policy>,
    sequence: PolicyNumberSequence,
}

impl InMemoryPolicyRepository {
    /// Creates an empty store with fresh sequences
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every policy; the number sequences keep their position
    pub fn clear(&mut self) {
        self.policies.clear();
    }

    /// Returns the number of policies
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns true if the store holds no policy
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Returns the number sequences
    pub fn sequence(&self) -> &PolicyNumberSequence {
        &self.sequence
    }

    /// Moves each variant's counter to one past its highest stored number
    ///
    /// Variants with no stored policy keep their counter.
    pub fn sync_sequences(&mut self) {
        for kind in PolicyKind::ALL {
            let highest = self
                .policies
                .iter()
                .filter(|policy| policy.kind() == kind)
                .map(Policy::number)
                .max();
            let Some(highest) = highest else {
                continue;
            };
            self.sequence.advance_past(kind, highest);
            match self.sequence.peek(kind) {
                Some(next) => debug!(kind = %kind, next = %next, "Sequence synchronised"),
                None => warn!(kind = %kind, highest = %highest, "No numbers left after highest stored policy"),
            }
        }
    }
}

impl PolicyRepository for InMemoryPolicyRepository {
    fn issue_number(&mut self, kind: PolicyKind) -> Result<PolicyNumber, PolicyError> {
        self.sequence.issue(kind).ok_or(PolicyError::NumbersExhausted(kind))
    }

    fn add(&mut self, policy: Policy) -> Result<(), PolicyError> {
        if self.find(policy.number()).is_some() {
            return Err(PolicyError::Duplicate(policy.number()));
        }
        debug!(number = %policy.number(), kind = %policy.kind(), "Policy added to store");
        self.policies.push(policy);
        Ok(())
    }

    fn find(&self, number: PolicyNumber) -> Option<&Policy> {
        self.policies.iter().find(|policy| policy.number() == number)
    }

    fn remove(&mut self, number: PolicyNumber) -> Result<(), PolicyError> {
        let index = self
            .policies
            .iter()
            .position(|policy| policy.number() == number)
            .ok_or(PolicyError::NotFound(number))?;
        self.policies.remove(index);
        debug!(number = %number, "Policy removed from store");
        Ok(())
    }

    fn list_all(&self) -> &[Policy] {
        &self.policies
    }
}
