//! Per-variant policy number sequences
//!
//! Each variant draws from its own counter. The counter holds the next
//! number to issue; after a load it is moved to one past the highest number
//! seen, even if that is lower than the current value.

use std::collections::HashMap;

use core_kernel::PolicyNumber;

use crate::policy::PolicyKind;

/// Next-number counters, one per policy variant
///
/// A variant whose counter went past `u32::MAX` is exhausted and issues
/// nothing more.
#[derive(Debug, Clone)]
pub struct PolicyNumberSequence {
    next: HashMap<PolicyKind, Option<PolicyNumber>>,
}

impl Default for PolicyNumberSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyNumberSequence {
    /// Creates counters at each variant's first number
    pub fn new() -> Self {
        let next = PolicyKind::ALL
            .into_iter()
            .map(|kind| (kind, Some(kind.first_number())))
            .collect();
        Self { next }
    }

    /// Returns the number the next `issue` will hand out, `None` once exhausted
    pub fn peek(&self, kind: PolicyKind) -> Option<PolicyNumber> {
        match self.next.get(&kind) {
            Some(next) => *next,
            None => Some(kind.first_number()),
        }
    }

    /// Hands out the next number and advances the counter
    pub fn issue(&mut self, kind: PolicyKind) -> Option<PolicyNumber> {
        let number = self.peek(kind)?;
        self.next.insert(kind, number.next());
        Some(number)
    }

    /// Sets the counter to one past `highest`
    pub fn advance_past(&mut self, kind: PolicyKind, highest: PolicyNumber) {
        self.next.insert(kind, highest.next());
    }
}
