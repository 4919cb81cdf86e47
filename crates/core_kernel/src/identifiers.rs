//! Strongly-typed identifiers for domain entities
//!
//! Policy numbers are plain integers on the wire and in the console, but a
//! newtype keeps them from being mixed up with counts, areas or claim totals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Human-facing policy number, unique across the whole policy store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyNumber(u32);

impl PolicyNumber {
    /// Creates a policy number from its numeric value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the number that follows this one, `None` after `u32::MAX`
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for PolicyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PolicyNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<u32> for PolicyNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PolicyNumber> for u32 {
    fn from(number: PolicyNumber) -> u32 {
        number.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_number_display() {
        assert_eq!(PolicyNumber::new(100001).to_string(), "100001");
    }

    #[test]
    fn test_policy_number_parsing() {
        let parsed: PolicyNumber = " 400000 ".parse().unwrap();
        assert_eq!(parsed, PolicyNumber::new(400000));
        assert!("40A".parse::<PolicyNumber>().is_err());
    }

    #[test]
    fn test_next() {
        assert_eq!(PolicyNumber::new(110).next(), Some(PolicyNumber::new(111)));
        assert_eq!(PolicyNumber::new(u32::MAX).next(), None);
    }
}
