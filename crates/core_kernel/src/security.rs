//! Password hashing
//!
//! Passwords are kept only as salted bcrypt hashes. The `PasswordHasher` trait
//! is the seam the user domain depends on; `BcryptHasher` is the production
//! implementation.

use thiserror::Error;

/// Errors raised while hashing a password
#[derive(Debug, Error)]
pub enum SecurityError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Invalid hash cost {0}, expected 4..=31")]
    InvalidCost(u32),
}

/// Hashes and verifies user passwords
pub trait PasswordHasher {
    /// Produces a salted hash of `password`
    fn hash(&self, password: &str) -> Result<String, SecurityError>;

    /// Checks `password` against a stored hash
    ///
    /// A malformed stored hash never verifies.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;
}

/// bcrypt-backed password hasher
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Lowest work factor bcrypt accepts
    pub const MIN_COST: u32 = 4;
    /// Highest work factor bcrypt accepts
    pub const MAX_COST: u32 = 31;

    /// Creates a hasher with the given work factor
    ///
    /// # Errors
    ///
    /// Returns `SecurityError::InvalidCost` outside `4..=31`
    pub fn new(cost: u32) -> Result<Self, SecurityError> {
        if !(Self::MIN_COST..=Self::MAX_COST).contains(&cost) {
            return Err(SecurityError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    /// Returns the configured work factor
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self { cost: 12 }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, SecurityError> {
        bcrypt::hash(password, self.cost).map_err(|e| SecurityError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        match bcrypt::verify(password, stored_hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::debug!(error = %e, "Stored password hash could not be checked");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> BcryptHasher {
        BcryptHasher::new(BcryptHasher::MIN_COST).unwrap()
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = fast_hasher();
        let first = hasher.hash("root123").unwrap();
        let second = hasher.hash("root123").unwrap();

        assert_ne!(first, "root123");
        assert_ne!(first, second);
        assert!(hasher.verify("root123", &first));
        assert!(hasher.verify("root123", &second));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hasher = fast_hasher();
        let hash = hasher.hash("root123").unwrap();
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!fast_hasher().verify("root123", "root123"));
    }

    #[test]
    fn test_invalid_cost() {
        assert!(matches!(BcryptHasher::new(3), Err(SecurityError::InvalidCost(3))));
        assert!(BcryptHasher::new(32).is_err());
    }
}
