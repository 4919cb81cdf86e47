//! Test Data Builders
//!
//! Builders let tests set only the fields they care about.

use core_kernel::PolicyNumber;
use domain_policy::{Policy, PolicyDetails, PolicyKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::PolicyFixtures;

/// Builder for policies
pub struct TestPolicyBuilder {
    number: Option<PolicyNumber>,
    holder_id: String,
    premium: Decimal,
    details: PolicyDetails,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::home()
    }
}

impl TestPolicyBuilder {
    /// Starts from the home fixture
    pub fn home() -> Self {
        Self::with_details(PolicyDetails::Home(PolicyFixtures::home()))
    }

    /// Starts from the auto fixture
    pub fn auto() -> Self {
        Self::with_details(PolicyDetails::Auto(PolicyFixtures::auto()))
    }

    /// Starts from the life fixture
    pub fn life() -> Self {
        Self::with_details(PolicyDetails::Life(PolicyFixtures::life()))
    }

    fn with_details(details: PolicyDetails) -> Self {
        Self {
            number: None,
            holder_id: PolicyFixtures::HOLDER.to_string(),
            premium: dec!(500.0),
            details,
        }
    }

    /// Sets the policy number; defaults to the variant's first number
    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(PolicyNumber::new(number));
        self
    }

    /// Sets the holder national ID
    pub fn with_holder(mut self, holder_id: impl Into<String>) -> Self {
        self.holder_id = holder_id.into();
        self
    }

    /// Sets the premium
    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.premium = premium;
        self
    }

    /// Returns the variant being built
    pub fn kind(&self) -> PolicyKind {
        self.details.kind()
    }

    /// Builds the policy
    ///
    /// # Panics
    ///
    /// Panics if the fields break a policy invariant
    pub fn build(self) -> Policy {
        let number = self.number.unwrap_or_else(|| self.details.kind().first_number());
        Policy::new(number, &self.holder_id, self.premium, self.details).expect("valid test policy")
    }
}
