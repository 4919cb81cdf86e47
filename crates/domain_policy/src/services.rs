//! Policy domain services
//!
//! `PolicyService` contracts, deletes and queries policies over any
//! [`PolicyRepository`]. It validates input before a number is drawn, so a
//! rejected contract never burns a number.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use core_kernel::PolicyNumber;

use crate::error::PolicyError;
use crate::policy::{AutoDetails, HomeDetails, LifeDetails, Policy, PolicyDetails, PolicyKind};
use crate::repository::PolicyRepository;

/// Contracting, deletion and queries over policies
pub struct PolicyService {
    repository: Box<dyn PolicyRepository>,
}

impl PolicyService {
    /// Creates a service over the given store
    pub fn new(repository: Box<dyn PolicyRepository>) -> Self {
        Self { repository }
    }

    /// Contracts a policy of the variant carried by `details`
    ///
    /// # Arguments
    ///
    /// * `holder_id` - National ID of the policy holder
    /// * `premium` - Annual premium, strictly positive
    /// * `details` - Variant data
    ///
    /// # Returns
    ///
    /// The number issued to the new policy
    ///
    /// # Errors
    ///
    /// `PolicyError::Validation` for invalid input (nothing is issued),
    /// `PolicyError::NumbersExhausted` if the variant has no numbers left,
    /// `PolicyError::Duplicate` if the issued number is already stored,
    /// `PolicyError::Storage` if the store could not persist the policy
    pub fn contract(
        &mut self,
        holder_id: &str,
        premium: Decimal,
        details: PolicyDetails,
    ) -> Result<PolicyNumber, PolicyError> {
        Policy::validate_terms(holder_id, premium, &details)?;

        let kind = details.kind();
        let number = self.repository.issue_number(kind)?;
        let policy = Policy::new(number, holder_id, premium, details)?;
        self.repository.add(policy)?;

        info!(number = %number, kind = %kind, holder = %holder_id.trim(), "Policy contracted");
        Ok(number)
    }

    /// Contracts a home policy
    pub fn contract_home(
        &mut self,
        holder_id: &str,
        premium: Decimal,
        details: HomeDetails,
    ) -> Result<PolicyNumber, PolicyError> {
        self.contract(holder_id, premium, PolicyDetails::Home(details))
    }

    /// Contracts an auto policy
    pub fn contract_auto(
        &mut self,
        holder_id: &str,
        premium: Decimal,
        details: AutoDetails,
    ) -> Result<PolicyNumber, PolicyError> {
        self.contract(holder_id, premium, PolicyDetails::Auto(details))
    }

    /// Contracts a life policy
    pub fn contract_life(
        &mut self,
        holder_id: &str,
        premium: Decimal,
        details: LifeDetails,
    ) -> Result<PolicyNumber, PolicyError> {
        self.contract(holder_id, premium, PolicyDetails::Life(details))
    }

    /// Deletes a policy by number
    pub fn delete(&mut self, number: PolicyNumber) -> Result<(), PolicyError> {
        self.repository.remove(number)?;
        info!(number = %number, "Policy deleted");
        Ok(())
    }

    /// Finds a policy by number
    pub fn find(&self, number: PolicyNumber) -> Option<&Policy> {
        self.repository.find(number)
    }

    /// Lists every policy
    pub fn list_all(&self) -> &[Policy] {
        self.repository.list_all()
    }

    /// Lists the policies of one variant
    pub fn list_by_kind(&self, kind: PolicyKind) -> Vec<&Policy> {
        self.repository.list_by_kind(kind)
    }

    /// Lists policies by logical type name (`SeguroHogar`, ...)
    pub fn list_by_type(&self, type_name: &str) -> Vec<&Policy> {
        self.repository.list_by_type(type_name)
    }

    /// Quotes next year's premium for a stored policy
    ///
    /// # Errors
    ///
    /// `PolicyError::NotFound` if no policy has that number,
    /// `PolicyError::PremiumOverflow` if the quote is out of range
    pub fn renewal_quote(
        &self,
        number: PolicyNumber,
        interest: Decimal,
        today: NaiveDate,
    ) -> Result<Decimal, PolicyError> {
        let policy = self.repository.find(number).ok_or(PolicyError::NotFound(number))?;
        policy
            .next_year_premium(interest, today)
            .ok_or(PolicyError::PremiumOverflow(number))
    }
}
