//! Policy entity
//!
//! A policy has the fields every contract shares (number, holder, premium)
//! and one set of variant details: home, auto or life.
//!
//! # Invariants
//!
//! - The holder national ID is not blank
//! - The premium is strictly positive
//! - No text field contains the record separator, so every policy can be
//!   written to a single line

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{format_date, is_storable, PolicyNumber};

use crate::coverage::{Coverage, Risk, VehicleType};
use crate::error::PolicyError;

/// The three policy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    Home,
    Auto,
    Life,
}

impl PolicyKind {
    /// Every variant, in menu order
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Home, PolicyKind::Auto, PolicyKind::Life];

    /// Logical type name, also the discriminator of a persisted line
    pub fn type_name(&self) -> &'static str {
        match self {
            PolicyKind::Home => "SeguroHogar",
            PolicyKind::Auto => "SeguroAuto",
            PolicyKind::Life => "SeguroVida",
        }
    }

    /// Looks a variant up by its logical type name
    pub fn from_type_name(name: &str) -> Option<PolicyKind> {
        PolicyKind::ALL.into_iter().find(|kind| kind.type_name() == name)
    }

    /// First number issued for the variant in a fresh store
    pub fn first_number(&self) -> PolicyNumber {
        match self {
            PolicyKind::Home => PolicyNumber::new(100_001),
            PolicyKind::Auto => PolicyNumber::new(400_000),
            PolicyKind::Life => PolicyNumber::new(800_001),
        }
    }

    /// Short label for menus and listings
    pub fn label(&self) -> &'static str {
        match self {
            PolicyKind::Home => "Home",
            PolicyKind::Auto => "Auto",
            PolicyKind::Life => "Life",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Home policy details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeDetails {
    /// Floor area in square metres
    pub floor_area: u32,
    /// Insured value of the contents
    pub contents_value: Decimal,
    pub address: String,
    pub construction_date: NaiveDate,
}

/// Auto policy details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoDetails {
    pub description: String,
    pub fuel: String,
    pub vehicle_type: VehicleType,
    pub coverage: Coverage,
    pub roadside_assistance: bool,
    /// Number of claims filed
    pub claims: u32,
}

/// Life policy details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeDetails {
    pub birth_date: NaiveDate,
    pub risk: Risk,
    pub indemnity: Decimal,
}

/// Variant-specific policy data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyDetails {
    Home(HomeDetails),
    Auto(AutoDetails),
    Life(LifeDetails),
}

impl PolicyDetails {
    /// Returns the variant
    pub fn kind(&self) -> PolicyKind {
        match self {
            PolicyDetails::Home(_) => PolicyKind::Home,
            PolicyDetails::Auto(_) => PolicyKind::Auto,
            PolicyDetails::Life(_) => PolicyKind::Life,
        }
    }

    fn text_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            PolicyDetails::Home(home) => vec![("address", home.address.as_str())],
            PolicyDetails::Auto(auto) => vec![
                ("description", auto.description.as_str()),
                ("fuel", auto.fuel.as_str()),
            ],
            PolicyDetails::Life(_) => Vec::new(),
        }
    }
}

/// An insurance policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    number: PolicyNumber,
    holder_id: String,
    premium: Decimal,
    details: PolicyDetails,
}

impl Policy {
    /// Creates a policy, enforcing the entity invariants
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::Validation` if any invariant is broken
    pub fn new(
        number: PolicyNumber,
        holder_id: &str,
        premium: Decimal,
        details: PolicyDetails,
    ) -> Result<Self, PolicyError> {
        Self::validate_terms(holder_id, premium, &details)?;
        Ok(Self {
            number,
            holder_id: holder_id.trim().to_string(),
            premium,
            details,
        })
    }

    /// Checks the entity invariants without building a policy
    ///
    /// Lets callers reject input before a policy number is consumed.
    pub fn validate_terms(
        holder_id: &str,
        premium: Decimal,
        details: &PolicyDetails,
    ) -> Result<(), PolicyError> {
        let holder_id = holder_id.trim();
        if holder_id.is_empty() {
            return Err(PolicyError::validation("holder national ID must not be blank"));
        }
        if !is_storable(holder_id) {
            return Err(PolicyError::validation("holder national ID contains a forbidden character"));
        }
        if premium <= Decimal::ZERO {
            return Err(PolicyError::validation("premium must be positive"));
        }
        for (field, value) in details.text_fields() {
            if !is_storable(value) {
                return Err(PolicyError::validation(format!(
                    "{} must not contain ';' or line breaks",
                    field
                )));
            }
        }
        Ok(())
    }

    /// Returns the policy number
    pub fn number(&self) -> PolicyNumber {
        self.number
    }

    /// Returns the holder's national ID
    pub fn holder_id(&self) -> &str {
        &self.holder_id
    }

    /// Returns the current premium
    pub fn premium(&self) -> Decimal {
        self.premium
    }

    /// Returns the variant details
    pub fn details(&self) -> &PolicyDetails {
        &self.details
    }

    /// Returns the variant
    pub fn kind(&self) -> PolicyKind {
        self.details.kind()
    }

    /// Returns the logical type name (`SeguroHogar`, `SeguroAuto`, `SeguroVida`)
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} policy {} (holder = {}, premium = {:.2}",
            self.kind(),
            self.number,
            self.holder_id,
            self.premium
        )?;
        match &self.details {
            PolicyDetails::Home(home) => write!(
                f,
                ", floor area = {} m2, contents = {:.2}, address = {}, built = {})",
                home.floor_area,
                home.contents_value,
                home.address,
                format_date(home.construction_date)
            ),
            PolicyDetails::Auto(auto) => write!(
                f,
                ", description = {}, fuel = {}, vehicle = {}, coverage = {}, roadside assistance = {}, claims = {})",
                auto.description,
                auto.fuel,
                auto.vehicle_type,
                auto.coverage,
                if auto.roadside_assistance { "yes" } else { "no" },
                auto.claims
            ),
            PolicyDetails::Life(life) => write!(
                f,
                ", born = {}, risk = {}, indemnity = {:.2})",
                format_date(life.birth_date),
                life.risk,
                life.indemnity
            ),
        }
    }
}
