//! Core Kernel - Foundational types and utilities for the insurance console
//!
//! This crate provides the building blocks shared by the user and policy domains:
//! - Policy number identifiers
//! - Date parsing and formatting for the `dd/MM/yyyy` convention
//! - Salted password hashing
//! - Flat-file record helpers
//! - Common error type

pub mod identifiers;
pub mod temporal;
pub mod security;
pub mod record;
pub mod error;

pub use identifiers::PolicyNumber;
pub use temporal::{parse_date, format_date, years_between, DATE_FORMAT};
pub use security::{PasswordHasher, BcryptHasher, SecurityError};
pub use record::{FIELD_SEPARATOR, split_record, join_record, is_storable, normalize_code};
pub use error::CoreError;
