//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! insurance console test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for users and policies
//! - `builders`: Builder patterns for policy details
//! - `line_store`: In-memory line store with failure injection
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod line_store;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use line_store::*;
pub use generators::*;
