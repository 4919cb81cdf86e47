//! Policy Domain
//!
//! Home, auto and life policies: the entity and its variants, renewal
//! premiums, the persisted line format, number sequences and the policy
//! store.
//!
//! # Architecture
//!
//! - **Entity**: [`Policy`] with [`PolicyDetails`] per variant
//! - **Value Objects**: [`Coverage`], [`VehicleType`], [`Risk`]
//! - **Port**: [`PolicyRepository`], with [`InMemoryPolicyRepository`] here
//!   and the file-backed store in `infra_file`
//! - **Domain Service**: [`PolicyService`]
//!
//! # Policy Numbers
//!
//! ```text
//! Home  100001, 100002, ...
//! Auto  400000, 400001, ...
//! Life  800001, 800002, ...
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_policy::{HomeDetails, InMemoryPolicyRepository, PolicyKind, PolicyService};
//! use rust_decimal_macros::dec;
//!
//! let mut service = PolicyService::new(Box::new(InMemoryPolicyRepository::new()));
//! let number = service.contract_home(
//!     "12345678A",
//!     dec!(500.0),
//!     HomeDetails {
//!         floor_area: 80,
//!         contents_value: dec!(10000.0),
//!         address: "Calle X".to_string(),
//!         construction_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
//!     },
//! ).unwrap();
//!
//! assert_eq!(number.value(), 100001);
//! assert_eq!(service.list_by_kind(PolicyKind::Home).len(), 1);
//! ```

pub mod coverage;
pub mod policy;
pub mod premium;
pub mod codec;
pub mod sequence;
pub mod repository;
pub mod error;
pub mod services;

pub use coverage::{Coverage, VehicleType, Risk};
pub use policy::{Policy, PolicyKind, PolicyDetails, HomeDetails, AutoDetails, LifeDetails};
pub use codec::{ParserRegistry, PolicyParser, to_record, parse_home, parse_auto, parse_life, parse_amount, parse_flag};
pub use sequence::PolicyNumberSequence;
pub use repository::{PolicyRepository, InMemoryPolicyRepository};
pub use error::PolicyError;
pub use services::PolicyService;
