//! File-backed repository implementations
//!
//! Each repository composes the domain's in-memory store, which answers
//! every query, and mirrors mutations to a data file through a
//! [`LineStore`](crate::LineStore).

pub mod user;
pub mod policy;

pub use user::FileUserRepository;
pub use policy::FilePolicyRepository;
