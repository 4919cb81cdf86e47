//! User Management Domain
//!
//! Users authenticate against the console with a name and password and are
//! granted one of three profiles, which decides the menus they can reach:
//!
//! - **Admin**: manages users and policies
//! - **Management**: contracts, deletes and queries policies
//! - **Consult**: queries policies only
//!
//! Passwords are hashed once on creation or change and only the hash is kept.
//! Storage is reached through the `UserRepository` port; an in-memory store is
//! provided here, and file-backed stores live in `infra_file`.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::BcryptHasher;
//! use domain_user::{InMemoryUserRepository, Profile, UserService};
//!
//! let hasher = BcryptHasher::new(4).unwrap();
//! let mut service = UserService::new(Box::new(InMemoryUserRepository::new()), Box::new(hasher));
//!
//! service.create("root", "root123", Profile::Admin).unwrap();
//! assert_eq!(service.login("root", "root123"), Some(Profile::Admin));
//! assert_eq!(service.login("root", "wrong"), None);
//! ```

pub mod profile;
pub mod user;
pub mod repository;
pub mod service;
pub mod error;

pub use profile::Profile;
pub use user::User;
pub use repository::{UserRepository, InMemoryUserRepository};
pub use service::UserService;
pub use error::UserError;
