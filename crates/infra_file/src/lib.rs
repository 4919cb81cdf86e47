//! Infrastructure File Layer
//!
//! This crate persists users and policies to flat text files, one record per
//! line with `;` between fields.
//!
//! # Architecture
//!
//! - [`LineStore`] is the only thing that touches the filesystem
//! - [`FileUserRepository`] and [`FilePolicyRepository`] implement the
//!   domain repository ports by decorating the in-memory stores
//!
//! Memory and file are not updated atomically. A failed append keeps the
//! new record in memory; a failed rewrite leaves both sides untouched.
//!
//! # Example
//!
//! ```rust,no_run
//! use infra_file::FileUserRepository;
//! use domain_user::UserRepository;
//!
//! let mut users = FileUserRepository::open("data/users.txt");
//! let loaded = users.load_initial()?;
//! assert_eq!(users.list_all().len(), loaded);
//! # Ok::<(), infra_file::StorageError>(())
//! ```

pub mod error;
pub mod line_store;
pub mod repositories;

pub use error::StorageError;
pub use line_store::{LineStore, FsLineStore};
pub use repositories::{FileUserRepository, FilePolicyRepository};
