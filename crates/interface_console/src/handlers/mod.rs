//! Menu action handlers
//!
//! One function per [`MenuAction`](crate::menu::MenuAction) that does work.
//! Handlers return `ActionError` for anything the menu should report.

pub mod input;
pub mod user;
pub mod policy;
