//! Role menus

pub mod config;
pub mod controller;

pub use config::{menu_for, MenuAction, MenuLevel, MenuOption};
pub use controller::MenuController;
