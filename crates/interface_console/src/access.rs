//! Access control
//!
//! ```text
//! bootstrap-check --(users exist)--> login-loop --(valid)--> Granted
//!        |                               |
//!        +--(create admin)---------------+--(no retry)--> Denied
//!        +--(refused / failed)--> Denied
//! ```

use tracing::{info, warn};

use domain_user::{Profile, UserService};

use crate::console::Console;
use crate::error::ConsoleError;

/// Result of authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    Granted { name: String, profile: Profile },
    Denied,
}

/// Gatekeeper between startup and the menus
pub struct AccessControl<'a> {
    users: &'a mut UserService,
}

impl<'a> AccessControl<'a> {
    pub fn new(users: &'a mut UserService) -> Self {
        Self { users }
    }

    /// Runs the bootstrap check and the login loop
    ///
    /// # Errors
    ///
    /// `ConsoleError::Closed` if input ends before a decision is reached
    pub fn authenticate(&mut self, console: &mut dyn Console) -> Result<AccessOutcome, ConsoleError> {
        if !self.users.has_users() && !self.register_initial_admin(console)? {
            return Ok(AccessOutcome::Denied);
        }
        self.login_loop(console)
    }

    fn register_initial_admin(&mut self, console: &mut dyn Console) -> Result<bool, ConsoleError> {
        console.show("No users are registered.");
        if !console.confirm("Create an administrator user?")? {
            warn!("Initial administrator declined");
            return Ok(false);
        }

        let name = console.ask("Administrator name: ")?;
        let password = console.ask_hidden("Administrator password: ")?;
        match self.users.create(&name, &password, Profile::Admin) {
            Ok(()) => {
                console.show(&format!("Administrator '{}' created.", name));
                Ok(true)
            }
            Err(e) => {
                console.show_error(&e.to_string());
                Ok(false)
            }
        }
    }

    fn login_loop(&mut self, console: &mut dyn Console) -> Result<AccessOutcome, ConsoleError> {
        loop {
            let name = console.ask("User: ")?;
            let password = console.ask_hidden("Password: ")?;

            if let Some(profile) = self.users.login(&name, &password) {
                console.show(&format!("Welcome, {} ({}).", name, profile));
                return Ok(AccessOutcome::Granted { name, profile });
            }

            console.show_error("Wrong user name or password");
            if !console.confirm("Try again?")? {
                info!(user = %name, "Login abandoned");
                return Ok(AccessOutcome::Denied);
            }
        }
    }
}
