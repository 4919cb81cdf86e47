//! Menu loop
//!
//! Draws a level, reads a choice and dispatches it. `Open` runs the target
//! level's loop and comes back to this one when it exits.

use tracing::{debug, warn};

use crate::console::Console;
use crate::error::{ActionError, ConsoleError};
use crate::handlers;
use crate::menu::config::{menu_for, MenuAction, MenuLevel};
use crate::{AppState, Session};

/// Runs the menus of a logged-in session
pub struct MenuController<'a> {
    state: &'a mut AppState,
    session: Session,
    levels: &'static [MenuLevel],
}

impl<'a> MenuController<'a> {
    /// Creates a controller showing the menus of the session's profile
    pub fn new(state: &'a mut AppState, session: Session) -> Self {
        let levels = menu_for(session.profile);
        Self {
            state,
            session,
            levels,
        }
    }

    /// Runs the main menu until the user exits
    ///
    /// # Errors
    ///
    /// `ConsoleError` when input closes or the terminal fails
    pub fn run(&mut self, console: &mut dyn Console) -> Result<(), ConsoleError> {
        self.run_level(0, console)
    }

    fn run_level(&mut self, index: usize, console: &mut dyn Console) -> Result<(), ConsoleError> {
        let levels = self.levels;
        let Some(level) = levels.get(index) else {
            warn!(level = index, "Menu level does not exist");
            return Ok(());
        };

        loop {
            console.clear_screen();
            console.show(&format!("== {} ==", level.title));
            for (position, option) in level.options.iter().enumerate() {
                console.show(&format!("{}. {}", position + 1, option.label));
            }

            let answer = console.ask("Option: ")?;
            let chosen = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|n| level.options.get(n));
            let Some(option) = chosen else {
                console.show_error("Invalid option");
                console.pause()?;
                continue;
            };

            debug!(level = level.title, option = option.label, "Menu option chosen");
            match option.action {
                MenuAction::Exit => return Ok(()),
                MenuAction::Open(target) => self.run_level(target, console)?,
                action => {
                    match self.dispatch(action, console) {
                        Ok(()) => {}
                        Err(ActionError::Console(e)) => return Err(e),
                        Err(e) => console.show_error(&e.to_string()),
                    }
                    console.pause()?;
                }
            }
        }
    }

    fn dispatch(&mut self, action: MenuAction, console: &mut dyn Console) -> Result<(), ActionError> {
        let state = &mut *self.state;
        match action {
            MenuAction::NewUser => handlers::user::new_user(state, console),
            MenuAction::DeleteUser => handlers::user::delete_user(state, console),
            MenuAction::ChangePassword => handlers::user::change_password(state, &self.session, console),
            MenuAction::ListUsers => handlers::user::list_users(state, console),
            MenuAction::ContractHome => handlers::policy::contract_home(state, console),
            MenuAction::ContractAuto => handlers::policy::contract_auto(state, console),
            MenuAction::ContractLife => handlers::policy::contract_life(state, console),
            MenuAction::DeletePolicy => handlers::policy::delete_policy(state, console),
            MenuAction::ListPolicies => handlers::policy::list_policies(state, None, console),
            MenuAction::ListPoliciesOf(kind) => handlers::policy::list_policies(state, Some(kind), console),
            MenuAction::Open(_) | MenuAction::Exit => Ok(()),
        }
    }
}
