//! Console Interface Layer
//!
//! This crate provides the interactive front end of the insurance console.
//!
//! # Architecture
//!
//! - **Console**: I/O port with a terminal and a scripted adapter
//! - **Access control**: first-run administrator setup and login
//! - **Menus**: static per-profile tables driven by one controller
//! - **Handlers**: one function per menu action
//! - **Wiring**: repository choice per run mode, initial load
//!
//! # Session Flow
//!
//! ```text
//! simulation? -> build state -> authenticate -> main menu -> exit
//!                                    \-> Denied -> exit
//! ```
//!
//! # Example
//!
//! ```rust
//! use interface_console::{run, AppConfig, ScriptedConsole};
//!
//! let config = AppConfig { hash_cost: 4, ..AppConfig::default() };
//! // Simulation mode, decline creating the first administrator
//! let mut console = ScriptedConsole::new(["y", "n"]);
//!
//! run(&config, &mut console)?;
//! assert!(console.contains("No users are registered."));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod console;
pub mod wiring;
pub mod bootstrap;
pub mod access;
pub mod menu;
pub mod handlers;

use tracing::info;

use domain_policy::PolicyService;
use domain_user::{Profile, UserService};

pub use access::{AccessControl, AccessOutcome};
pub use config::AppConfig;
pub use console::{Console, ScriptedConsole, Terminal};
pub use error::{ActionError, ConsoleError};
pub use menu::{MenuAction, MenuController};
pub use wiring::{build_state, policy_parsers, RunMode};

/// Services shared by every action
pub struct AppState {
    pub users: UserService,
    pub policies: PolicyService,
}

/// The logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub profile: Profile,
}

/// Runs one console session from the run-mode question to exit
///
/// Input closing at any point ends the session normally.
///
/// # Errors
///
/// Returns error if the configured hash cost is invalid or the terminal fails
pub fn run(config: &AppConfig, console: &mut dyn Console) -> anyhow::Result<()> {
    match run_session(config, console) {
        Err(SessionError::Console(ConsoleError::Closed)) => {
            info!("Input closed, ending session");
            Ok(())
        }
        other => other.map_err(anyhow::Error::from),
    }
}

#[derive(Debug, thiserror::Error)]
enum SessionError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error(transparent)]
    Core(#[from] core_kernel::CoreError),
}

fn run_session(config: &AppConfig, console: &mut dyn Console) -> Result<(), SessionError> {
    console.clear_screen();
    let mode = if console.confirm("Start in simulation mode?")? {
        RunMode::Simulation
    } else {
        RunMode::Persistent
    };

    let mut state = build_state(config, mode, console)?;

    match AccessControl::new(&mut state.users).authenticate(console)? {
        AccessOutcome::Granted { name, profile } => {
            info!(user = %name, %profile, "Session started");
            MenuController::new(&mut state, Session { name, profile }).run(console)?;
            info!("Session ended");
        }
        AccessOutcome::Denied => {
            console.show("Access denied.");
            info!("Access denied");
        }
    }
    Ok(())
}
