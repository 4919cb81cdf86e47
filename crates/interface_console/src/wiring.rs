//! Application wiring
//!
//! Chooses the repositories for the run mode and assembles the services.

use tracing::info;

use core_kernel::{BcryptHasher, CoreError};
use domain_policy::{
    parse_auto, parse_home, parse_life, InMemoryPolicyRepository, ParserRegistry, PolicyKind,
    PolicyService,
};
use domain_user::{InMemoryUserRepository, UserService};
use infra_file::{FilePolicyRepository, FileUserRepository};

use crate::bootstrap;
use crate::config::AppConfig;
use crate::console::Console;
use crate::AppState;

/// Storage mode chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// In-memory stores, nothing read or written
    Simulation,
    /// File-backed stores at the configured paths
    Persistent,
}

/// Parsers for every policy variant, keyed by discriminator
pub fn policy_parsers() -> ParserRegistry {
    let mut registry = ParserRegistry::new();
    registry
        .register(PolicyKind::Home, parse_home)
        .register(PolicyKind::Auto, parse_auto)
        .register(PolicyKind::Life, parse_life);
    registry
}

/// Builds the application state for `mode`
///
/// In persistent mode the data files are loaded first; load failures are
/// reported on `console` and the affected store starts empty.
///
/// # Errors
///
/// `CoreError::Security` if the configured hash cost is out of range
pub fn build_state(
    config: &AppConfig,
    mode: RunMode,
    console: &mut dyn Console,
) -> Result<AppState, CoreError> {
    let hasher = Box::new(BcryptHasher::new(config.hash_cost)?);

    let state = match mode {
        RunMode::Simulation => {
            info!("Starting in simulation mode");
            AppState {
                users: UserService::new(Box::new(InMemoryUserRepository::new()), hasher),
                policies: PolicyService::new(Box::new(InMemoryPolicyRepository::new())),
            }
        }
        RunMode::Persistent => {
            info!(
                users = %config.users_file.display(),
                policies = %config.policies_file.display(),
                "Starting with file storage"
            );
            let mut users = FileUserRepository::open(&config.users_file);
            let mut policies = FilePolicyRepository::open(&config.policies_file);
            let report =
                bootstrap::load_initial(&mut users, &mut policies, &policy_parsers(), console);
            info!(users = report.users, policies = report.policies, "Initial load finished");
            AppState {
                users: UserService::new(Box::new(users), hasher),
                policies: PolicyService::new(Box::new(policies)),
            }
        }
    };

    Ok(state)
}
