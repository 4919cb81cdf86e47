//! Initial load of the data files

use tracing::error;

use domain_policy::ParserRegistry;
use infra_file::{FilePolicyRepository, FileUserRepository};

use crate::console::Console;

/// Counts of records loaded at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub users: usize,
    pub policies: usize,
}

/// Loads users, then policies
///
/// A file that cannot be loaded is reported on `console` and its store is
/// left empty; loading continues with the next file.
pub fn load_initial(
    users: &mut FileUserRepository,
    policies: &mut FilePolicyRepository,
    parsers: &ParserRegistry,
    console: &mut dyn Console,
) -> LoadReport {
    let mut report = LoadReport::default();

    match users.load_initial() {
        Ok(count) => report.users = count,
        Err(e) => {
            error!(error = %e, "Users not loaded");
            console.show_error(&format!("Could not load users: {}", e));
        }
    }

    match policies.load_initial(parsers) {
        Ok(count) => report.policies = count,
        Err(e) => {
            error!(error = %e, "Policies not loaded");
            console.show_error(&format!("Could not load policies: {}", e));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::wiring::policy_parsers;
    use domain_user::Profile;
    use test_utils::{MemoryLineStore, PolicyFixtures, UserFixtures};

    #[test]
    fn test_report_counts_loaded_records() {
        let store = MemoryLineStore::new()
            .with_file("users.txt", [UserFixtures::user_line("root", "root123", Profile::Admin)])
            .with_file("policies.txt", PolicyFixtures::sample_lines());
        let mut users = FileUserRepository::with_store("users.txt", Box::new(store.clone()));
        let mut policies = FilePolicyRepository::with_store("policies.txt", Box::new(store));
        let mut console = ScriptedConsole::default();

        let report = load_initial(&mut users, &mut policies, &policy_parsers(), &mut console);

        assert_eq!(report, LoadReport { users: 1, policies: 3 });
        assert!(console.errors().is_empty());
    }

    #[test]
    fn test_failed_file_is_reported_and_counts_zero() {
        let store = MemoryLineStore::new().with_file("policies.txt", PolicyFixtures::sample_lines());
        let mut users = FileUserRepository::with_store("users.txt", Box::new(store.clone()));
        let mut policies = FilePolicyRepository::with_store("policies.txt", Box::new(store));
        let mut console = ScriptedConsole::default();

        let report = load_initial(&mut users, &mut policies, &policy_parsers(), &mut console);

        assert_eq!(report, LoadReport { users: 0, policies: 3 });
        assert_eq!(console.errors().len(), 1);
        assert!(console.errors()[0].starts_with("ERROR - Could not load users"));
    }
}
