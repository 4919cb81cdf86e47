//! Session Tests
//!
//! Whole sessions through `run`, from the run-mode question to exit.
//!
//! # Test Organization
//!
//! - `persistent` - file storage in a temporary directory, across two runs
//! - `simulation` - in-memory storage leaves the disk alone
//! - `termination` - closed input and bad configuration

use std::fs;

use interface_console::{run, AppConfig, ScriptedConsole};
use tempfile::TempDir;
use test_utils::UserFixtures;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn config_in(dir: &TempDir) -> AppConfig {
    AppConfig {
        users_file: dir.path().join("data").join("users.txt"),
        policies_file: dir.path().join("data").join("policies.txt"),
        hash_cost: 4,
        ..AppConfig::default()
    }
}

fn run_script(config: &AppConfig, answers: &[&str]) -> ScriptedConsole {
    let mut console = ScriptedConsole::new(answers.iter().copied());
    run(config, &mut console).unwrap();
    console
}

mod persistent {
    use super::*;

    #[test]
    fn test_first_run_then_reload() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        // File mode, create root, log in, contract a home policy, list homes, exit
        let first = run_script(
            &config,
            &[
                "n",
                "y", UserFixtures::ADMIN_NAME, UserFixtures::ADMIN_PASSWORD,
                UserFixtures::ADMIN_NAME, UserFixtures::ADMIN_PASSWORD,
                "2", "1", "1",
                "12345678A", "500", "80", "10000", "Calle X", "01/01/2000",
                "4", "3", "2",
                "5", "4", "3",
            ],
        );

        assert_eq!(first.errors().len(), 2, "both missing files are reported");
        assert!(first.errors()[0].starts_with("ERROR - Could not load users"));
        assert!(first.contains("Home policy 100001 contracted."));
        assert!(first.contains("Home policy 100001 (holder = 12345678A"));

        let policies = fs::read_to_string(&config.policies_file).unwrap();
        assert!(policies.starts_with("SeguroHogar;100001;12345678A;500;80;10000;Calle X;01/01/2000;"));
        let users = fs::read_to_string(&config.users_file).unwrap();
        assert!(users.starts_with("root;$2"));
        assert!(users.trim_end().ends_with(";ADMIN"));

        // Second run loads both files and logs straight in
        let second = run_script(
            &config,
            &[
                "n",
                UserFixtures::ADMIN_NAME, UserFixtures::ADMIN_PASSWORD,
                "2", "3", "1",
                "5", "4", "3",
            ],
        );

        assert!(second.errors().is_empty());
        assert!(!second.contains("No users are registered."));
        assert!(second.contains("Home policy 100001"));
    }

    #[test]
    fn test_numbers_continue_after_reload() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let contract_home = [
            "2", "1", "1",
            "12345678A", "300", "60", "5000", "Calle Y", "15/06/1990",
            "4", "4", "3",
        ];

        let mut first = vec!["n", "y", "root", "root123", "root", "root123"];
        first.extend(contract_home);
        run_script(&config, &first);

        let mut second = vec!["n", "root", "root123"];
        second.extend(contract_home);
        let console = run_script(&config, &second);

        assert!(console.contains("Home policy 100002 contracted."));
        let lines = fs::read_to_string(&config.policies_file).unwrap();
        assert_eq!(lines.lines().count(), 2);
    }
}

mod simulation {
    use super::*;

    #[test]
    fn test_simulation_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let console = run_script(
            &config,
            &[
                "y",
                "y", "root", "root123",
                "root", "root123",
                "2", "1", "3",
                "12345678A", "200", "10/03/1986", "BAJO", "50000",
                "4", "4", "3",
            ],
        );

        assert!(console.errors().is_empty());
        assert!(console.contains("Life policy 800001 contracted."));
        assert!(!config.users_file.exists());
        assert!(!config.policies_file.exists());
    }

    #[test]
    fn test_denied_access_ends_session() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let console = run_script(&config, &["y", "n"]);

        assert!(console.contains("Access denied."));
    }
}

mod termination {
    use super::*;

    #[test]
    fn test_closed_input_is_a_normal_exit() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let mut console = ScriptedConsole::new(["y", "y", "root"]);

        assert!(run(&config, &mut console).is_ok());
    }

    #[test]
    fn test_invalid_hash_cost_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            hash_cost: 99,
            ..config_in(&dir)
        };
        let mut console = ScriptedConsole::new(["y"]);

        assert!(run(&config, &mut console).is_err());
    }
}
