//! Insurance Console - Binary
//!
//! Starts an interactive session on the terminal.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin insurance-console
//!
//! INSURANCE_USERS_FILE=/srv/data/users.txt INSURANCE_HASH_COST=10 cargo run --bin insurance-console
//! ```
//!
//! # Environment Variables
//!
//! * `INSURANCE_USERS_FILE` - Users data file (default: data/users.txt)
//! * `INSURANCE_POLICIES_FILE` - Policies data file (default: data/policies.txt)
//! * `INSURANCE_HASH_COST` - bcrypt cost for new passwords (default: 12)
//! * `INSURANCE_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: warn)

use interface_console::{run, AppConfig, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::load();
    init_tracing(&config.log_level);

    tracing::info!(
        users = %config.users_file.display(),
        policies = %config.policies_file.display(),
        "Starting insurance console"
    );

    run(&config, &mut Terminal::new())
}

/// Initializes the tracing subscriber, writing to stderr so logs do not
/// mix with the menus.
///
/// # Arguments
///
/// * `log_level` - Filter used when `RUST_LOG` is not set
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
