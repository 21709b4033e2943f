//! User Registry - Entry Point
//!
//! Runs a scripted demonstration of registration, login, and removal
//! against an in-memory credential store, printing one status line per
//! operation.

use env_logger;
use log::{info, warn};

use user_registry::admin::AdministrativeView;
use user_registry::config::RegistryConfig;
use user_registry::error::RegistryError;
use user_registry::error::handlers::{error_tag, handle_error};
use user_registry::registry::CredentialStore;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Starting user registry demo...");

    let config = match RegistryConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config.toml ({}), using defaults", e);
            RegistryConfig::default()
        }
    };

    let mut admin = AdministrativeView::new(CredentialStore::new(config));

    report(
        "register anano",
        admin.register("anano", "anano@example.com", "secure123"),
    );
    report(
        "register gio",
        admin.register("gio", "gio@example.com", "hello123"),
    );
    report(
        "register anano again",
        admin.register("anano", "anano@example.com", "secure123"),
    );

    report("login anano", admin.authenticate("anano", "secure123"));
    report(
        "login anano (wrong password)",
        admin.authenticate("anano", "badpass"),
    );

    report("remove gio", admin.remove("gio"));
    report("remove gio again", admin.remove("gio"));

    println!("Total users: {}", admin.count());
    println!("Usernames: {:?}", admin.usernames());
}

/// Prints one transcript line per operation outcome.
fn report(action: &str, outcome: Result<(), RegistryError>) {
    match outcome {
        Ok(()) => println!("{}: ok", action),
        Err(e) => {
            handle_error(&e);
            println!("{}: failed ({})", action, error_tag(&e));
        }
    }
}
