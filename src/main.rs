//! Credential Store - Entry Point
//!
//! Secures the sample users and authenticates a login given on the command line.
//! Without arguments it runs a short login scenario against the sample users.

use std::env;
use std::process;

use log::{info, warn};

use credential_store::auth::{
    CredentialStore, UserRecord, find_duplicate_usernames, sample_users, validate_records,
};
use credential_store::config::StoreConfig;
use credential_store::error::StoreError;
use credential_store::error::handlers::{EXIT_INTERNAL, error_to_exit_code, handle_error};
use credential_store::utils::logging::setup_logging;

/// Logins tried when no credentials are passed
const SCENARIO: [(&str, &str); 3] = [
    ("jack", "password2"),
    ("jack", "password1"),
    ("nobody", "password2"),
];

#[tokio::main]
async fn main() {
    setup_logging();

    info!("Launching credential store...");

    let args: Vec<String> = env::args().skip(1).collect();
    let login = match args.as_slice() {
        [] => None,
        [username, password] => Some((username.clone(), password.clone())),
        _ => {
            eprintln!("Usage: credential-store [USERNAME PASSWORD]");
            process::exit(EXIT_INTERNAL);
        }
    };

    if let Err(e) = run(login).await {
        handle_error(&e);
        process::exit(error_to_exit_code(&e));
    }
}

async fn run(login: Option<(String, String)>) -> Result<(), StoreError> {
    let config = StoreConfig::load()?;

    // Argon2 is CPU-bound; keep it off the async workers
    tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
        let store = CredentialStore::new(&config)?;

        let mut users = sample_users();
        validate_records(&users, &config.limits)?;
        for username in find_duplicate_usernames(&users) {
            warn!("Username {} appears more than once; first match wins", username);
        }
        store.secure_all(&mut users)?;

        match login {
            Some((username, password)) => {
                let record = store.authenticate(&username, &password, &users)?;
                println!("Welcome back, {}", record.username);
                Ok(())
            }
            None => {
                run_scenario(&store, &users);
                Ok(())
            }
        }
    })
    .await
    .map_err(|e| StoreError::Runtime(e.to_string()))?
}

fn run_scenario(store: &CredentialStore, users: &[UserRecord]) {
    for (username, password) in SCENARIO {
        match store.authenticate(username, password, users) {
            Ok(record) => println!("{} / {}: authenticated as {}", username, password, record.username),
            Err(failure) => println!("{} / {}: {}", username, password, failure),
        }
    }
}
