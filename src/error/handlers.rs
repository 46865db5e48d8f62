//! Error handlers
//!
//! Provides error reporting and exit code mapping.

use crate::error::types::StoreError;
use log::{error, warn};

/// Exit code for a rejected login
pub const EXIT_AUTH_FAILED: i32 = 1;

/// Exit code for usage, configuration, hashing and runtime problems
pub const EXIT_INTERNAL: i32 = 2;

/// Handle a credential store error
pub fn handle_error(err: &StoreError) {
    match err {
        StoreError::Auth(_) => warn!("{}", err),
        _ => error!("Credential Store Error: {}", err),
    }
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &StoreError) -> i32 {
    match err {
        StoreError::Auth(_) => EXIT_AUTH_FAILED,
        StoreError::Config(_) => EXIT_INTERNAL,
        StoreError::Hash(_) => EXIT_INTERNAL,
        StoreError::Validation(_) => EXIT_INTERNAL,
        StoreError::Runtime(_) => EXIT_INTERNAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuthFailure, HashError, ValidationError};

    #[test]
    fn test_exit_codes() {
        assert_eq!(error_to_exit_code(&AuthFailure.into()), EXIT_AUTH_FAILED);
        assert_eq!(
            error_to_exit_code(&HashError::HashingFailed("boom".into()).into()),
            EXIT_INTERNAL
        );
        assert_eq!(
            error_to_exit_code(&ValidationError::MalformedInput("x".into()).into()),
            EXIT_INTERNAL
        );
        assert_eq!(
            error_to_exit_code(&config::ConfigError::Message("bad".into()).into()),
            EXIT_INTERNAL
        );
    }

    #[test]
    fn test_auth_failure_message_is_generic() {
        let err: StoreError = AuthFailure.into();
        assert_eq!(err.to_string(), "Authentication error: Credentials were wrong");
    }
}
