//! Error types
//!
//! Defines domain-specific error types for hashing, validation and authentication.

use std::fmt;

/// Password hashing errors
#[derive(Debug)]
pub enum HashError {
    InvalidParams(String),
    HashingFailed(String),
    PasswordTooLong { length: usize, max: usize },
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::InvalidParams(msg) => write!(f, "Invalid hashing parameters: {}", msg),
            HashError::HashingFailed(msg) => write!(f, "Hashing failed: {}", msg),
            HashError::PasswordTooLong { length, max } => {
                write!(f, "Password of {} bytes exceeds the {} byte limit", length, max)
            }
        }
    }
}

impl std::error::Error for HashError {}

impl From<argon2::Error> for HashError {
    fn from(error: argon2::Error) -> Self {
        HashError::InvalidParams(error.to_string())
    }
}

impl From<argon2::password_hash::Error> for HashError {
    fn from(error: argon2::password_hash::Error) -> Self {
        HashError::HashingFailed(error.to_string())
    }
}

/// Input validation errors
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MalformedInput(String),
    DuplicateUsernames(Vec<String>),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
            ValidationError::DuplicateUsernames(names) => {
                write!(f, "Duplicate usernames: {}", names.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// No record matched the supplied credentials.
///
/// Deliberately carries no detail: an unknown username and a wrong password
/// produce the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthFailure;

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credentials were wrong")
    }
}

impl std::error::Error for AuthFailure {}

/// General error that encompasses all error types
#[derive(Debug)]
pub enum StoreError {
    Config(config::ConfigError),
    Hash(HashError),
    Validation(ValidationError),
    Auth(AuthFailure),
    Runtime(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Config(e) => write!(f, "Configuration error: {}", e),
            StoreError::Hash(e) => write!(f, "Hash error: {}", e),
            StoreError::Validation(e) => write!(f, "Validation error: {}", e),
            StoreError::Auth(e) => write!(f, "Authentication error: {}", e),
            StoreError::Runtime(e) => write!(f, "Runtime error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<config::ConfigError> for StoreError {
    fn from(error: config::ConfigError) -> Self {
        StoreError::Config(error)
    }
}

impl From<HashError> for StoreError {
    fn from(error: HashError) -> Self {
        StoreError::Hash(error)
    }
}

impl From<ValidationError> for StoreError {
    fn from(error: ValidationError) -> Self {
        StoreError::Validation(error)
    }
}

impl From<AuthFailure> for StoreError {
    fn from(error: AuthFailure) -> Self {
        StoreError::Auth(error)
    }
}
