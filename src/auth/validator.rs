//! Credential record validation
//!
//! Opt-in checks a caller can run over a collection before securing it.
//! `CredentialStore::authenticate` does not apply them.

use std::collections::HashSet;

use super::credentials::{Password, UserRecord};
use crate::config::InputLimits;
use crate::error::ValidationError;

/// Usernames must be non-empty and within the configured length.
pub fn validate_username(username: &str, limits: &InputLimits) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::MalformedInput("Username is empty".into()));
    }
    if username.len() > limits.max_username_length {
        return Err(ValidationError::MalformedInput(format!(
            "Username longer than {} bytes",
            limits.max_username_length
        )));
    }
    Ok(())
}

/// Passwords only need to fit the length the store is willing to hash.
pub fn validate_password(password: &str, limits: &InputLimits) -> Result<(), ValidationError> {
    if password.len() > limits.max_password_length {
        return Err(ValidationError::MalformedInput(format!(
            "Password longer than {} bytes",
            limits.max_password_length
        )));
    }
    Ok(())
}

/// Checks every username, and every password still in plaintext.
pub fn validate_records(records: &[UserRecord], limits: &InputLimits) -> Result<(), ValidationError> {
    for record in records {
        validate_username(&record.username, limits)?;
        if let Password::Plaintext(plaintext) = &record.password {
            validate_password(plaintext, limits)?;
        }
    }
    Ok(())
}

/// Returns every username that occurs more than once, in first-seen order.
pub fn find_duplicate_usernames(records: &[UserRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();

    for record in records {
        if !seen.insert(record.username.as_str()) && !duplicates.contains(&record.username) {
            duplicates.push(record.username.clone());
        }
    }

    duplicates
}

/// Fails when the collection holds the same username more than once.
pub fn ensure_unique_usernames(records: &[UserRecord]) -> Result<(), ValidationError> {
    let duplicates = find_duplicate_usernames(records);
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::DuplicateUsernames(duplicates))
    }
}
