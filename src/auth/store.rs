//! Credential store
//!
//! Secures user records in place and authenticates username/password pairs
//! against them.

use argon2::Params;
use log::{debug, info, warn};
use rand::Rng;
use rand::distributions::Alphanumeric;

use super::credentials::{Password, UserRecord};
use super::hashing::{CostCeiling, argon2_params, hash_password, verify_password};
use crate::config::StoreConfig;
use crate::error::{AuthFailure, HashError};

#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hashes, secures and authenticates credentials with fixed Argon2id parameters.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    params: Params,
    ceiling: CostCeiling,
    max_password_length: usize,
    /// Hash of a random secret, verified when no real record is checked
    dummy_hash: String,
    #[cfg(test)]
    verify_calls: Arc<AtomicUsize>,
}

impl CredentialStore {
    pub fn new(config: &StoreConfig) -> Result<Self, HashError> {
        let params = argon2_params(&config.hashing)?;

        let secret: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let dummy_hash = hash_password(&secret, &params)?;

        info!(
            "Credential store ready (argon2id m={} KiB, t={}, p={})",
            config.hashing.memory_cost_kib, config.hashing.time_cost, config.hashing.parallelism
        );

        Ok(Self {
            params,
            ceiling: CostCeiling::from_config(&config.hashing),
            max_password_length: config.limits.max_password_length,
            dummy_hash,
            #[cfg(test)]
            verify_calls: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Produces a salted one-way hash. Two calls with the same input differ.
    ///
    /// Passwords longer than `limits.max_password_length` are refused.
    pub fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        if plaintext.len() > self.max_password_length {
            return Err(HashError::PasswordTooLong {
                length: plaintext.len(),
                max: self.max_password_length,
            });
        }
        hash_password(plaintext, &self.params)
    }

    /// Checks a candidate against a stored hash. Malformed hashes, and hashes
    /// asking for more than the configured cost ceiling, fail closed.
    pub fn verify(&self, candidate: &str, hash: &str) -> bool {
        #[cfg(test)]
        self.verify_calls.fetch_add(1, Ordering::SeqCst);

        verify_password(candidate, hash, &self.ceiling)
    }

    /// Replaces every plaintext password with its hash, mutating the records
    /// in place, and hands the same slice back.
    ///
    /// All hashes are computed before any record is touched, so on error the
    /// slice is left exactly as it was. Records that are already secured are
    /// skipped, so running this twice over a collection is harmless.
    pub fn secure_all<'a>(
        &self,
        records: &'a mut [UserRecord],
    ) -> Result<&'a mut [UserRecord], HashError> {
        let hashes = records
            .iter()
            .map(|record| match &record.password {
                Password::Plaintext(plaintext) => self.hash(plaintext).map(Some),
                Password::Secured(_) => Ok(None),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut secured = 0;
        for (record, hash) in records.iter_mut().zip(hashes) {
            match hash {
                Some(hash) => {
                    record.password = Password::Secured(hash);
                    secured += 1;
                    debug!("Secured password for user: {}", record.username);
                }
                None => debug!("Password for user {} already secured", record.username),
            }
        }

        info!("Secured {} of {} user record(s)", secured, records.len());
        Ok(records)
    }

    /// Returns the first record whose username matches and whose hash verifies
    /// the password.
    ///
    /// The whole collection is scanned on every call and at least one hash
    /// verification always runs, so unknown users and wrong passwords cost
    /// about the same and yield the same `AuthFailure`.
    pub fn authenticate<'a>(
        &self,
        username: &str,
        password: &str,
        records: &'a [UserRecord],
    ) -> Result<&'a UserRecord, AuthFailure> {
        let mut matched: Option<&'a UserRecord> = None;
        let mut checked = 0;

        for record in records {
            if record.username != username {
                continue;
            }
            checked += 1;

            let verified = match &record.password {
                Password::Secured(hash) => self.verify(password, hash),
                Password::Plaintext(_) => {
                    let _ = self.verify(password, &self.dummy_hash);
                    false
                }
            };

            if verified && matched.is_none() {
                matched = Some(record);
            }
        }

        if checked == 0 {
            let _ = self.verify(password, &self.dummy_hash);
        }

        match matched {
            Some(record) => {
                info!("User {} authenticated", record.username);
                Ok(record)
            }
            None => {
                warn!("Authentication failed for user: {}", username);
                Err(AuthFailure)
            }
        }
    }
}
