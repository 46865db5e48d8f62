//! Password hashing primitives built around Argon2id.
//!
//! Hashes are PHC strings, so the salt and cost parameters travel with the
//! hash. Verification reads them back from the string but refuses any cost
//! above the configured ceiling.

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::rngs::OsRng;

use crate::config::HashingConfig;
use crate::error::HashError;

/// Highest Argon2 costs a stored hash may ask for during verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostCeiling {
    pub memory_cost_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl CostCeiling {
    pub fn from_config(config: &HashingConfig) -> Self {
        Self {
            memory_cost_kib: config.max_memory_cost_kib,
            time_cost: config.max_time_cost,
            parallelism: config.max_parallelism,
        }
    }

    pub fn permits(&self, params: &Params) -> bool {
        params.m_cost() <= self.memory_cost_kib
            && params.t_cost() <= self.time_cost
            && params.p_cost() <= self.parallelism
    }
}

/// Builds Argon2 parameters from configuration, rejecting values the
/// algorithm cannot run with.
pub fn argon2_params(config: &HashingConfig) -> Result<Params, HashError> {
    let params = Params::new(
        config.memory_cost_kib,
        config.time_cost,
        config.parallelism,
        None,
    )?;
    Ok(params)
}

/// Hashes a plaintext password with a fresh random salt and returns the PHC string.
pub fn hash_password(plaintext: &str, params: &Params) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone());
    let hash = argon2.hash_password(plaintext.as_bytes(), &salt)?.to_string();
    Ok(hash)
}

/// Verifies a plaintext password against a stored PHC string.
/// Malformed or foreign hashes, and hashes whose costs exceed `ceiling`, never match.
pub fn verify_password(plaintext: &str, stored_hash: &str, ceiling: &CostCeiling) -> bool {
    let parsed_hash = match PasswordHash::new(stored_hash) {
        Ok(hash) => hash,
        Err(_) => return false,
    };

    match Params::try_from(&parsed_hash) {
        Ok(params) if ceiling.permits(&params) => {}
        _ => return false,
    }

    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed_hash)
        .is_ok()
}
