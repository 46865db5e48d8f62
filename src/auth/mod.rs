//! Authentication system
//!
//! Handles password hashing, credential records, input validation and
//! authentication against an in-memory user list.

pub mod credentials;
pub mod hashing;
pub mod store;
pub mod validator;

pub use credentials::{Password, UserRecord, sample_users};
pub use store::CredentialStore;
pub use validator::{ensure_unique_usernames, find_duplicate_usernames, validate_records};
