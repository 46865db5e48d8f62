pub mod auth;
pub mod config;
pub mod error;
pub mod utils;

pub use auth::{CredentialStore, Password, UserRecord};
pub use error::{AuthFailure, StoreError};
