//! Credential records
//!
//! A record's password is either plaintext or a secured hash; the variant
//! makes the state explicit so a hash is never hashed a second time.

use std::fmt;

/// Sample users shipped with the demo binary
const SAMPLE_CREDENTIALS: [(&str, &str); 5] = [
    ("mashrur", "password1"),
    ("jack", "password2"),
    ("arya", "password3"),
    ("jonshow", "password4"),
    ("heisenberg", "password5"),
];

/// Stored password state
#[derive(Clone, PartialEq, Eq)]
pub enum Password {
    Plaintext(String),
    Secured(String),
}

impl Password {
    pub fn is_secured(&self) -> bool {
        matches!(self, Password::Secured(_))
    }

    /// The PHC hash string, if the password has been secured
    pub fn hash(&self) -> Option<&str> {
        match self {
            Password::Secured(hash) => Some(hash.as_str()),
            Password::Plaintext(_) => None,
        }
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Password::Plaintext(_) => f.write_str("Plaintext(<redacted>)"),
            Password::Secured(hash) => f.debug_tuple("Secured").field(hash).finish(),
        }
    }
}

/// A username paired with a plaintext or secured password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password: Password,
}

impl UserRecord {
    /// Creates a record holding a plaintext password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Password::Plaintext(password.into()),
        }
    }

    pub fn is_secured(&self) -> bool {
        self.password.is_secured()
    }
}

/// Builds the sample user list with plaintext passwords.
pub fn sample_users() -> Vec<UserRecord> {
    SAMPLE_CREDENTIALS
        .iter()
        .map(|(username, password)| UserRecord::new(*username, *password))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_plaintext() {
        let record = UserRecord::new("jack", "password2");
        assert_eq!(record.username, "jack");
        assert!(!record.is_secured());
        assert_eq!(record.password.hash(), None);
    }

    #[test]
    fn test_debug_redacts_plaintext() {
        let record = UserRecord::new("jack", "password2");
        let rendered = format!("{:?}", record);
        assert!(!rendered.contains("password2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_sample_users() {
        let users = sample_users();
        assert_eq!(users.len(), 5);
        assert_eq!(users[0], UserRecord::new("mashrur", "password1"));
        assert_eq!(users[4].username, "heisenberg");
        assert!(users.iter().all(|u| !u.is_secured()));
    }
}
