//! One-way password storage
//!
//! Registration only ever writes hashes, so the hasher exposes hashing alone.
//! Each call draws a fresh salt and returns a self-describing PHC string
//! (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`) that carries its own
//! parameters, which keeps old rows readable if the defaults change.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher as _, SaltString, rand_core::OsRng},
};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Turns a plaintext password into a storable hash
pub trait PasswordHasher: Send + Sync + Debug {
    fn hash(&self, password: &str) -> Result<String, DomainError>;
}

/// Argon2id with the crate's default cost parameters
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|phc| phc.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }
}

/// Check a plaintext against a stored PHC string
#[cfg(test)]
pub(crate) fn verify_hash(password: &str, phc: &str) -> bool {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    PasswordHash::new(phc)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_argon2id_phc() {
        let phc = Argon2Hasher::new().hash("pw1").unwrap();

        assert!(phc.starts_with("$argon2id$"));
        assert!(!phc.contains("pw1"));
        assert!(verify_hash("pw1", &phc));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = Argon2Hasher::new();

        let first = hasher.hash("hunter2").unwrap();
        let second = hasher.hash("hunter2").unwrap();

        assert_ne!(first, second);
        assert!(verify_hash("hunter2", &first));
        assert!(verify_hash("hunter2", &second));
    }

    #[test]
    fn test_wrong_password_or_garbage_hash_never_verifies() {
        let phc = Argon2Hasher::new().hash("pw1").unwrap();

        assert!(!verify_hash("pw2", &phc));
        assert!(!verify_hash("pw1", "plaintext-pw1"));
    }
}
