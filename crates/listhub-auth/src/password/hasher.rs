//! Argon2id password hashing and verification.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Error as HashError, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};

use listhub_core::error::AppError;

/// One-way password hashing with a random per-password salt.
///
/// Hashes are PHC strings (`$argon2id$v=19$...`), so the parameters and salt
/// travel with the hash and verification needs nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash `password` with a fresh salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Check `password` against a stored PHC hash.
    ///
    /// A mismatch is `Ok(false)`; a malformed stored hash is an error.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| AppError::internal(format!("Stored password hash is malformed: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}
