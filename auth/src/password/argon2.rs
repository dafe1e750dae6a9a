use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as _;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way credential hasher backed by Argon2id.
///
/// Every call to [`hash`](Self::hash) draws a fresh salt, so two hashes of the
/// same plaintext never compare equal as strings. Use [`verify`](Self::verify)
/// to check a candidate password.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Derive a storable hash from a plaintext password.
    ///
    /// # Returns
    /// PHC string (algorithm, parameters, salt and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input or parameters
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored PHC hash.
    ///
    /// A mismatch is `Ok(false)`, not an error.
    ///
    /// # Errors
    /// * `CorruptHash` - The stored value is not a parsable PHC string, lacks
    ///   its salt or digest, or names an algorithm other than Argon2
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::CorruptHash(e.to_string()))?;

        // Without these argon2 reports a plain mismatch.
        if parsed_hash.salt.is_none() {
            return Err(PasswordError::CorruptHash("missing salt".to_string()));
        }
        if parsed_hash.hash.is_none() {
            return Err(PasswordError::CorruptHash("missing digest".to_string()));
        }

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::CorruptHash(e.to_string())),
        }
    }
}
