use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id).
/// Verification goes through the Argon2 verifier, which compares digests in
/// constant time.
pub struct PasswordHasher {
    dummy_hash: Result<String, PasswordError>,
}

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// Hashes the throwaway credential used by [`verify_dummy`](Self::verify_dummy)
    /// up front, so no login request pays for it.
    pub fn new() -> Self {
        Self {
            dummy_hash: hash_password("marketplace-dummy-credential"),
        }
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        hash_password(password)
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `InvalidHash` - Stored hash is not a parseable PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Run a full verification against a throwaway hash and discard the result.
    ///
    /// Callers use this when there is no stored hash to check (unknown account)
    /// so the request still pays for exactly one Argon2 comparison.
    ///
    /// # Errors
    /// * `HashingFailed` - The throwaway hash could not be computed at construction
    pub fn verify_dummy(&self, password: &str) -> Result<(), PasswordError> {
        let dummy_hash = self.dummy_hash.as_ref().map_err(Clone::clone)?;
        self.verify(password, dummy_hash)?;
        Ok(())
    }
}

fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
