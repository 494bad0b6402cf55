use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use thiserror::Error;

/// Errors that can occur while hashing credentials
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Hashing error: {0}")]
    HashingError(String),
}

/// Capability for turning secrets into stored hashes and checking them later
pub trait CredentialVerifier: Send + Sync {
    /// Hash `secret` with a fresh salt
    fn hash(&self, secret: &str) -> Result<String, CredentialError>;

    /// Check `secret` against a hash previously produced by [`hash`](Self::hash)
    fn verify(&self, secret: &str, stored_hash: &str) -> bool;
}

/// Argon2id, salted per credential, stored in PHC string format
pub struct Argon2Verifier {
    params: Params,
}

impl Argon2Verifier {
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, CredentialError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| CredentialError::InvalidParams(e.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Verifier {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl CredentialVerifier for Argon2Verifier {
    fn hash(&self, secret: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CredentialError::HashingError(e.to_string()))
    }

    fn verify(&self, secret: &str, stored_hash: &str) -> bool {
        let parsed = match PasswordHash::new(stored_hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Stored credential hash is unreadable: {}", e);
                return false;
            }
        };

        self.argon2()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }
}
