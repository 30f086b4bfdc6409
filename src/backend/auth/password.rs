/**
 * Password Hashing
 *
 * One-way salted hashing of plaintext passwords with bcrypt.
 *
 * The bcrypt output carries its own scheme tag, cost and salt
 * (`$2b$12$<salt><digest>`), so raising the configured cost only affects new
 * hashes: existing hashes keep verifying with the cost they were created with.
 *
 * Hashing is CPU-bound and slow on purpose. Async callers should run it on
 * the blocking pool (`tokio::task::spawn_blocking`).
 */

use bcrypt::{hash, verify, DEFAULT_COST};
use thiserror::Error;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;
/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Errors raised while producing a hash
#[derive(Debug, Error)]
pub enum HashError {
    #[error("bcrypt cost {0} is outside 4..=31")]
    InvalidCost(u32),

    #[error("failed to hash password: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// Credential hasher with a fixed work factor
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    /// Hash of a throwaway password, verified against when the username is
    /// unknown so that both login failure paths cost one bcrypt run.
    dummy_hash: String,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}

impl PasswordHasher {
    /// Create a hasher that produces hashes with the given cost.
    pub fn new(cost: u32) -> Result<Self, HashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashError::InvalidCost(cost));
        }
        let dummy_hash = hash("reportdesk-timing-equalizer", cost)?;
        Ok(Self { cost, dummy_hash })
    }

    /// Create a hasher with bcrypt's default cost.
    pub fn with_default_cost() -> Result<Self, HashError> {
        Self::new(DEFAULT_COST)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt.
    pub fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        Ok(hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// Uses the cost and salt embedded in `password_hash`; the digest
    /// comparison is constant-time. A malformed hash verifies as `false`.
    pub fn verify(&self, plaintext: &str, password_hash: &str) -> bool {
        match verify(plaintext, password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                false
            }
        }
    }

    /// Spend one verification worth of work and report failure.
    ///
    /// Used on the unknown-username login path.
    pub fn verify_unknown(&self, plaintext: &str) -> bool {
        let _ = verify(plaintext, &self.dummy_hash);
        false
    }
}
