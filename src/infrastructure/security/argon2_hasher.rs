use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::{AuthError, HashError};
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::{Password, PasswordHash};

/// Argon2 cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
  /// Memory cost in KiB
  pub memory_kib: u32,
  /// Number of passes
  pub iterations: u32,
  /// Degree of parallelism
  pub parallelism: u32,
}

impl Default for HashParams {
  /// 19 MiB, 2 passes, 1 lane
  fn default() -> Self {
    Self {
      memory_kib: 19456,
      iterations: 2,
      parallelism: 1,
    }
  }
}

/// Argon2id password hasher implementation
///
/// Hashing and verification are CPU and memory bound, so both run on
/// tokio's blocking pool rather than on the request's executor thread.
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  /// Creates a hasher with the default parameters
  pub fn new() -> Result<Self, AuthError> {
    Self::with_params(HashParams::default())
  }

  /// Creates a hasher with explicit cost parameters
  pub fn with_params(params: HashParams) -> Result<Self, AuthError> {
    let params = Params::new(
      params.memory_kib,
      params.iterations,
      params.parallelism,
      Some(32),
    )
    .map_err(|e| {
      AuthError::Hash(HashError::HashingFailed(format!(
        "Failed to create Argon2 params: {}",
        e
      )))
    })?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError> {
    let argon2 = self.argon2.clone();
    let password = password.clone();

    let hash = tokio::task::spawn_blocking(move || {
      let salt = SaltString::generate(&mut rand::rngs::OsRng);
      argon2
        .hash_password(password.as_str().as_bytes(), &salt)
        .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| HashError::HashingFailed(format!("Hashing task failed: {}", e)))?
    .map_err(|e| HashError::HashingFailed(e.to_string()))?;

    PasswordHash::from_hash(hash).map_err(|_| AuthError::Hash(HashError::InvalidFormat))
  }

  /// Uses the constant-time comparison built into `verify_password`
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError> {
    let argon2 = self.argon2.clone();
    let password = password.clone();
    let hashed_password = hashed_password.clone();

    tokio::task::spawn_blocking(move || {
      let parsed_hash = Argon2PasswordHash::new(hashed_password.as_str())
        .map_err(|e| HashError::VerificationFailed(format!("Invalid hash format: {}", e)))?;

      // Parameters are read from the stored hash, so hashes made under older
      // cost settings keep verifying
      match argon2.verify_password(password.as_str().as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(HashError::VerificationFailed(e.to_string())),
      }
    })
    .await
    .map_err(|e| HashError::VerificationFailed(format!("Verification task failed: {}", e)))?
    .map_err(AuthError::Hash)
  }
}
