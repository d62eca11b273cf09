use argon2::PasswordHash as Argon2PasswordHash;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use zeroize::Zeroizing;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ValueObjectError {
  #[error("Invalid password hash format")]
  InvalidPasswordHash,
}

// ============================================================================
// Email Value Object
// ============================================================================

/// Login identifier, kept exactly as submitted.
///
/// No syntax check and no case folding: `Ann@x.com` and `ann@x.com` are
/// different accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
  pub fn new(email: impl Into<String>) -> Self {
    Self(email.into())
  }

  /// Returns the email as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Email {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

/// Plaintext password, wiped from memory on drop.
///
/// No policy is applied here; length rules live in the auth service so they
/// can come from configuration.
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
  pub fn new(password: impl Into<String>) -> Self {
    Self(Zeroizing::new(password.into()))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    self.0.as_str()
  }

  /// Length in characters, not bytes
  pub fn char_count(&self) -> usize {
    self.0.chars().count()
  }
}

impl PartialEq for Password {
  fn eq(&self, other: &Self) -> bool {
    self.as_str() == other.as_str()
  }
}

impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// PasswordHash Value Object (PHC string)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
  /// Creates a new PasswordHash from an existing hash string
  pub fn from_hash(hash: impl Into<String>) -> Result<Self, ValueObjectError> {
    let hash = hash.into();

    Argon2PasswordHash::new(&hash).map_err(|_| ValueObjectError::InvalidPasswordHash)?;

    Ok(Self(hash))
  }

  /// Returns the hash as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for PasswordHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ============================================================================
// UserId Value Object
// ============================================================================

/// Store-assigned row id of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
  pub fn new(id: i64) -> Self {
    Self(id)
  }

  pub fn into_inner(self) -> i64 {
    self.0
  }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<i64> for UserId {
  fn from(id: i64) -> Self {
    Self(id)
  }
}

impl From<UserId> for i64 {
  fn from(user_id: UserId) -> Self {
    user_id.0
  }
}

// ============================================================================
// FailureReason Enum
// ============================================================================

/// Outcome category reported to callers of the credential service.
///
/// Callers get one of these, never the underlying diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
  /// Malformed client input, e.g. the confirmation does not match
  Validation,

  /// Another account already uses the email
  DuplicateEmail,

  /// No account with the email, or the lookup itself failed
  NotFound,

  /// Password does not match the stored hash
  InvalidCredentials,

  /// Hashing or storage failure unrelated to the input
  Internal,
}

impl fmt::Display for FailureReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Validation => write!(f, "Validation error"),
      Self::DuplicateEmail => write!(f, "Email already registered"),
      Self::NotFound => write!(f, "User not found"),
      Self::InvalidCredentials => write!(f, "Invalid credentials"),
      Self::Internal => write!(f, "Internal error"),
    }
  }
}
