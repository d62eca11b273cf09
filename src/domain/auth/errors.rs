use thiserror::Error;

use super::value_objects::{FailureReason, ValueObjectError};

/// Main authentication error type
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Invalid credentials provided")]
  InvalidCredentials,

  #[error("Email already exists")]
  EmailAlreadyExists,

  #[error("User not found")]
  UserNotFound,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),

  #[error("Value object error: {0}")]
  ValueObject(#[from] ValueObjectError),
}

impl AuthError {
  /// Category of this failure as seen by callers
  pub fn reason(&self) -> FailureReason {
    match self {
      AuthError::InvalidCredentials => FailureReason::InvalidCredentials,
      AuthError::EmailAlreadyExists => FailureReason::DuplicateEmail,
      AuthError::UserNotFound => FailureReason::NotFound,
      AuthError::Validation(_) => FailureReason::Validation,
      AuthError::ValueObject(ValueObjectError::InvalidPasswordHash) => FailureReason::Internal,
      AuthError::Repository(RepositoryError::DuplicateKey(_)) => FailureReason::DuplicateEmail,
      AuthError::Repository(_) | AuthError::Hash(_) => FailureReason::Internal,
    }
  }
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Record not found")]
  NotFound,

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),

  #[error("Failed to verify password: {0}")]
  VerificationFailed(String),

  #[error("Invalid hash format")]
  InvalidFormat,
}

/// Input validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("Passwords do not match")]
  PasswordMismatch,

  #[error("Password too short, minimum {min} characters required")]
  PasswordTooShort { min: usize },
}

// Automatic conversions from external error types

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AuthError {
  fn from(error: sqlx::Error) -> Self {
    AuthError::Repository(RepositoryError::from(error))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reason_mapping() {
    assert_eq!(
      AuthError::from(ValidationError::PasswordMismatch).reason(),
      FailureReason::Validation
    );
    assert_eq!(
      AuthError::EmailAlreadyExists.reason(),
      FailureReason::DuplicateEmail
    );
    assert_eq!(
      AuthError::from(RepositoryError::DuplicateKey("users.email".into())).reason(),
      FailureReason::DuplicateEmail
    );
    assert_eq!(AuthError::UserNotFound.reason(), FailureReason::NotFound);
    assert_eq!(
      AuthError::InvalidCredentials.reason(),
      FailureReason::InvalidCredentials
    );
    assert_eq!(
      AuthError::from(HashError::HashingFailed("oom".into())).reason(),
      FailureReason::Internal
    );
    assert_eq!(
      AuthError::from(RepositoryError::QueryFailed("disk I/O error".into())).reason(),
      FailureReason::Internal
    );
  }

  #[test]
  fn test_password_mismatch_message() {
    assert_eq!(
      ValidationError::PasswordMismatch.to_string(),
      "Passwords do not match"
    );
  }

  #[test]
  fn test_row_not_found_maps_to_not_found() {
    assert!(matches!(
      RepositoryError::from(sqlx::Error::RowNotFound),
      RepositoryError::NotFound
    ));
  }
}
