use async_trait::async_trait;

use super::entities::{NewUser, User};
use super::errors::AuthError;
use super::value_objects::{Email, Password, PasswordHash, UserId};

/// Repository trait for user persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Inserts a new user. A second user with the same email is rejected by
  /// the store with `RepositoryError::DuplicateKey`.
  async fn create(&self, user: NewUser) -> Result<User, AuthError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AuthError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError>;

  /// Adds one to the user's login counter in a single statement and
  /// returns the new value
  async fn increment_login_count(&self, id: UserId) -> Result<i64, AuthError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password with a fresh random salt
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError>;

  /// Verifies a plain text password against a hashed password
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError>;
}
