use std::sync::Arc;

use super::entities::{NewUser, User};
use super::errors::{AuthError, HashError, RepositoryError, ValidationError};
use super::ports::{PasswordHasher, UserRepository};
use super::value_objects::{Email, Password, PasswordHash};

/// Tunables for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
  /// Minimum password length in characters
  pub password_min_length: usize,
}

impl Default for AuthServiceConfig {
  fn default() -> Self {
    Self {
      password_min_length: 1,
    }
  }
}

/// Authentication service implementing registration, credential checks and
/// login accounting
pub struct AuthService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  config: AuthServiceConfig,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    config: AuthServiceConfig,
  ) -> Self {
    Self {
      user_repo,
      password_hasher,
      config,
    }
  }

  /// Registers a new user
  ///
  /// # Errors
  /// - `AuthError::Validation` if the confirmation differs or the password is
  ///   below the configured minimum; the store is not touched
  /// - `AuthError::EmailAlreadyExists` if the store rejects the email as a duplicate
  /// - `AuthError::Hash` / `AuthError::Repository` on infrastructure failure
  pub async fn register(
    &self,
    name: String,
    email: Email,
    password: Password,
    password_confirmation: Password,
  ) -> Result<User, AuthError> {
    if password != password_confirmation {
      return Err(ValidationError::PasswordMismatch.into());
    }

    if password.char_count() < self.config.password_min_length {
      return Err(
        ValidationError::PasswordTooShort {
          min: self.config.password_min_length,
        }
        .into(),
      );
    }

    let password_hash = self.password_hasher.hash(&password).await.map_err(|e| {
      tracing::error!(error = %e, "Password hashing failed during registration");
      e
    })?;

    // Uniqueness is enforced by the UNIQUE constraint on users.email
    match self
      .user_repo
      .create(NewUser::new(name, email, password_hash))
      .await
    {
      Ok(user) => {
        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
      }
      Err(AuthError::Repository(RepositoryError::DuplicateKey(_))) => {
        Err(AuthError::EmailAlreadyExists)
      }
      Err(e) => {
        tracing::error!(error = %e, "Failed to insert user");
        Err(e)
      }
    }
  }

  /// Verifies credentials and records the login
  ///
  /// Returns the user with the counter as it stands after this login. The
  /// counter update is best-effort: if it fails the login still succeeds and
  /// the stored counter is returned.
  ///
  /// # Errors
  /// - `AuthError::UserNotFound` if no user has this email, or the lookup failed
  /// - `AuthError::InvalidCredentials` if the password does not match
  /// - `AuthError::Hash` if the stored hash is unusable
  pub async fn login(&self, email: Email, password: Password) -> Result<User, AuthError> {
    let user = match self.user_repo.find_by_email(&email).await {
      Ok(Some(user)) => user,
      Ok(None) => return Err(AuthError::UserNotFound),
      Err(e) => {
        // Store failures are reported to the caller as a missing user
        tracing::error!(error = %e, "Failed to fetch user for login");
        return Err(AuthError::UserNotFound);
      }
    };

    let stored_hash = PasswordHash::from_hash(user.password_hash.as_str()).map_err(|_| {
      tracing::error!(user_id = %user.id, "Stored password hash is not a valid PHC string");
      AuthError::Hash(HashError::InvalidFormat)
    })?;

    if !self.password_hasher.verify(&password, &stored_hash).await? {
      tracing::debug!(user_id = %user.id, "Password mismatch");
      return Err(AuthError::InvalidCredentials);
    }

    let login_count = match self.user_repo.increment_login_count(user.id).await {
      Ok(count) => count,
      Err(e) => {
        tracing::warn!(user_id = %user.id, error = %e, "Failed to update login count");
        user.login_count
      }
    };

    tracing::info!(user_id = %user.id, login_count, "User logged in");

    Ok(user.with_login_count(login_count))
  }
}
