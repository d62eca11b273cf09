use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password, UserId};

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  /// Display name
  pub name: String,
  /// User's email address
  pub email: String,
  /// User's password (plain text, will be hashed)
  pub password: String,
  /// Repeated password, must equal `password`
  pub password_confirmation: String,
}

/// Response after successful user registration
#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
  /// Identifier of the newly created user
  pub user_id: UserId,
  /// Display name
  pub name: String,
  /// Email exactly as submitted
  pub email: String,
  /// Timestamp when the account was created
  pub created_at: DateTime<Utc>,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
  auth_service: Arc<AuthService>,
}

impl RegisterUserUseCase {
  /// Creates a new instance of RegisterUserUseCase
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the user registration use case
  ///
  /// # Errors
  /// Returns `AuthError` if registration fails (password mismatch, email
  /// already registered, or an infrastructure failure)
  pub async fn execute(
    &self,
    command: RegisterUserCommand,
  ) -> Result<RegisterUserResponse, AuthError> {
    let password = Password::new(command.password);
    let password_confirmation = Password::new(command.password_confirmation);
    let email = Email::new(command.email);

    let user = self
      .auth_service
      .register(command.name, email, password, password_confirmation)
      .await?;

    Ok(RegisterUserResponse {
      user_id: user.id,
      name: user.name,
      email: user.email,
      created_at: user.created_at,
    })
  }
}
