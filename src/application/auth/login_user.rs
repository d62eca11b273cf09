use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password, UserId};

/// Command for logging in a user
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
  /// User's email address
  pub email: String,
  /// User's password (plain text)
  pub password: String,
}

/// Response after successful user login
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
  pub user_id: UserId,
  pub name: String,
  pub email: String,
  /// Successful logins including this one
  pub login_count: i64,
}

/// Use case for logging in a user
pub struct LoginUserUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginUserUseCase {
  /// Creates a new instance of LoginUserUseCase
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the user login use case
  ///
  /// # Errors
  /// Returns `AuthError::UserNotFound` or `AuthError::InvalidCredentials` for
  /// bad credentials, `AuthError::Hash` if the stored hash is unusable
  pub async fn execute(&self, command: LoginUserCommand) -> Result<LoginUserResponse, AuthError> {
    let email = Email::new(command.email);
    let password = Password::new(command.password);

    let user = self.auth_service.login(email, password).await?;

    Ok(LoginUserResponse {
      user_id: user.id,
      name: user.name,
      email: user.email,
      login_count: user.login_count,
    })
  }
}
