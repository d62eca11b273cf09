use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::auth::value_objects::UserId;

/// Request for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  /// Display name, free text
  #[serde(default)]
  pub name: String,

  /// Login identifier, stored as submitted
  pub email: String,

  /// User's password
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,

  /// Repeated password, compared by the service
  pub password_confirmation: String,
}

/// Request for user login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  /// Login identifier, looked up as submitted
  pub email: String,

  /// User's password
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Response after successful user registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
  /// Identifier of the newly created user
  pub user_id: UserId,

  pub name: String,

  /// Email exactly as submitted
  pub email: String,

  /// Account creation timestamp
  pub created_at: DateTime<Utc>,
}

/// Response after successful user login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
  pub user_id: UserId,

  pub name: String,

  pub email: String,

  /// Successful logins, this one included
  pub login_count: i64,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
