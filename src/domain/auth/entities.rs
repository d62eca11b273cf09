use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{Email, PasswordHash, UserId};

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  /// Identifier assigned by the store
  pub id: UserId,
  /// Display name, free text
  pub name: String,
  /// User's email address (unique)
  pub email: String,
  /// Salted password hash in PHC format
  #[serde(skip_serializing)]
  pub password_hash: String,
  /// Number of successful logins
  pub login_count: i64,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
}

impl User {
  /// Creates a user from database fields (for reconstruction)
  pub fn from_db(
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    login_count: i64,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id: UserId::new(id),
      name,
      email,
      password_hash,
      login_count,
      created_at,
    }
  }

  /// Returns a copy carrying the given login count
  pub fn with_login_count(self, login_count: i64) -> Self {
    Self {
      login_count,
      ..self
    }
  }
}

/// Payload for inserting a user; the store assigns the id and counters
#[derive(Debug, Clone)]
pub struct NewUser {
  pub name: String,
  pub email: Email,
  pub password_hash: PasswordHash,
  pub created_at: DateTime<Utc>,
}

impl NewUser {
  pub fn new(name: String, email: Email, password_hash: PasswordHash) -> Self {
    Self {
      name,
      email,
      password_hash,
      created_at: Utc::now(),
    }
  }
}
