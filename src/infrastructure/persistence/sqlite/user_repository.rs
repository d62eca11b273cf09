use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::auth::{
  entities::{NewUser, User},
  errors::{AuthError, RepositoryError},
  ports::UserRepository,
  value_objects::{Email, UserId},
};

/// SQLite implementation of the UserRepository trait
pub struct SqliteUserRepository {
  pool: SqlitePool,
}

impl SqliteUserRepository {
  /// Creates a new instance of SqliteUserRepository
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }
}

/// Database row structure for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: i64,
  name: String,
  email: String,
  password_hash: String,
  login_count: i64,
  created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User::from_db(
      row.id,
      row.name,
      row.email,
      row.password_hash,
      row.login_count,
      row.created_at,
    )
  }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
  async fn create(&self, user: NewUser) -> Result<User, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            INSERT INTO users (name, email, password_hash, login_count, created_at)
            VALUES (?1, ?2, ?3, 0, ?4)
            RETURNING id, name, email, password_hash, login_count, created_at
            "#,
    )
    .bind(&user.name)
    .bind(user.email.as_str())
    .bind(user.password_hash.as_str())
    .bind(user.created_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, name, email, password_hash, login_count, created_at
            FROM users
            WHERE id = ?1
            "#,
    )
    .bind(i64::from(id))
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Into::into))
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, name, email, password_hash, login_count, created_at
            FROM users
            WHERE email = ?1
            "#,
    )
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Into::into))
  }

  async fn increment_login_count(&self, id: UserId) -> Result<i64, AuthError> {
    let count = sqlx::query_scalar::<_, i64>(
      r#"
            UPDATE users
            SET login_count = login_count + 1
            WHERE id = ?1
            RETURNING login_count
            "#,
    )
    .bind(i64::from(id))
    .fetch_optional(&self.pool)
    .await?;

    count.ok_or(AuthError::Repository(RepositoryError::NotFound))
  }
}
