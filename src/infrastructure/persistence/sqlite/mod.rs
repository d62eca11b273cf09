pub mod user_repository;

pub use user_repository::SqliteUserRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::config::DatabaseConfig;

/// Schema migrations embedded from `./migrations`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a SQLite pool, creating the database file if needed
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
  let options = SqliteConnectOptions::from_str(&config.url)?
    .create_if_missing(true)
    .foreign_keys(true);

  let mut pool_options = SqlitePoolOptions::new()
    .max_connections(config.max_connections)
    .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds));

  // An in-memory database lives only as long as its connection
  if config.url.contains(":memory:") || config.url.contains("mode=memory") {
    pool_options = pool_options.idle_timeout(None).max_lifetime(None);
  }

  pool_options.connect_with(options).await
}
