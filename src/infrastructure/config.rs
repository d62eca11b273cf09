use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::domain::auth::services::AuthServiceConfig;
use crate::infrastructure::security::HashParams;

// Default timeout functions
fn default_db_connect_timeout() -> u64 {
  5
}

fn default_db_acquire_timeout() -> u64 {
  3
}

fn default_password_min_length() -> usize {
  1
}

fn default_hash_memory_kib() -> u32 {
  19456
}

fn default_hash_iterations() -> u32 {
  2
}

fn default_hash_parallelism() -> u32 {
  1
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub database: DatabaseConfig,
  #[serde(default)]
  pub security: SecurityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  /// SQLite connection URL, e.g. `sqlite://gatepass.db` or `sqlite::memory:`
  pub url: String,
  pub max_connections: u32,
  #[serde(default = "default_db_connect_timeout")]
  pub connect_timeout_seconds: u64,
  #[serde(default = "default_db_acquire_timeout")]
  pub acquire_timeout_seconds: u64,
}

/// Security configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
  #[serde(default = "default_password_min_length")]
  pub password_min_length: usize,
  /// Argon2 memory cost in KiB
  #[serde(default = "default_hash_memory_kib")]
  pub hash_memory_kib: u32,
  /// Argon2 time cost (passes over memory)
  #[serde(default = "default_hash_iterations")]
  pub hash_iterations: u32,
  /// Argon2 lanes
  #[serde(default = "default_hash_parallelism")]
  pub hash_parallelism: u32,
}

impl Default for SecurityConfig {
  fn default() -> Self {
    Self {
      password_min_length: default_password_min_length(),
      hash_memory_kib: default_hash_memory_kib(),
      hash_iterations: default_hash_iterations(),
      hash_parallelism: default_hash_parallelism(),
    }
  }
}

impl SecurityConfig {
  pub fn hash_params(&self) -> HashParams {
    HashParams {
      memory_kib: self.hash_memory_kib,
      iterations: self.hash_iterations,
      parallelism: self.hash_parallelism,
    }
  }

  pub fn auth_service_config(&self) -> AuthServiceConfig {
    AuthServiceConfig {
      password_min_length: self.password_min_length,
    }
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists, RUN_MODE defaults to "development")
  /// 4. Environment variables with GATEPASS_ prefix
  ///
  /// Environment variables are separated by double underscores:
  /// - `GATEPASS_SERVER__PORT=3003`
  /// - `GATEPASS_DATABASE__URL=sqlite://gatepass.db`
  /// - `GATEPASS_SECURITY__PASSWORD_MIN_LENGTH=8`
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("GATEPASS")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_structure() {
    let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 3003

            [database]
            url = "sqlite://gatepass.db"
            max_connections = 5

            [security]
            password_min_length = 8
            hash_iterations = 3
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3003);
    assert_eq!(config.database.url, "sqlite://gatepass.db");
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.database.connect_timeout_seconds, 5); // default
    assert_eq!(config.database.acquire_timeout_seconds, 3); // default
    assert_eq!(config.security.password_min_length, 8);
    assert_eq!(config.security.hash_iterations, 3);
    assert_eq!(config.security.hash_memory_kib, 19456); // default
    assert_eq!(config.security.hash_parallelism, 1); // default
  }

  #[test]
  fn test_security_section_optional() {
    let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 3003

            [database]
            url = "sqlite::memory:"
            max_connections = 1
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.security.auth_service_config().password_min_length, 1);
    let params = config.security.hash_params();
    assert_eq!(params.memory_kib, 19456);
    assert_eq!(params.iterations, 2);
  }

  #[test]
  fn test_shipped_default_config_parses() {
    let raw = std::fs::read_to_string("config/default.toml").expect("config/default.toml");
    let config: Config = toml::from_str(&raw).expect("Failed to parse default config");

    assert_eq!(config.server.port, 3003);
    assert!(config.database.url.starts_with("sqlite:"));
  }
}
