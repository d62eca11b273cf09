use actix_files as fs;
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gatepass::{
  adapters::http::{
    RequestIdMiddleware, TemplateEngine, configure_auth_routes, configure_web_routes,
    health_check,
  },
  application::auth::{LoginUserUseCase, RegisterUserUseCase},
  domain::auth::services::AuthService,
  infrastructure::{
    config::Config,
    persistence::sqlite::{self, MIGRATOR, SqliteUserRepository},
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gatepass=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Gatepass");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::other(format!("Configuration error: {}", e))
  })?;
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    sqlite::connect(&config.database),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to open database: {}", e);
    std::io::Error::other(format!("Database error: {}", e))
  })?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  MIGRATOR.run(&db_pool).await.map_err(|e| {
    tracing::error!("Failed to run database migrations: {}", e);
    std::io::Error::other(format!("Migration error: {}", e))
  })?;
  tracing::info!("Database migrations completed");

  // Repositories and security services
  let user_repo = Arc::new(SqliteUserRepository::new(db_pool));
  let password_hasher = Arc::new(
    Argon2PasswordHasher::with_params(config.security.hash_params()).map_err(|e| {
      tracing::error!("Invalid password hashing parameters: {}", e);
      std::io::Error::other(e.to_string())
    })?,
  );

  let auth_service = Arc::new(AuthService::new(
    user_repo,
    password_hasher,
    config.security.auth_service_config(),
  ));

  let register_use_case = Arc::new(RegisterUserUseCase::new(auth_service.clone()));
  let login_use_case = Arc::new(LoginUserUseCase::new(auth_service));

  let templates = TemplateEngine::new().map_err(|e| {
    tracing::error!("Failed to initialize template engine: {}", e);
    std::io::Error::other(e.to_string())
  })?;
  tracing::info!("Template engine initialized");

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      // Outermost, so the request span covers the access log line
      .wrap(RequestIdMiddleware::new())
      .configure(|cfg| {
        configure_web_routes(
          cfg,
          templates.clone(),
          register_use_case.clone(),
          login_use_case.clone(),
        )
      })
      .service(web::scope("/api/v1/auth").configure(|cfg| {
        configure_auth_routes(cfg, register_use_case.clone(), login_use_case.clone())
      }))
      .service(fs::Files::new("/static", "./static"))
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}
