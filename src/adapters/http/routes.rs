use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::application::auth::{LoginUserUseCase, RegisterUserUseCase};

use super::handlers::auth::{login_handler, register_handler};
use super::handlers::{pages, web_auth};
use super::templates::TemplateEngine;

/// Configure authentication routes
///
/// Mounts the JSON endpoints under the provided scope (e.g. /api/v1/auth).
///
/// # Routes
///
/// - POST /register - Register a new user account
/// - POST /login - Verify credentials and count the login
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use gatepass::application::auth::*;
/// # use gatepass::adapters::http::routes::configure_auth_routes;
///
/// # async fn example(
/// #   register_use_case: Arc<RegisterUserUseCase>,
/// #   login_use_case: Arc<LoginUserUseCase>,
/// # ) {
/// let app = App::new().service(
///   web::scope("/api/v1/auth").configure(|cfg| {
///     configure_auth_routes(cfg, register_use_case, login_use_case)
///   }),
/// );
/// # }
/// ```
pub fn configure_auth_routes(
  cfg: &mut web::ServiceConfig,
  register_use_case: Arc<RegisterUserUseCase>,
  login_use_case: Arc<LoginUserUseCase>,
) {
  cfg
    .app_data(web::Data::new(register_use_case))
    .app_data(web::Data::new(login_use_case))
    .route("/register", web::post().to(register_handler))
    .route("/login", web::post().to(login_handler));
}

/// Configure web UI routes
///
/// # Routes
///
/// - GET / - Redirect to /login
/// - GET, POST /login - Login page and form submission
/// - GET, POST /register - Registration page and form submission
/// - GET /welcome - Page shown after a successful login
pub fn configure_web_routes(
  cfg: &mut web::ServiceConfig,
  templates: TemplateEngine,
  register_use_case: Arc<RegisterUserUseCase>,
  login_use_case: Arc<LoginUserUseCase>,
) {
  cfg
    .app_data(web::Data::new(templates))
    .app_data(web::Data::new(register_use_case))
    .app_data(web::Data::new(login_use_case))
    .route(
      "/",
      web::get().to(|| async {
        HttpResponse::Found()
          .insert_header(("Location", "/login"))
          .finish()
      }),
    )
    .service(
      web::resource("/login")
        .route(web::get().to(pages::login_page))
        .route(web::post().to(web_auth::login_submit)),
    )
    .service(
      web::resource("/register")
        .route(web::get().to(pages::register_page))
        .route(web::post().to(web_auth::register_submit)),
    )
    .route("/welcome", web::get().to(pages::welcome_page));
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{App, http::StatusCode, test};
  use serde_json::{Value, json};

  use crate::adapters::http::handlers::health_check;
  use crate::adapters::http::middleware::RequestIdMiddleware;
  use crate::domain::auth::services::{AuthService, AuthServiceConfig};
  use crate::infrastructure::config::DatabaseConfig;
  use crate::infrastructure::persistence::sqlite::{self, MIGRATOR, SqliteUserRepository};
  use crate::infrastructure::security::{Argon2PasswordHasher, HashParams};

  async fn use_cases() -> (Arc<RegisterUserUseCase>, Arc<LoginUserUseCase>) {
    let pool = sqlite::connect(&DatabaseConfig {
      url: "sqlite::memory:".to_string(),
      max_connections: 1,
      connect_timeout_seconds: 5,
      acquire_timeout_seconds: 3,
    })
    .await
    .unwrap();
    MIGRATOR.run(&pool).await.unwrap();

    let hasher = Argon2PasswordHasher::with_params(HashParams {
      memory_kib: 8,
      iterations: 1,
      parallelism: 1,
    })
    .unwrap();

    let service = Arc::new(AuthService::new(
      Arc::new(SqliteUserRepository::new(pool)),
      Arc::new(hasher),
      AuthServiceConfig::default(),
    ));

    (
      Arc::new(RegisterUserUseCase::new(service.clone())),
      Arc::new(LoginUserUseCase::new(service)),
    )
  }

  macro_rules! test_app {
    () => {{
      let (register, login) = use_cases().await;
      let templates = TemplateEngine::new().unwrap();
      test::init_service(
        App::new()
          .wrap(RequestIdMiddleware::new())
          .route("/health", web::get().to(health_check))
          .service(web::scope("/api/v1/auth").configure({
            let register = register.clone();
            let login = login.clone();
            move |cfg| configure_auth_routes(cfg, register, login)
          }))
          .configure(move |cfg| configure_web_routes(cfg, templates, register, login)),
      )
      .await
    }};
  }

  fn register_form(email: &str, password: &str, repassword: &str) -> [(&'static str, String); 4] {
    [
      ("name", "Ann".to_string()),
      ("email", email.to_string()),
      ("password", password.to_string()),
      ("repassword", repassword.to_string()),
    ]
  }

  fn login_form(email: &str, password: &str) -> [(&'static str, String); 2] {
    [
      ("email", email.to_string()),
      ("password", password.to_string()),
    ]
  }

  async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
  }

  #[actix_web::test]
  async fn test_root_redirects_to_login() {
    let app = test_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get("Location").unwrap(), "/login");
    assert!(resp.headers().contains_key("x-request-id"));
  }

  #[actix_web::test]
  async fn test_pages_render() {
    let app = test_app!();

    for uri in ["/login", "/register", "/welcome"] {
      let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
      assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
    }
  }

  #[actix_web::test]
  async fn test_health_check() {
    let app = test_app!();

    let resp = test::call_service(
      &app,
      test::TestRequest::get().uri("/health").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "OK");
  }

  #[actix_web::test]
  async fn test_form_register_then_login() {
    let app = test_app!();

    let req = test::TestRequest::post()
      .uri("/register")
      .set_form(register_form("a@x.com", "pw1", "pw1"))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("Location").unwrap(), "/login");

    let req = test::TestRequest::post()
      .uri("/login")
      .set_form(login_form("a@x.com", "pw1"))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("Location").unwrap(), "/welcome");
  }

  #[actix_web::test]
  async fn test_form_register_password_mismatch() {
    let app = test_app!();

    let req = test::TestRequest::post()
      .uri("/register")
      .set_form(register_form("a@x.com", "pw1", "pw2"))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("Passwords do not match"));

    // Nothing was stored
    let req = test::TestRequest::post()
      .uri("/login")
      .set_form(login_form("a@x.com", "pw1"))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[actix_web::test]
  async fn test_form_register_duplicate_email() {
    let app = test_app!();

    for expected in [StatusCode::SEE_OTHER, StatusCode::CONFLICT] {
      let req = test::TestRequest::post()
        .uri("/register")
        .set_form(register_form("a@x.com", "pw1", "pw1"))
        .to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), expected);

      if expected == StatusCode::CONFLICT {
        assert!(body_text(resp).await.contains("Email already registered"));
      }
    }
  }

  #[actix_web::test]
  async fn test_form_login_failures() {
    let app = test_app!();

    let req = test::TestRequest::post()
      .uri("/register")
      .set_form(register_form("a@x.com", "pw1", "pw1"))
      .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
      .uri("/login")
      .set_form(login_form("nobody@x.com", "pw1"))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("User not found"));

    let req = test::TestRequest::post()
      .uri("/login")
      .set_form(login_form("a@x.com", "wrong"))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_text(resp).await;
    assert!(body.contains("Incorrect password"));
    assert!(body.contains("a@x.com"));
  }

  #[actix_web::test]
  async fn test_api_register_and_login_counts() {
    let app = test_app!();

    let req = test::TestRequest::post()
      .uri("/api/v1/auth/register")
      .set_json(json!({
        "name": "Ann",
        "email": "a@x.com",
        "password": "pw1",
        "password_confirmation": "pw1"
      }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["name"], "Ann");
    assert!(body.get("password_hash").is_none());

    for expected in 1..=2 {
      let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "a@x.com", "password": "pw1" }))
        .to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), StatusCode::OK);
      let body: Value = test::read_body_json(resp).await;
      assert_eq!(body["login_count"], expected);
    }
  }

  #[actix_web::test]
  async fn test_api_error_responses() {
    let app = test_app!();
    let register = json!({
      "name": "Ann",
      "email": "a@x.com",
      "password": "pw1",
      "password_confirmation": "pw1"
    });

    let req = test::TestRequest::post()
      .uri("/api/v1/auth/register")
      .set_json(&register)
      .to_request();
    assert_eq!(
      test::call_service(&app, req).await.status(),
      StatusCode::CREATED
    );

    let req = test::TestRequest::post()
      .uri("/api/v1/auth/register")
      .set_json(&register)
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "email_already_exists");

    let req = test::TestRequest::post()
      .uri("/api/v1/auth/login")
      .set_json(json!({ "email": "a@x.com", "password": "nope" }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials");

    let req = test::TestRequest::post()
      .uri("/api/v1/auth/login")
      .set_json(json!({ "email": "a@x.com", "password": "" }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[actix_web::test]
  async fn test_api_register_keeps_email_as_submitted() {
    let app = test_app!();

    for email in ["Ann@x.com", "ann@x.com", "ann"] {
      let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({
          "name": "Ann",
          "email": email,
          "password": "pw1",
          "password_confirmation": "pw1"
        }))
        .to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), StatusCode::CREATED, "register {}", email);
      let body: Value = test::read_body_json(resp).await;
      assert_eq!(body["email"], email);
    }
  }
}
