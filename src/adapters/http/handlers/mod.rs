pub mod auth;
pub mod pages;
pub mod web_auth;

use actix_web::HttpResponse;

/// Liveness probe
pub async fn health_check() -> HttpResponse {
  HttpResponse::Ok().body("OK")
}
