use actix_web::{HttpResponse, web};

use crate::adapters::http::templates::TemplateEngine;

fn render_page(
  templates: &TemplateEngine,
  template: &str,
  title: &str,
) -> Result<HttpResponse, actix_web::Error> {
  let mut context = tera::Context::new();
  context.insert("title", title);

  let html = templates
    .render(template, &context)
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Render login page
pub async fn login_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  render_page(&templates, "pages/login.html.tera", "Login")
}

/// Render registration page
pub async fn register_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  render_page(&templates, "pages/register.html.tera", "Register")
}

/// Render the page shown after a successful login
pub async fn welcome_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  render_page(&templates, "pages/welcome.html.tera", "Welcome")
}
