use actix_web::{HttpResponse, http::StatusCode, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::adapters::http::errors::form_message;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::auth::{
  LoginUserCommand, LoginUserUseCase, RegisterUserCommand, RegisterUserUseCase,
};
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::value_objects::FailureReason;

#[derive(Deserialize)]
pub struct LoginFormData {
  email: String,
  password: String,
}

#[derive(Deserialize)]
pub struct RegisterFormData {
  #[serde(default)]
  name: String,
  email: String,
  password: String,
  repassword: String,
}

/// Status used when a form is re-rendered with an error
fn form_status(error: &AuthError) -> StatusCode {
  match error.reason() {
    FailureReason::Validation => StatusCode::BAD_REQUEST,
    FailureReason::DuplicateEmail => StatusCode::CONFLICT,
    FailureReason::NotFound => StatusCode::NOT_FOUND,
    FailureReason::InvalidCredentials => StatusCode::UNAUTHORIZED,
    FailureReason::Internal => StatusCode::INTERNAL_SERVER_ERROR,
  }
}

fn see_other(location: &str) -> HttpResponse {
  HttpResponse::SeeOther()
    .insert_header(("Location", location))
    .finish()
}

/// Handle login form submission
pub async fn login_submit(
  form: web::Form<LoginFormData>,
  use_case: web::Data<Arc<LoginUserUseCase>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let form = form.into_inner();
  let email = form.email.clone();

  let command = LoginUserCommand {
    email: form.email,
    password: form.password,
  };

  match use_case.execute(command).await {
    Ok(response) => {
      tracing::info!(
        "Login successful for user_id={} (login_count={})",
        response.user_id,
        response.login_count
      );
      Ok(see_other("/welcome"))
    }
    Err(e) => {
      tracing::info!("Login rejected: {}", e.reason());

      let mut context = tera::Context::new();
      context.insert("title", "Login");
      context.insert("error", &form_message(&e));
      context.insert("email", &email);

      let html = templates
        .render("pages/login.html.tera", &context)
        .map_err(actix_web::error::ErrorInternalServerError)?;

      Ok(
        HttpResponse::build(form_status(&e))
          .content_type("text/html")
          .body(html),
      )
    }
  }
}

/// Handle registration form submission
pub async fn register_submit(
  form: web::Form<RegisterFormData>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let form = form.into_inner();
  let name = form.name.clone();
  let email = form.email.clone();

  let command = RegisterUserCommand {
    name: form.name,
    email: form.email,
    password: form.password,
    password_confirmation: form.repassword,
  };

  match use_case.execute(command).await {
    Ok(response) => {
      tracing::info!("Registered user_id={}", response.user_id);
      Ok(see_other("/login"))
    }
    Err(e) => {
      tracing::info!("Registration rejected: {}", e.reason());

      let mut context = tera::Context::new();
      context.insert("title", "Register");
      context.insert("error", &form_message(&e));
      context.insert("name", &name);
      context.insert("email", &email);

      let html = templates
        .render("pages/register.html.tera", &context)
        .map_err(actix_web::error::ErrorInternalServerError)?;

      Ok(
        HttpResponse::build(form_status(&e))
          .content_type("text/html")
          .body(html),
      )
    }
  }
}
