// src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::UserInput;
use crate::state::AppState;

// Handlers are thin adapters: parse the request, call the repository, shape
// the JSON response. Failures surface through AppError's ResponseError impl.

#[instrument(
    name = "handler::create_user",
    skip(app_state, payload),
    fields(email = %payload.email)
)]
pub async fn create_user(
  app_state: web::Data<AppState>,
  payload: web::Json<UserInput>,
) -> Result<HttpResponse, AppError> {
  info!("Creating user with email: {}", payload.email);

  // Constraint violations (duplicate email) are not special-cased here;
  // every repository failure travels in the 500 envelope.
  let user = app_state
    .users
    .create(payload.into_inner())
    .await
    .map_err(|e| AppError::repo("Failed to create user", e))?;

  info!("User created successfully: ID={}, Email={}", user.id, user.email);
  Ok(HttpResponse::Created().json(json!({ "user": user })))
}

#[instrument(name = "handler::list_users", skip(app_state))]
pub async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let users = app_state
    .users
    .list()
    .await
    .map_err(|e| AppError::repo("Failed to fetch users", e))?;

  info!("Successfully fetched {} users.", users.len());
  Ok(HttpResponse::Ok().json(json!({ "users": users })))
}

#[instrument(name = "handler::get_user", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn get_user(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();

  let user_opt = app_state
    .users
    .find_by_id(user_id)
    .await
    .map_err(|e| AppError::repo("Failed to fetch user", e))?;

  match user_opt {
    Some(user) => Ok(HttpResponse::Ok().json(json!({ "user": user }))),
    None => {
      warn!("User with ID {} not found.", user_id);
      Err(AppError::NotFound("User not found".to_string()))
    }
  }
}

#[instrument(
    name = "handler::update_user",
    skip(app_state, path, payload),
    fields(user_id = %path.as_ref(), email = %payload.email)
)]
pub async fn update_user(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  payload: web::Json<UserInput>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();

  // Full replace: all three mutable fields are overwritten.
  let user_opt = app_state
    .users
    .update(user_id, payload.into_inner())
    .await
    .map_err(|e| AppError::repo("Failed to update user", e))?;

  match user_opt {
    Some(user) => {
      info!("User {} updated successfully.", user_id);
      Ok(HttpResponse::Ok().json(json!({ "user": user })))
    }
    None => {
      warn!("Update requested for missing user {}.", user_id);
      Err(AppError::NotFound("User not found".to_string()))
    }
  }
}

#[instrument(name = "handler::delete_user", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn delete_user(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();

  // The store cascades the delete to the user's orders.
  let deleted = app_state
    .users
    .delete(user_id)
    .await
    .map_err(|e| AppError::repo("Failed to delete user", e))?;

  if deleted {
    info!("User {} deleted.", user_id);
    Ok(HttpResponse::Ok().json(json!({ "message": "User deleted" })))
  } else {
    warn!("Delete requested for missing user {}.", user_id);
    Err(AppError::NotFound("User not found".to_string()))
  }
}
