// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::OrderInput;
use crate::state::AppState;

#[instrument(
    name = "handler::create_order",
    skip(app_state, payload),
    fields(user_id = %payload.user_id, reference = %payload.reference)
)]
pub async fn create_order(
  app_state: web::Data<AppState>,
  payload: web::Json<OrderInput>,
) -> Result<HttpResponse, AppError> {
  info!(
    "Creating order '{}' for user {}",
    payload.reference, payload.user_id
  );

  // A user_id referencing no user trips the foreign key and lands in the
  // 500 envelope, like any other repository failure.
  let order = app_state
    .orders
    .create(payload.into_inner())
    .await
    .map_err(|e| AppError::repo("Failed to create order", e))?;

  info!("Order created successfully: ID={}", order.id);
  Ok(HttpResponse::Created().json(json!({ "order": order })))
}

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders = app_state
    .orders
    .list()
    .await
    .map_err(|e| AppError::repo("Failed to fetch orders", e))?;

  info!("Successfully fetched {} orders.", orders.len());
  Ok(HttpResponse::Ok().json(json!({ "orders": orders })))
}

// One-to-many side of the user/order relationship. An unknown user id yields
// an empty list, not a 404: the operation is a filter, not a lookup.
#[instrument(name = "handler::list_user_orders", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn list_user_orders(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();

  let orders = app_state
    .orders
    .list_for_user(user_id)
    .await
    .map_err(|e| AppError::repo("Failed to fetch orders", e))?;

  info!("Fetched {} orders for user {}.", orders.len(), user_id);
  Ok(HttpResponse::Ok().json(json!({ "orders": orders })))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();

  let order_opt = app_state
    .orders
    .find_by_id(order_id)
    .await
    .map_err(|e| AppError::repo("Failed to fetch order", e))?;

  match order_opt {
    Some(order) => Ok(HttpResponse::Ok().json(json!({ "order": order }))),
    None => {
      warn!("Order with ID {} not found.", order_id);
      Err(AppError::NotFound("Order not found".to_string()))
    }
  }
}

#[instrument(
    name = "handler::update_order",
    skip(app_state, path, payload),
    fields(order_id = %path.as_ref())
)]
pub async fn update_order(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  payload: web::Json<OrderInput>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();

  let order_opt = app_state
    .orders
    .update(order_id, payload.into_inner())
    .await
    .map_err(|e| AppError::repo("Failed to update order", e))?;

  match order_opt {
    Some(order) => {
      info!("Order {} updated successfully.", order_id);
      Ok(HttpResponse::Ok().json(json!({ "order": order })))
    }
    None => {
      warn!("Update requested for missing order {}.", order_id);
      Err(AppError::NotFound("Order not found".to_string()))
    }
  }
}

#[instrument(name = "handler::delete_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn delete_order(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();

  let deleted = app_state
    .orders
    .delete(order_id)
    .await
    .map_err(|e| AppError::repo("Failed to delete order", e))?;

  if deleted {
    info!("Order {} deleted.", order_id);
    Ok(HttpResponse::Ok().json(json!({ "message": "Order deleted" })))
  } else {
    warn!("Delete requested for missing order {}.", order_id);
    Err(AppError::NotFound("Order not found".to_string()))
  }
}
