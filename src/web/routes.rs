// src/web/routes.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::web::handlers::{order_handlers, user_handlers};

// Catch-all for unmatched routes; wired as the app's default service.
pub async fn not_found() -> HttpResponse {
  HttpResponse::NotFound().json(json!({ "error": "Route not found" }))
}

// This function is called in `main.rs` (and by the test harness) to
// configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      // User Routes. `/create` rather than `/users` for user creation is a
      // quirk of the public contract, kept as-is.
      .route("/create", web::post().to(user_handlers::create_user))
      .route("/users", web::get().to(user_handlers::list_users))
      .route("/users/{id}", web::get().to(user_handlers::get_user))
      .route("/users/{id}", web::put().to(user_handlers::update_user))
      .route("/users/{id}", web::delete().to(user_handlers::delete_user))
      .route(
        "/users/{id}/orders",
        web::get().to(order_handlers::list_user_orders),
      )
      // Order Routes
      .service(
        web::scope("/orders")
          .route("", web::post().to(order_handlers::create_order))
          .route("", web::get().to(order_handlers::list_orders))
          .route("/{id}", web::get().to(order_handlers::get_order))
          .route("/{id}", web::put().to(order_handlers::update_order))
          .route("/{id}", web::delete().to(order_handlers::delete_order)),
      ),
  );
}
