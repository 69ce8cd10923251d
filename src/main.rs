// src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use orders_api::config::AppConfig;
use orders_api::db::Store;
use orders_api::repo::{PgOrderRepository, PgUserRepository};
use orders_api::state::AppState;
use orders_api::web;

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting orders API server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      std::process::exit(1);
    }
  };

  // Initialize the store. A connection failure is fatal: the process must
  // not begin serving requests without a working database.
  let store = match Store::connect(&app_config).await {
    Ok(store) => {
      tracing::info!("Successfully connected to the database.");
      store
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      std::process::exit(1);
    }
  };

  // Apply schema if configured
  if app_config.schema_sync {
    if let Err(e) = store.ensure_schema().await {
      tracing::error!(error = %e, "Failed to apply database schema.");
      std::process::exit(1);
    }
  }

  // Create AppState with the repositories over the shared store
  let app_state = AppState {
    users: Arc::new(PgUserRepository::new(store.pool().clone())),
    orders: Arc::new(PgOrderRepository::new(store.pool().clone())),
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
      .default_service(actix_data::route().to(web::not_found))
  })
  .bind(&server_address)?
  .run()
  .await?;

  // Teardown: drain the pool once the server has stopped accepting work.
  store.close().await;
  Ok(())
}
