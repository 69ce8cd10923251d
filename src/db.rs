// src/db.rs

//! Store lifecycle: the PostgreSQL pool behind the repositories.
//!
//! The handle is constructed once in `main` and passed into repositories;
//! there is no process-wide connection state.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::AppConfig;

const SCHEMA_DDL: &str = include_str!("../schema.sql");

#[derive(Clone)]
pub struct Store {
  pool: PgPool,
}

impl Store {
  /// Connects to the database and verifies the connection with a ping.
  ///
  /// Startup must treat a failure here as fatal: the service may not begin
  /// serving requests without a working store.
  pub async fn connect(config: &AppConfig) -> Result<Self, sqlx::Error> {
    let pool = PgPoolOptions::new()
      .max_connections(config.db_max_connections)
      .connect(&config.database_url)
      .await?;

    // A pooled connect can succeed lazily; force one round trip.
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(Self { pool })
  }

  /// Applies `schema.sql` (idempotent DDL). Opt-in via SCHEMA_SYNC; the
  /// schema is otherwise expected to pre-exist.
  pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_DDL).execute(&self.pool).await?;
    info!("Database schema ensured.");
    Ok(())
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }

  /// Teardown hook: drains and closes the pool.
  pub async fn close(&self) {
    self.pool.close().await;
    info!("Database pool closed.");
  }
}
