// src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// total_amount is NUMERIC(10, 2) in the schema; Decimal round-trips it
// exactly and serializes as a string on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: i64,
  pub reference: String,
  pub total_amount: Decimal,
  pub user_id: i64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// The mutable fields of an order. `user_id` must reference an existing
/// user at write time; the store's foreign key enforces it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
  pub reference: String,
  pub total_amount: Decimal,
  pub user_id: i64,
}
