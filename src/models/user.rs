// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Wire shape is camelCase (createdAt/updatedAt), matching the public API
// contract; columns stay snake_case.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: i64,
  pub username: String,
  pub email: String,
  pub password: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a user, as submitted by clients.
///
/// Used both for creation and for full-replace updates: an update always
/// overwrites all three fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
  pub username: String,
  pub email: String,
  pub password: String,
}
