// src/repo/order_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::models::{Order, OrderInput};
use crate::repo::{RepoError, RepoResult};

/// Create/read/update/delete operations over orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
  /// Inserts a row with system-assigned id and timestamps. Fails with
  /// `RepoError::Constraint` when `user_id` references no user.
  async fn create(&self, input: OrderInput) -> RepoResult<Order>;

  /// Every order, ordered by id.
  async fn list(&self) -> RepoResult<Vec<Order>>;

  /// All orders owned by one user, ordered by id.
  async fn list_for_user(&self, user_id: i64) -> RepoResult<Vec<Order>>;

  /// Single-row lookup by primary key. `None` when no row matches.
  async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>>;

  /// Full replace of reference/total_amount/user_id; refreshes `updated_at`.
  /// `None` when no row matches.
  async fn update(&self, id: i64, input: OrderInput) -> RepoResult<Option<Order>>;

  /// Removes the row. `false` when no row matched.
  async fn delete(&self, id: i64) -> RepoResult<bool>;
}

const ORDER_COLUMNS: &str = "id, reference, total_amount, user_id, created_at, updated_at";

#[derive(Clone)]
pub struct PgOrderRepository {
  pool: PgPool,
}

impl PgOrderRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
  #[instrument(name = "repo::orders::create", skip(self, input), fields(user_id = %input.user_id))]
  async fn create(&self, input: OrderInput) -> RepoResult<Order> {
    sqlx::query_as::<_, Order>(&format!(
      "INSERT INTO orders (reference, total_amount, user_id) VALUES ($1, $2, $3) RETURNING {ORDER_COLUMNS}"
    ))
    .bind(&input.reference)
    .bind(input.total_amount)
    .bind(input.user_id)
    .fetch_one(&self.pool)
    .await
    .map_err(RepoError::from_sqlx)
  }

  #[instrument(name = "repo::orders::list", skip(self))]
  async fn list(&self) -> RepoResult<Vec<Order>> {
    sqlx::query_as::<_, Order>(&format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY id ASC"))
      .fetch_all(&self.pool)
      .await
      .map_err(RepoError::from_sqlx)
  }

  #[instrument(name = "repo::orders::list_for_user", skip(self))]
  async fn list_for_user(&self, user_id: i64) -> RepoResult<Vec<Order>> {
    sqlx::query_as::<_, Order>(&format!(
      "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY id ASC"
    ))
    .bind(user_id)
    .fetch_all(&self.pool)
    .await
    .map_err(RepoError::from_sqlx)
  }

  #[instrument(name = "repo::orders::find_by_id", skip(self))]
  async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>> {
    sqlx::query_as::<_, Order>(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(RepoError::from_sqlx)
  }

  #[instrument(name = "repo::orders::update", skip(self, input), fields(user_id = %input.user_id))]
  async fn update(&self, id: i64, input: OrderInput) -> RepoResult<Option<Order>> {
    sqlx::query_as::<_, Order>(&format!(
      "UPDATE orders SET reference = $2, total_amount = $3, user_id = $4, updated_at = now() \
       WHERE id = $1 RETURNING {ORDER_COLUMNS}"
    ))
    .bind(id)
    .bind(&input.reference)
    .bind(input.total_amount)
    .bind(input.user_id)
    .fetch_optional(&self.pool)
    .await
    .map_err(RepoError::from_sqlx)
  }

  #[instrument(name = "repo::orders::delete", skip(self))]
  async fn delete(&self, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(RepoError::from_sqlx)?;
    Ok(result.rows_affected() > 0)
  }
}
