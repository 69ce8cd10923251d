// src/repo/user_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::models::{User, UserInput};
use crate::repo::{RepoError, RepoResult};

/// Create/read/update/delete operations over users.
///
/// Deleting a user cascades to its orders at the store level; callers do not
/// need to clean orders up themselves.
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Inserts a row with system-assigned id and timestamps. Fails with
  /// `RepoError::Constraint` when the email is already taken.
  async fn create(&self, input: UserInput) -> RepoResult<User>;

  /// Every user, ordered by id.
  async fn list(&self) -> RepoResult<Vec<User>>;

  /// Single-row lookup by primary key. `None` when no row matches.
  async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

  /// Full replace of username/email/password; refreshes `updated_at`.
  /// `None` when no row matches. Fields are never partially applied.
  async fn update(&self, id: i64, input: UserInput) -> RepoResult<Option<User>>;

  /// Removes the row, cascading to its orders. `false` when no row matched.
  async fn delete(&self, id: i64) -> RepoResult<bool>;
}

const USER_COLUMNS: &str = "id, username, email, password, created_at, updated_at";

#[derive(Clone)]
pub struct PgUserRepository {
  pool: PgPool,
}

impl PgUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserRepository for PgUserRepository {
  #[instrument(name = "repo::users::create", skip(self, input), fields(email = %input.email))]
  async fn create(&self, input: UserInput) -> RepoResult<User> {
    sqlx::query_as::<_, User>(&format!(
      "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
    ))
    .bind(&input.username)
    .bind(&input.email)
    .bind(&input.password)
    .fetch_one(&self.pool)
    .await
    .map_err(RepoError::from_sqlx)
  }

  #[instrument(name = "repo::users::list", skip(self))]
  async fn list(&self) -> RepoResult<Vec<User>> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id ASC"))
      .fetch_all(&self.pool)
      .await
      .map_err(RepoError::from_sqlx)
  }

  #[instrument(name = "repo::users::find_by_id", skip(self))]
  async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(RepoError::from_sqlx)
  }

  #[instrument(name = "repo::users::update", skip(self, input), fields(email = %input.email))]
  async fn update(&self, id: i64, input: UserInput) -> RepoResult<Option<User>> {
    sqlx::query_as::<_, User>(&format!(
      "UPDATE users SET username = $2, email = $3, password = $4, updated_at = now() \
       WHERE id = $1 RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .bind(&input.username)
    .bind(&input.email)
    .bind(&input.password)
    .fetch_optional(&self.pool)
    .await
    .map_err(RepoError::from_sqlx)
  }

  #[instrument(name = "repo::users::delete", skip(self))]
  async fn delete(&self, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(RepoError::from_sqlx)?;
    Ok(result.rows_affected() > 0)
  }
}
