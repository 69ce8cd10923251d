// src/repo/mod.rs

//! Typed data-access layer between handlers and the store.
//!
//! Repositories are free-standing trait objects over plain entity structs.
//! Handlers hold `Arc<dyn …>` so tests can substitute in-memory doubles.
//!
//! Absence is expressed in return types (`Option` / `bool`); `RepoError`
//! carries the failures the store can raise.

pub mod order_repo;
pub mod user_repo;

pub use order_repo::{OrderRepository, PgOrderRepository};
pub use user_repo::{PgUserRepository, UserRepository};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
  /// A unique or foreign-key constraint rejected the write.
  #[error("constraint violation: {message}")]
  Constraint { message: String },

  /// Any other store failure (connectivity, syntax, decode, ...).
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),
}

impl RepoError {
  /// Classifies a sqlx error, pulling unique/FK violations out of the
  /// generic database bucket.
  pub fn from_sqlx(err: sqlx::Error) -> Self {
    use sqlx::error::ErrorKind;

    if let sqlx::Error::Database(db_err) = &err {
      match db_err.kind() {
        ErrorKind::UniqueViolation | ErrorKind::ForeignKeyViolation => {
          return RepoError::Constraint {
            message: db_err.message().to_string(),
          };
        }
        _ => {}
      }
    }
    RepoError::Database(err)
  }
}

pub type RepoResult<T> = std::result::Result<T, RepoError>;
