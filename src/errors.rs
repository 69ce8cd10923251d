// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::repo::RepoError;

#[derive(Debug, Error)]
pub enum AppError {
  /// An id-keyed operation matched no row. Carries the client-facing
  /// message, e.g. "User not found".
  #[error("{0}")]
  NotFound(String),

  /// A repository call failed. `context` is the human-readable message for
  /// the response envelope; the source is the stringified cause.
  #[error("{context}: {source}")]
  Repo {
    context: String,
    #[source]
    source: RepoError,
  },

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl AppError {
  pub fn repo(context: impl Into<String>, source: RepoError) -> Self {
    AppError::Repo {
      context: context.into(),
      source,
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({ "message": m })),
      // No status distinction between constraint violations and other store
      // failures: both travel in the 500 envelope.
      AppError::Repo { context, source } => HttpResponse::InternalServerError().json(json!({
        "error": context,
        "details": source.to_string(),
      })),
      AppError::Config(m) => HttpResponse::InternalServerError().json(json!({
        "error": "Configuration issue",
        "details": m,
      })),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
