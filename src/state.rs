// src/state.rs

use crate::config::AppConfig;
use crate::repo::{OrderRepository, UserRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub users: Arc<dyn UserRepository>,
  pub orders: Arc<dyn OrderRepository>,
  pub config: Arc<AppConfig>, // Share loaded config
}
