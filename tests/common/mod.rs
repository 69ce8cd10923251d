// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use orders_api::config::AppConfig;
use orders_api::models::{Order, OrderInput, User, UserInput};
use orders_api::repo::{OrderRepository, RepoError, RepoResult, UserRepository};
use orders_api::state::AppState;

// --- In-memory store double ---
//
// Users and orders share one backend so that user deletion can cascade to
// orders, mirroring the real schema's foreign key. Constraint checks
// (unique email, order->user FK) are enforced here too, so handler-level
// behavior matches what PostgreSQL would produce.

struct MemData {
  users: Vec<User>,
  orders: Vec<Order>,
  next_user_id: i64,
  next_order_id: i64,
}

pub struct MemBackend {
  data: Mutex<MemData>,
}

impl MemBackend {
  pub fn new() -> Arc<Self> {
    Arc::new(Self {
      data: Mutex::new(MemData {
        users: Vec::new(),
        orders: Vec::new(),
        next_user_id: 1,
        next_order_id: 1,
      }),
    })
  }
}

fn unique_violation(detail: &str) -> RepoError {
  RepoError::Constraint {
    message: format!("duplicate key value violates unique constraint ({detail})"),
  }
}

fn fk_violation(detail: &str) -> RepoError {
  RepoError::Constraint {
    message: format!("insert or update violates foreign key constraint ({detail})"),
  }
}

// Guarantees a strictly increasing marker even when the clock does not move
// between two writes in the same test.
fn bumped_timestamp(previous: chrono::DateTime<Utc>) -> chrono::DateTime<Utc> {
  let now = Utc::now();
  if now > previous {
    now
  } else {
    previous + Duration::milliseconds(1)
  }
}

pub struct InMemoryUsers(pub Arc<MemBackend>);

#[async_trait]
impl UserRepository for InMemoryUsers {
  async fn create(&self, input: UserInput) -> RepoResult<User> {
    let mut data = self.0.data.lock().unwrap();
    if data.users.iter().any(|u| u.email == input.email) {
      return Err(unique_violation("users_email_key"));
    }

    let now = Utc::now();
    let user = User {
      id: data.next_user_id,
      username: input.username,
      email: input.email,
      password: input.password,
      created_at: now,
      updated_at: now,
    };
    data.next_user_id += 1;
    data.users.push(user.clone());
    Ok(user)
  }

  async fn list(&self) -> RepoResult<Vec<User>> {
    Ok(self.0.data.lock().unwrap().users.clone())
  }

  async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
    let data = self.0.data.lock().unwrap();
    Ok(data.users.iter().find(|u| u.id == id).cloned())
  }

  async fn update(&self, id: i64, input: UserInput) -> RepoResult<Option<User>> {
    let mut data = self.0.data.lock().unwrap();
    if data.users.iter().any(|u| u.id != id && u.email == input.email) {
      return Err(unique_violation("users_email_key"));
    }

    match data.users.iter_mut().find(|u| u.id == id) {
      Some(user) => {
        user.username = input.username;
        user.email = input.email;
        user.password = input.password;
        user.updated_at = bumped_timestamp(user.updated_at);
        Ok(Some(user.clone()))
      }
      None => Ok(None),
    }
  }

  async fn delete(&self, id: i64) -> RepoResult<bool> {
    let mut data = self.0.data.lock().unwrap();
    let before = data.users.len();
    data.users.retain(|u| u.id != id);
    let deleted = data.users.len() < before;
    if deleted {
      // ON DELETE CASCADE
      data.orders.retain(|o| o.user_id != id);
    }
    Ok(deleted)
  }
}

pub struct InMemoryOrders(pub Arc<MemBackend>);

#[async_trait]
impl OrderRepository for InMemoryOrders {
  async fn create(&self, input: OrderInput) -> RepoResult<Order> {
    let mut data = self.0.data.lock().unwrap();
    if !data.users.iter().any(|u| u.id == input.user_id) {
      return Err(fk_violation("orders_user_id_fkey"));
    }

    let now = Utc::now();
    let order = Order {
      id: data.next_order_id,
      reference: input.reference,
      total_amount: input.total_amount,
      user_id: input.user_id,
      created_at: now,
      updated_at: now,
    };
    data.next_order_id += 1;
    data.orders.push(order.clone());
    Ok(order)
  }

  async fn list(&self) -> RepoResult<Vec<Order>> {
    Ok(self.0.data.lock().unwrap().orders.clone())
  }

  async fn list_for_user(&self, user_id: i64) -> RepoResult<Vec<Order>> {
    let data = self.0.data.lock().unwrap();
    Ok(data.orders.iter().filter(|o| o.user_id == user_id).cloned().collect())
  }

  async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>> {
    let data = self.0.data.lock().unwrap();
    Ok(data.orders.iter().find(|o| o.id == id).cloned())
  }

  async fn update(&self, id: i64, input: OrderInput) -> RepoResult<Option<Order>> {
    let mut data = self.0.data.lock().unwrap();
    if !data.users.iter().any(|u| u.id == input.user_id) {
      return Err(fk_violation("orders_user_id_fkey"));
    }

    match data.orders.iter_mut().find(|o| o.id == id) {
      Some(order) => {
        order.reference = input.reference;
        order.total_amount = input.total_amount;
        order.user_id = input.user_id;
        order.updated_at = bumped_timestamp(order.updated_at);
        Ok(Some(order.clone()))
      }
      None => Ok(None),
    }
  }

  async fn delete(&self, id: i64) -> RepoResult<bool> {
    let mut data = self.0.data.lock().unwrap();
    let before = data.orders.len();
    data.orders.retain(|o| o.id != id);
    Ok(data.orders.len() < before)
  }
}

// --- Test state builder ---

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "postgres://unused-in-tests".to_string(),
    db_max_connections: 1,
    schema_sync: false,
  }
}

/// AppState over a fresh in-memory backend. Users and orders share the
/// backend, so cascades behave as they would against the real schema.
pub fn test_state() -> AppState {
  let backend = MemBackend::new();
  AppState {
    users: Arc::new(InMemoryUsers(backend.clone())),
    orders: Arc::new(InMemoryOrders(backend)),
    config: Arc::new(test_config()),
  }
}

/// Seeds a user directly through the repository, bypassing HTTP.
pub async fn seed_user(state: &AppState, username: &str, email: &str) -> User {
  state
    .users
    .create(UserInput {
      username: username.to_string(),
      email: email.to_string(),
      password: "p".to_string(),
    })
    .await
    .expect("seeding a user must succeed")
}
