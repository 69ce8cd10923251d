// src/lib.rs

//! Users/orders CRUD backend: an HTTP service over PostgreSQL.
//!
//! Layering, leaf to root:
//!  - `db`: store handle owning the connection pool (init/teardown).
//!  - `repo`: typed repository traits + PostgreSQL implementations.
//!  - `web`: request handlers and the route table under `/api`.
//!
//! The binary in `main.rs` wires these together; tests drive the same route
//! configuration against in-memory repositories.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod repo;
pub mod state;
pub mod web;
