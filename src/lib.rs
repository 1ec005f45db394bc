//! Name Registry
//!
//! A small HTTP service that appends names to a PostgreSQL table and lists
//! them back in insertion order.
//!
//! # Modules
//!
//! - [`registry`] - NameRegistry service, NameStore trait and StorageError
//! - [`db`] - PostgreSQL connection pool and schema bootstrap
//! - [`gateway`] - axum router, handlers and server bootstrap
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod registry;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use registry::{NameRegistry, NameStore, PgNameStore, StorageError};
