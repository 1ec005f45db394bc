//! Name registry
//!
//! Append-only list of names persisted in PostgreSQL. The service layer owns
//! the add/list contract; storage sits behind the [`NameStore`] trait.

pub mod error;
pub mod repository;
pub mod service;

pub use error::StorageError;
pub use repository::{NameStore, PgNameStore};
pub use service::{NameRegistry, render_names};
