//! HTTP handlers

pub mod health;
pub mod names;

pub use health::{HealthResponse, health_check};
pub use names::{add_name, list_names};
