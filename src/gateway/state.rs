use std::sync::Arc;

use crate::db::Database;
use crate::registry::NameRegistry;

/// Gateway application state (shared across handlers)
#[derive(Clone)]
pub struct AppState {
    /// Name registry service
    pub registry: NameRegistry,
    /// PostgreSQL database, used by the health check
    pub db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(registry: NameRegistry, db: Option<Arc<Database>>) -> Self {
        Self { registry, db }
    }
}
