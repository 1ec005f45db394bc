//! Name Registry server
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌──────────────┐    ┌────────────┐
//! │   HTTP   │───▶│   handlers   │───▶│ NameRegistry │───▶│ PostgreSQL │
//! │  (axum)  │    │ /names, ...  │    │ (add / list) │    │  names_tb  │
//! └──────────┘    └──────────────┘    └──────────────┘    └────────────┘
//! ```
//!
//! Usage: `name_registry [--env <name>] [--port <port>]`

use std::sync::Arc;

use anyhow::{Context, Result};

use name_registry::gateway::{self, state::AppState};
use name_registry::{AppConfig, Database, NameRegistry, PgNameStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = name_registry::logging::init_logging(&app_config);

    tracing::info!(git_hash = env!("GIT_HASH"), "Starting Name Registry in {} mode", env);

    let db = Database::connect(&app_config.database)
        .await
        .context("Failed to connect to PostgreSQL")?;
    if app_config.database.init_schema {
        db.init_schema()
            .await
            .context("Failed to initialize schema")?;
    }
    let db = Arc::new(db);

    let registry = NameRegistry::new(Arc::new(PgNameStore::new(db.pool().clone())));
    let state = Arc::new(AppState::new(registry, Some(db)));

    let addr = app_config.bind_addr(get_port_override());
    gateway::run_server(&addr, state).await
}
