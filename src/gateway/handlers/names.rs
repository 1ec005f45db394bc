//! Name endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::super::state::AppState;
use crate::registry::{StorageError, render_names};

/// List all names
///
/// Responds with a single text line, e.g. `Names are [tom, dick, harry]`.
#[utoipa::path(
    get,
    path = "/names",
    responses(
        (status = 200, description = "All names in insertion order", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Names"
)]
pub async fn list_names(State(state): State<Arc<AppState>>) -> Result<String, StorageError> {
    tracing::debug!("GET /names");
    let names = state.registry.list_names().await?;
    tracing::info!(count = names.len(), "Names listed");
    Ok(format!("Names are {}", render_names(&names)))
}

/// Add a name
///
/// The path segment is stored as given. Empty body on success.
#[utoipa::path(
    post,
    path = "/names/{name}",
    params(
        ("name" = String, Path, description = "Name to append")
    ),
    responses(
        (status = 200, description = "Name stored"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Names"
)]
pub async fn add_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<StatusCode, StorageError> {
    tracing::debug!(name = %name, "POST /names");
    state.registry.add_name(&name).await?;
    tracing::info!(name = %name, "Name added");
    Ok(StatusCode::OK)
}
