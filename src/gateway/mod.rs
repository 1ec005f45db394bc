pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the complete router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/names", get(handlers::list_names))
        // Same listing with a trailing slash
        .route("/names/", get(handlers::list_names))
        .route("/names/{name}", post(handlers::add_name))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

/// Serve on an already bound listener until Ctrl-C / SIGTERM
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<()> {
    let app = build_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Bind `addr` and serve
pub async fn run_server(addr: &str, state: Arc<AppState>) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!(addr = %addr, "Gateway listening");
    tracing::info!("API Docs: http://{}/docs", addr);

    serve(listener, state).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::registry::NameRegistry;
    use crate::registry::repository::mock::MemoryNameStore;

    fn app_with(store: Arc<MemoryNameStore>) -> Router {
        build_router(Arc::new(AppState::new(NameRegistry::new(store), None)))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_names_is_plain_text() {
        let app = app_with(Arc::new(MemoryNameStore::with_names(&["tom", "dick", "harry"])));

        let response = app
            .oneshot(Request::get("/names").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_text(response).await, "Names are [tom, dick, harry]");
    }

    #[tokio::test]
    async fn test_get_names_trailing_slash() {
        let app = app_with(Arc::new(MemoryNameStore::with_names(&["tom"])));

        let response = app
            .oneshot(Request::get("/names/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Names are [tom]");
    }

    #[tokio::test]
    async fn test_post_name_returns_empty_ok() {
        let store = Arc::new(MemoryNameStore::new());
        let app = app_with(store.clone());

        let response = app
            .oneshot(Request::post("/names/diabol").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.is_empty());
        assert_eq!(store.snapshot(), vec!["diabol"]);
    }

    #[tokio::test]
    async fn test_post_name_is_percent_decoded() {
        let store = Arc::new(MemoryNameStore::new());
        let app = app_with(store.clone());

        let response = app
            .oneshot(Request::post("/names/john%20smith").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.snapshot(), vec!["john smith"]);
    }

    #[tokio::test]
    async fn test_post_storage_failure_is_500() {
        let store = Arc::new(MemoryNameStore::new());
        store.set_fail_writes(true);
        let app = app_with(store.clone());

        let response = app
            .oneshot(Request::post("/names/ghost").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_method_rejected() {
        let app = app_with(Arc::new(MemoryNameStore::new()));

        let response = app
            .oneshot(Request::delete("/names/tom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
