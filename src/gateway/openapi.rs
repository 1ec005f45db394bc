//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Name Registry API",
        version = "0.1.0",
        description = "Append names and list them back in insertion order.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::names::list_names,
        crate::gateway::handlers::names::add_name,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(HealthResponse)
    ),
    tags(
        (name = "Names", description = "Name registry"),
        (name = "System", description = "Health and status"),
    )
)]
pub struct ApiDoc;
