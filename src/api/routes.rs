//! Route definitions for the API.

use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::config::CorsConfig;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_todos,
        handlers::get_todo,
        handlers::create_todo,
        handlers::delete_todo,
        handlers::health_check,
    ),
    components(schemas(
        crate::api::types::HealthResponse,
        crate::domain::TodoItem,
        crate::domain::CreateTodoRequest,
    )),
    tags(
        (name = "todos", description = "Todo item management"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Todo Core API",
        version = "0.1.0",
        description = "In-memory todo list service",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(state: AppState, cors_config: &CorsConfig) -> Router {
    Router::new()
        // Todos
        .route(
            handlers::TODOS_PATH,
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo).delete(handlers::delete_todo),
        )
        // Health
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_config))
}

/// CORS layer from configuration. No configured origins means any origin.
fn cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
