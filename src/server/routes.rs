use super::handlers;
use super::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Browser clients call from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/searchmarks/search", get(handlers::search))
        .route("/searchmarks/statistics", get(handlers::statistics))
        .route("/searchmarks/schema", get(handlers::schema))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
