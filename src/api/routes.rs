use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, shrinkage, users};
use crate::api::state::AppState;

/// Builds the application router with its middleware stack
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Users
        .route("/usuarios", get(users::list_users))
        // Shrinkage
        .route("/mermas", post(shrinkage::create_header))
        .route("/mermas/sucursales/:ids", get(shrinkage::list_by_branches))
        .route(
            "/mermas/:id/productos",
            get(shrinkage::list_detail_lines).post(shrinkage::add_detail_line),
        )
        .route("/motivos-merma", get(shrinkage::list_reasons))
        .route("/productos/buscar", get(shrinkage::search_products))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
