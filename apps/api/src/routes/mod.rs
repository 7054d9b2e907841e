pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::recommendation::handlers as recommendation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job catalog (read-only)
        .route("/api/v1/jobs", get(catalog_handlers::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(catalog_handlers::handle_get_job))
        // Recommendation engine
        .route(
            "/api/v1/recommend",
            post(recommendation_handlers::handle_recommend),
        )
        .with_state(state)
}
