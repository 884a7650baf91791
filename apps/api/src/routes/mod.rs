pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::insights::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/upload-resume",
            post(handlers::handle_upload_resume).layer(body_limit),
        )
        .route("/api/insights", get(handlers::handle_list_insights))
        .route("/api/insights/:id", get(handlers::handle_get_insight))
        .with_state(state)
}
