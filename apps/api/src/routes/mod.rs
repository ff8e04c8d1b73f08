pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::survey::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/survey", get(handlers::handle_get_survey))
        .route("/api/v1/survey/progress", post(handlers::handle_progress))
        .route("/api/v1/survey/submit", post(handlers::handle_submit))
        .with_state(state)
}
