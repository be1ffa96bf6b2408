mod error;
mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use error::ApiError;
pub use handlers::{index, not_found, review, status};
pub use models::{ErrorResponse, ReviewRequest, ReviewResponse, StatusResponse, MISSING_PROMPT};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api", get(status))
        .route("/api/", get(status))
        .route("/api/review", post(review))
        .fallback(not_found)
        .with_state(state)
}
