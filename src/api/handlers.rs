use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::review::review_request;
use crate::AppState;

use super::error::ApiError;
use super::models::{ReviewRequest, ReviewResponse, StatusResponse, API_RUNNING};

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn review(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReviewResponse>, ApiError> {
    // Content-Type is not checked; any body that parses as JSON is accepted.
    let payload = ReviewRequest::from_body(&body).map_err(|err| {
        tracing::info!(reason = %err, "rejected review body");
        ApiError::from(err)
    })?;

    let Some(prompt) = payload.prompt() else {
        tracing::info!("rejected review without prompt");
        return Err(ApiError::MissingPrompt);
    };

    let request = review_request(&state.model, prompt);
    let started = Instant::now();
    tracing::info!(model = %request.model, prompt_len = prompt.len(), "forwarding review");

    match state.generator.generate(&request).await {
        Ok(response) => {
            tracing::info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                response_len = response.len(),
                "review completed"
            );
            Ok(Json(ReviewResponse { response }))
        }
        Err(err) => {
            tracing::warn!(
                kind = err.kind(),
                error = %err,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "review failed upstream"
            );
            Err(err.into())
        }
    }
}

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: API_RUNNING.to_string(),
    })
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn not_found() -> Response {
    ApiError::NotFound.into_response()
}
