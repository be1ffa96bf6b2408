use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::generation::GenerationError;

use super::models::{ErrorResponse, MISSING_PROMPT};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Prompt parameter is missing")]
    MissingPrompt,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("Not found")]
    NotFound,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(err.to_string())
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::MissingPrompt => (StatusCode::BAD_REQUEST, MISSING_PROMPT.to_string()),
            Self::InvalidBody(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Generation(err) => match err {
                GenerationError::NotConfigured => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Review service is not configured".to_string(),
                ),
                GenerationError::Unauthorized { .. } => (
                    StatusCode::BAD_GATEWAY,
                    "Upstream rejected credentials".to_string(),
                ),
                GenerationError::RateLimited => (
                    StatusCode::TOO_MANY_REQUESTS,
                    "Upstream rate limit exceeded".to_string(),
                ),
                GenerationError::Timeout => (
                    StatusCode::GATEWAY_TIMEOUT,
                    "Upstream request timed out".to_string(),
                ),
                GenerationError::Network(_) => {
                    (StatusCode::BAD_GATEWAY, "Upstream request failed".to_string())
                }
                GenerationError::Upstream { status, .. } => {
                    (StatusCode::BAD_GATEWAY, format!("Upstream error ({status})"))
                }
                GenerationError::MalformedResponse(_) | GenerationError::EmptyResponse => (
                    StatusCode::BAD_GATEWAY,
                    "Upstream returned an unusable response".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: GenerationError) -> StatusCode {
        ApiError::from(err).status_and_message().0
    }

    #[test]
    fn generation_failures_map_to_gateway_statuses() {
        assert_eq!(status_of(GenerationError::NotConfigured), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_of(GenerationError::RateLimited), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(status_of(GenerationError::Timeout), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(status_of(GenerationError::EmptyResponse), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_of(GenerationError::Network("refused".into())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn upstream_details_stay_out_of_the_message() {
        let (_, message) = ApiError::from(GenerationError::Upstream {
            status: 500,
            body: "internal stack trace".to_string(),
        })
        .status_and_message();
        assert_eq!(message, "Upstream error (500)");
    }

    #[test]
    fn missing_prompt_uses_fixed_message() {
        let (status, message) = ApiError::MissingPrompt.status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Prompt parameter is missing");
    }
}
