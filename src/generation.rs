use async_trait::async_trait;
use thiserror::Error;

/// A single text-generation call: model, optional instruction channel, user prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: Option<String>,
    pub prompt: String,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation credential is not configured")]
    NotConfigured,
    #[error("upstream rejected credentials ({status})")]
    Unauthorized { status: u16, body: String },
    #[error("upstream rate limit exceeded")]
    RateLimited,
    #[error("upstream request timed out")]
    Timeout,
    #[error("failed to reach upstream: {0}")]
    Network(String),
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("upstream response could not be parsed: {0}")]
    MalformedResponse(String),
    #[error("upstream response contained no text")]
    EmptyResponse,
}

impl GenerationError {
    /// Stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::Unauthorized { .. } => "unauthorized",
            Self::RateLimited => "rate_limited",
            Self::Timeout => "timeout",
            Self::Network(_) => "network",
            Self::Upstream { .. } => "upstream",
            Self::MalformedResponse(_) => "malformed_response",
            Self::EmptyResponse => "empty_response",
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// The external text-generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}
