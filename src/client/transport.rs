use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use super::form::ReviewBackend;
use super::outcome::{Reply, ReplyBody};

const REVIEW_PATH: &str = "/api/review";

#[derive(Serialize)]
struct ReviewPayload<'a> {
    prompt: &'a str,
}

/// Talks to a running gateway over HTTP. No retries, no client-side timeout.
#[derive(Debug, Clone)]
pub struct ReviewClient {
    base_url: String,
    http: Client,
}

impl ReviewClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn review_url(&self) -> String {
        format!("{}{}", self.base_url, REVIEW_PATH)
    }
}

#[async_trait]
impl ReviewBackend for ReviewClient {
    async fn send(&self, prompt: &str) -> Reply {
        let sent = self
            .http
            .post(self.review_url())
            .json(&ReviewPayload { prompt })
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(error = %err, "review request did not reach the gateway");
                return Reply::Failed {
                    body: None,
                    transport_message: Some(err.to_string()),
                };
            }
        };

        let status = response.status();
        let body = response.json::<ReplyBody>().await;
        classify(status, body)
    }
}

fn classify(status: StatusCode, body: Result<ReplyBody, reqwest::Error>) -> Reply {
    match body {
        Ok(body) if status == StatusCode::OK => Reply::Success(body),
        Ok(body) if status.is_success() || status.is_client_error() => Reply::Rejected {
            status: status.as_u16(),
            body,
        },
        Ok(body) => Reply::Failed {
            body: Some(body),
            transport_message: Some(status_message(status)),
        },
        Err(err) if status.is_success() => Reply::Failed {
            body: None,
            transport_message: Some(err.to_string()),
        },
        Err(_) => Reply::Failed {
            body: None,
            transport_message: Some(status_message(status)),
        },
    }
}

fn status_message(status: StatusCode) -> String {
    format!("Request failed with status code {}", status.as_u16())
}
