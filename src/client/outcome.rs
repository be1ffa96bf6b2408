use std::fmt;

use serde::Deserialize;

pub const SUCCESS_FALLBACK: &str = "✅ Review completed successfully.";
pub const SERVER_FALLBACK: &str = "Unknown error from server.";
pub const NETWORK_FALLBACK: &str = "Unexpected network error";

const WARNING_PREFIX: &str = "⚠️ Error: ";
const FAILURE_PREFIX: &str = "❌ Failed to fetch: ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReplyBody {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What came back from one submission, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// HTTP 200 with a readable body.
    Success(ReplyBody),
    /// A non-200 answer below 500 with a readable body.
    Rejected { status: u16, body: ReplyBody },
    /// No usable answer: connection failure, 5xx, or an unreadable body.
    Failed {
        body: Option<ReplyBody>,
        transport_message: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub tone: Tone,
    pub text: String,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// First candidate that is present and non-empty.
fn first_present<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

impl From<&Reply> for Outcome {
    fn from(reply: &Reply) -> Self {
        match reply {
            Reply::Success(body) => Outcome {
                tone: Tone::Success,
                text: first_present([body.response.as_deref(), body.message.as_deref()])
                    .unwrap_or(SUCCESS_FALLBACK)
                    .to_string(),
            },
            Reply::Rejected { body, .. } => {
                let detail = first_present([
                    body.error.as_deref(),
                    body.message.as_deref(),
                    body.response.as_deref(),
                ])
                .unwrap_or(SERVER_FALLBACK);
                Outcome {
                    tone: Tone::Warning,
                    text: format!("{WARNING_PREFIX}{detail}"),
                }
            }
            Reply::Failed {
                body,
                transport_message,
            } => {
                let body = body.as_ref();
                let detail = first_present([
                    body.and_then(|b| b.error.as_deref()),
                    body.and_then(|b| b.message.as_deref()),
                    transport_message.as_deref(),
                ])
                .unwrap_or(NETWORK_FALLBACK);
                Outcome {
                    tone: Tone::Failure,
                    text: format!("{FAILURE_PREFIX}{detail}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(response: Option<&str>, message: Option<&str>, error: Option<&str>) -> ReplyBody {
        ReplyBody {
            response: response.map(str::to_string),
            message: message.map(str::to_string),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn success_shows_response_exactly() {
        let outcome = Outcome::from(&Reply::Success(body(Some("Looks good"), None, None)));
        assert_eq!(outcome.text, "Looks good");
        assert_eq!(outcome.tone, Tone::Success);
    }

    #[test]
    fn success_falls_back_through_message_then_default() {
        let outcome = Outcome::from(&Reply::Success(body(Some(""), Some("done"), None)));
        assert_eq!(outcome.text, "done");

        let outcome = Outcome::from(&Reply::Success(ReplyBody::default()));
        assert_eq!(outcome.text, SUCCESS_FALLBACK);
    }

    #[test]
    fn rejection_is_a_marked_warning() {
        let outcome = Outcome::from(&Reply::Rejected {
            status: 400,
            body: body(None, None, Some("Prompt parameter is missing")),
        });
        assert_eq!(outcome.tone, Tone::Warning);
        assert_eq!(outcome.text, "⚠️ Error: Prompt parameter is missing");
    }

    #[test]
    fn rejection_without_fields_uses_server_fallback() {
        let outcome = Outcome::from(&Reply::Rejected {
            status: 404,
            body: ReplyBody::default(),
        });
        assert_eq!(outcome.text, format!("⚠️ Error: {SERVER_FALLBACK}"));
    }

    #[test]
    fn failure_prefers_structured_fields_over_transport_message() {
        let outcome = Outcome::from(&Reply::Failed {
            body: Some(body(None, Some("Upstream down"), None)),
            transport_message: Some("Request failed with status code 502".to_string()),
        });
        assert_eq!(outcome.tone, Tone::Failure);
        assert_eq!(outcome.text, "❌ Failed to fetch: Upstream down");
    }

    #[test]
    fn failure_uses_transport_message_then_generic() {
        let outcome = Outcome::from(&Reply::Failed {
            body: None,
            transport_message: Some("connection refused".to_string()),
        });
        assert_eq!(outcome.text, "❌ Failed to fetch: connection refused");

        let outcome = Outcome::from(&Reply::Failed {
            body: None,
            transport_message: None,
        });
        assert_eq!(outcome.text, format!("❌ Failed to fetch: {NETWORK_FALLBACK}"));
    }
}
