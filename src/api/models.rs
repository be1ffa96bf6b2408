use serde::{Deserialize, Serialize};

pub const MISSING_PROMPT: &str = "Prompt parameter is missing";
pub const API_RUNNING: &str = "Api is Running";

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl ReviewRequest {
    /// An empty body is a request without a prompt.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self { prompt: None });
        }
        serde_json::from_slice(body)
    }

    /// The prompt, if present and not blank.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt
            .as_deref()
            .filter(|prompt| !prompt.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> ReviewRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn blank_or_absent_prompt_is_missing() {
        assert_eq!(request("{}").prompt(), None);
        assert_eq!(request(r#"{"prompt":null}"#).prompt(), None);
        assert_eq!(request(r#"{"prompt":""}"#).prompt(), None);
        assert_eq!(request(r#"{"prompt":" \n\t"}"#).prompt(), None);
    }

    #[test]
    fn empty_body_parses_as_missing_prompt() {
        assert_eq!(ReviewRequest::from_body(b"").unwrap().prompt(), None);
        assert_eq!(ReviewRequest::from_body(b" \n").unwrap().prompt(), None);
        assert!(ReviewRequest::from_body(b"{not json").is_err());
        assert!(ReviewRequest::from_body(br#"{"prompt":5}"#).is_err());
    }

    #[test]
    fn present_prompt_is_untouched() {
        assert_eq!(request(r#"{"prompt":" fn a() {} "}"#).prompt(), Some(" fn a() {} "));
    }
}
