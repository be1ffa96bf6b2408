use std::env;

use secrecy::SecretString;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Process configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// `None` when no credential is set; calls then fail as not configured.
    pub api_key: Option<SecretString>,
    pub model: String,
    pub api_base: String,
    /// `None` leaves the transport default in place.
    pub timeout_ms: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        // GEMINIE_API_KEY is the spelling older deployments were provisioned with.
        let api_key = ["GEMINI_API_KEY", "GEMINIE_API_KEY"]
            .into_iter()
            .filter_map(|key| lookup(key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(SecretString::new);

        let model = lookup("GEMINI_MODEL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base = lookup("GEMINI_API_BASE")
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_ms = lookup("UPSTREAM_TIMEOUT_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|ms| *ms > 0);

        Self {
            port,
            gemini: GeminiSettings {
                api_key,
                model,
                api_base,
                timeout_ms,
            },
        }
    }
}
