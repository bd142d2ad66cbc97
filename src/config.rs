//! Configuration handling for the TUI

/// Environment variable supplying the review API base URL
pub const API_URL_ENV: &str = "REVIEW_API_URL";

/// Base URL used when the environment does not supply one
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Path of the review submission endpoint, relative to the base URL
const SUBMIT_REVIEW_PATH: &str = "/api/submit-review";

/// Runtime configuration for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiConfig {
    /// Base URL of the review API
    pub api_url: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl TuiConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(API_URL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self { api_url }
    }

    /// Full URL of the review submission endpoint
    pub fn submit_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.api_url.trim_end_matches('/'),
            SUBMIT_REVIEW_PATH
        )
    }
}
