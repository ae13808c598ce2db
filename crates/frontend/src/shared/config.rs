//! Client configuration.
//!
//! Defaults are embedded as TOML. The API base URL can be pinned at build time
//! with the `SAVED_JOBS_API_URL` environment variable; otherwise it is derived
//! from the page location.

use serde::Deserialize;

use crate::shared::api_utils::api_base_from_location;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000".
    pub base_url: String,
    /// Local storage key holding the bearer token.
    pub token_key: String,
    /// Local storage key holding the signed-in applicant record.
    pub user_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub startup_delay_ms: u32,
    /// Auto-dismiss delay for notifications; 0 keeps them until closed.
    pub snackbar_timeout_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
token_key = "jwtToken"
user_key = "user"

[ui]
startup_delay_ms = 50
snackbar_timeout_ms = 3000
"#;

impl AppConfig {
    /// Parse the embedded defaults and apply the build-time API override.
    pub fn load() -> Result<Self, toml::de::Error> {
        let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
        if let Some(url) = option_env!("SAVED_JOBS_API_URL") {
            config.api.base_url = url.to_string();
        }
        Ok(config)
    }

    /// Effective API base URL without a trailing slash.
    pub fn api_base(&self) -> String {
        if self.api.base_url.is_empty() {
            api_base_from_location()
        } else {
            self.api.base_url.trim_end_matches('/').to_string()
        }
    }
}
