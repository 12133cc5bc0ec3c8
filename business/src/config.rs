use std::env::vars;

use log::info;
use serde::Deserialize;

use crate::ConfigError;

/// Backend used when `CHATDESK_API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

// Every field is optional so a bare environment still loads.
#[derive(Deserialize)]
struct RawConfig {
    chatdesk_api_base_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Loads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        match raw.chatdesk_api_base_url {
            Some(url) => Self::new(url.trim_end_matches('/')),
            None => Self::default(),
        }
    }

    pub fn api_url(&self) -> String {
        if self.api_base_url.is_empty() {
            "/api".to_owned()
        } else {
            format!("{}/api", self.api_base_url)
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
