//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::core::errors::{Result, TranslationError};

/// Public Google Translate web endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Default client-side request timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 30000;

/// Configuration for translator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// `translate_a/single` endpoint URL
    pub api_endpoint: String,
    /// Whole-request timeout
    pub timeout_ms: u64,
    /// Optional HTTP proxy URL
    pub proxy: Option<String>,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            proxy: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let api_endpoint = std::env::var("TRANSLATE_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());

        let timeout_ms = std::env::var("TRANSLATE_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("TRANSLATE_TIMEOUT_MS must be an integer: {}", e))?;

        let proxy = std::env::var("TRANSLATE_PROXY")
            .ok()
            .filter(|p| !p.trim().is_empty());

        let user_agent =
            std::env::var("TRANSLATE_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        let config = Self {
            api_endpoint,
            timeout_ms,
            proxy,
            user_agent,
        };

        debug!(?config, "Loaded translator configuration from environment");

        Ok(config)
    }

    /// Load from JSON file; absent keys keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Override the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Route requests through an HTTP proxy
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_endpoint.trim().is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API endpoint is required".to_string(),
            });
        }

        reqwest::Url::parse(&self.api_endpoint).map_err(|e| TranslationError::ConfigError {
            message: format!("API endpoint {:?} is not a valid URL: {}", self.api_endpoint, e),
        })?;

        if self.timeout_ms == 0 {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        if let Some(proxy) = &self.proxy {
            reqwest::Proxy::all(proxy.as_str()).map_err(|e| TranslationError::ConfigError {
                message: format!("Invalid proxy {:?}: {}", proxy, e),
            })?;
        }

        Ok(())
    }
}
