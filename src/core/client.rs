//! Translation client for the public Google Translate web endpoint

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{transport_error, Result, TranslationError};
use crate::core::languages;

/// A translation capability: `(text, source, target) -> translated text`.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source_lang` (or `"auto"`) into `target_lang`.
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String>;
}

/// HTTP client for the `translate_a/single` endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    config: TranslatorConfig,
}

impl GoogleTranslator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.as_str());

        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
        }

        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Send actual HTTP request
    async fn send_request(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.config.api_endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("ie", "UTF-8"),
                ("oe", "UTF-8"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            let json: serde_json::Value =
                serde_json::from_str(&body).map_err(|e| TranslationError::InvalidResponseError {
                    message: e.to_string(),
                })?;

            parse_translation(&json)
        } else if status.as_u16() == 429 {
            Err(TranslationError::RateLimitError)
        } else {
            Err(TranslationError::ApiError {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let target = languages::parse_tag(target_lang).ok_or_else(|| {
            TranslationError::InvalidLanguageTag {
                code: target_lang.to_string(),
            }
        })?;

        // The backend answers an empty query with no segments at all.
        if text.is_empty() {
            return Ok(String::new());
        }

        debug!(
            "Translating {} chars {} -> {} via {}",
            text.chars().count(),
            source_lang,
            target,
            self.config.api_endpoint
        );

        let translation = self.send_request(text, source_lang, target).await?;

        debug!("Received {} chars", translation.chars().count());

        Ok(translation)
    }
}

/// Stand-in used when the real client could not be built.
///
/// Every call fails with the construction error, so requests still get a
/// response document.
#[derive(Debug, Clone)]
pub struct UnavailableTranslator {
    reason: String,
}

impl UnavailableTranslator {
    /// Wrap the reason the real translator is unavailable
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Translator for UnavailableTranslator {
    async fn translate(&self, _text: &str, _source_lang: &str, _target_lang: &str) -> Result<String> {
        Err(TranslationError::ConfigError {
            message: self.reason.clone(),
        })
    }
}

/// Extract the translated text from a `translate_a/single` response.
///
/// The body is a nested array; `body[0]` holds one entry per sentence and
/// each entry starts with the translated sentence.
pub fn parse_translation(json: &serde_json::Value) -> Result<String> {
    let segments = json
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or(TranslationError::EmptyTranslation)?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
        .collect();

    if translation.is_empty() {
        return Err(TranslationError::EmptyTranslation);
    }

    Ok(translation)
}
