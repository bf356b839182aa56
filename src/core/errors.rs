//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Target language code is not a well-formed tag
    #[error("Malformed target language tag: {code:?}")]
    InvalidLanguageTag {
        code: String,
    },

    /// Backend answered with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
    },

    /// Backend answered 429
    #[error("Rate limited by translation backend")]
    RateLimitError,

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        message: String,
    },

    /// Backend returned no translated segments
    #[error("Empty translation returned for non-empty input")]
    EmptyTranslation,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    /// Whether a second attempt could plausibly succeed.
    ///
    /// Only used to pick the log level; nothing retries.
    pub fn is_transient(&self) -> bool {
        match self {
            TranslationError::NetworkError { .. }
            | TranslationError::TimeoutError
            | TranslationError::RateLimitError => true,
            TranslationError::ApiError { status, .. } => *status >= 500,
            TranslationError::HttpError(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

/// Map a transport error from `reqwest` into a typed error.
pub fn transport_error(err: reqwest::Error) -> TranslationError {
    if err.is_timeout() {
        TranslationError::TimeoutError
    } else {
        TranslationError::NetworkError {
            message: err.to_string(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
