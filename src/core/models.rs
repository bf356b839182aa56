//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Source language sent to the backend; the backend detects it.
pub const AUTO_DETECT: &str = "auto";

/// Message reported when the input document cannot be decoded
pub const INVALID_INPUT_MESSAGE: &str = "Invalid JSON input";

/// Message reported when the translation call fails for any reason
pub const TRANSLATION_FAILED_MESSAGE: &str = "Translation failed";

/// Translation request as read from the input stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate, passed through as-is
    pub text: String,
    /// Target language code
    #[serde(rename = "to")]
    pub target_lang: String,
}

impl TranslationRequest {
    /// Create a request
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Translation response as written to the output stream.
///
/// Built only through [`TranslationResponse::success`] and
/// [`TranslationResponse::failure`]: a successful response never carries a
/// message and a failed one never carries text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    translated_text: String,
    status: bool,
    message: String,
}

impl TranslationResponse {
    /// Successful translation
    pub fn success(translated_text: impl Into<String>) -> Self {
        Self {
            translated_text: translated_text.into(),
            status: true,
            message: String::new(),
        }
    }

    /// Failed request with a human-readable reason
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            translated_text: String::new(),
            status: false,
            message: message.into(),
        }
    }

    /// Input could not be decoded
    pub fn invalid_input() -> Self {
        Self::failure(INVALID_INPUT_MESSAGE)
    }

    /// Translation call failed
    pub fn translation_failed() -> Self {
        Self::failure(TRANSLATION_FAILED_MESSAGE)
    }

    /// Translated text, empty on failure
    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    /// Whether the translation succeeded
    pub fn status(&self) -> bool {
        self.status
    }

    /// Error description, empty on success
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_request_wire_names() {
        let request: TranslationRequest =
            serde_json::from_str(r#"{"text":"Hello","to":"es"}"#).unwrap();
        assert_eq!(request, TranslationRequest::new("Hello", "es"));
    }

    #[test]
    fn test_request_missing_field_rejected() {
        assert!(serde_json::from_str::<TranslationRequest>(r#"{"text":"Hello"}"#).is_err());
        assert!(serde_json::from_str::<TranslationRequest>(r#"{"to":"es"}"#).is_err());
    }

    #[test]
    fn test_request_wrong_type_rejected() {
        assert!(serde_json::from_str::<TranslationRequest>(r#"{"text":5,"to":"es"}"#).is_err());
        assert!(serde_json::from_str::<TranslationRequest>(r#"{"text":"Hi","to":null}"#).is_err());
    }

    #[test]
    fn test_success_shape() {
        let response = TranslationResponse::success("Hola");
        assert!(response.status());
        assert!(response.message().is_empty());
        assert_json_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"translatedText": "Hola", "status": true, "message": ""})
        );
    }

    #[test]
    fn test_failure_shape_keeps_all_fields() {
        let response = TranslationResponse::translation_failed();
        assert!(!response.status());
        assert!(response.translated_text().is_empty());
        assert_json_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"translatedText": "", "status": false, "message": "Translation failed"})
        );
    }
}
