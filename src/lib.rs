//! free-translate - single-shot JSON translation over stdin/stdout
//!
//! Reads one `{"text", "to"}` request, translates it through the public
//! Google Translate web endpoint with source auto-detection, and writes one
//! `{"translatedText", "status", "message"}` response.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod handler;

// Re-export key types for convenience
pub use core::{
    client::{GoogleTranslator, Translator, UnavailableTranslator},
    config::TranslatorConfig,
    errors::TranslationError,
    models::{TranslationRequest, TranslationResponse},
};

pub use handler::{handle, handle_bytes, run};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
