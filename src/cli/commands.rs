//! CLI argument definitions and the translate command

use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, error};

use crate::core::client::{GoogleTranslator, UnavailableTranslator};
use crate::core::config::TranslatorConfig;
use crate::handler;

/// Translate one JSON request from stdin into one JSON response on stdout
#[derive(Parser, Debug, Default)]
#[command(name = "free-translate", version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON configuration file (replaces environment configuration)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Translation endpoint (defaults to TRANSLATE_API_ENDPOINT env var)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in milliseconds (defaults to TRANSLATE_TIMEOUT_MS env var)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// HTTP proxy URL (defaults to TRANSLATE_PROXY env var)
    #[arg(long)]
    pub proxy: Option<String>,
}

impl Args {
    /// Resolve the translator configuration: file or environment, then flags
    pub fn resolve_config(&self) -> anyhow::Result<TranslatorConfig> {
        let mut config = match &self.config {
            Some(path) => TranslatorConfig::from_file(path)?,
            None => TranslatorConfig::from_env()?,
        };

        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.clone());
        }

        if let Some(timeout_ms) = self.timeout_ms {
            config = config.with_timeout_ms(timeout_ms);
        }

        if let Some(proxy) = &self.proxy {
            config = config.with_proxy(proxy.clone());
        }

        Ok(config)
    }

    /// Resolve the configuration and build the HTTP translator
    pub fn build_translator(&self) -> anyhow::Result<GoogleTranslator> {
        let config = self.resolve_config()?;
        debug!("Using endpoint {}", config.api_endpoint);

        Ok(GoogleTranslator::new(config)?)
    }
}

/// Handle the translate command: stdin in, stdout out
pub async fn handle_translate(args: &Args) -> anyhow::Result<()> {
    translate_stream(args, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Answer one request from `reader` on `writer`.
///
/// A translator that cannot be built still yields a response document: the
/// request is decoded as usual and then reported as a failed translation.
pub async fn translate_stream<R, W>(args: &Args, reader: R, writer: W) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match args.build_translator() {
        Ok(translator) => handler::run(reader, writer, &translator).await,
        Err(e) => {
            error!("Translator unavailable: {:#}", e);
            let translator = UnavailableTranslator::new(format!("{:#}", e));
            handler::run(reader, writer, &translator).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_TIMEOUT_MS;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;
    use std::io::Write;

    /// Run `translate_stream` over an in-memory input and parse the output
    async fn run_with(args: &Args, input: &[u8]) -> serde_json::Value {
        let mut output = Vec::new();
        translate_stream(args, input, &mut output).await.unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    fn broken_config_args() -> (tempfile::NamedTempFile, Args) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"api_endpoint": "not a url"}}"#).unwrap();

        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        (file, args)
    }

    #[tokio::test]
    async fn test_broken_config_still_answers_valid_request() {
        let (_file, args) = broken_config_args();
        assert!(args.build_translator().is_err());

        let output = run_with(&args, br#"{"text":"Hi","to":"es"}"#).await;
        assert_json_eq!(
            output,
            json!({"translatedText": "", "status": false, "message": "Translation failed"})
        );
    }

    #[tokio::test]
    async fn test_broken_config_still_rejects_bad_input() {
        let (_file, args) = broken_config_args();

        let output = run_with(&args, b"not json").await;
        assert_json_eq!(
            output,
            json!({"translatedText": "", "status": false, "message": "Invalid JSON input"})
        );
    }

    #[tokio::test]
    async fn test_missing_config_file_still_answers() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/free-translate.json")),
            ..Default::default()
        };

        let output = run_with(&args, br#"{"text":"Hi","to":"es"}"#).await;
        assert_eq!(output["message"], "Translation failed");
        assert_eq!(output["status"], false);
    }

    #[tokio::test]
    async fn test_zero_timeout_flag_still_answers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        let args = Args {
            config: Some(file.path().to_path_buf()),
            timeout_ms: Some(0),
            ..Default::default()
        };

        let output = run_with(&args, br#"{"text":"Hi","to":"es"}"#).await;
        assert_eq!(output["message"], "Translation failed");
    }

    #[test]
    fn test_no_flags() {
        let args = Args::try_parse_from(["free-translate"]).unwrap();
        assert!(!args.verbose);
        assert!(args.config.is_none());
        assert!(args.endpoint.is_none());
        assert!(args.timeout_ms.is_none());
        assert!(args.proxy.is_none());
    }

    #[test]
    fn test_flags_override_file_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"api_endpoint": "http://from-file.test/t"}}"#).unwrap();

        let args = Args::try_parse_from([
            "free-translate",
            "--config",
            file.path().to_str().unwrap(),
            "--timeout-ms",
            "1500",
            "--proxy",
            "http://127.0.0.1:3128",
        ])
        .unwrap();

        let config = args.resolve_config().unwrap();
        assert_eq!(config.api_endpoint, "http://from-file.test/t");
        assert_eq!(config.timeout_ms, 1500);
        assert_eq!(config.proxy.as_deref(), Some("http://127.0.0.1:3128"));
    }

    #[test]
    fn test_file_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let args = Args {
            config: Some(file.path().to_path_buf()),
            endpoint: Some("http://flag.test/t".to_string()),
            ..Default::default()
        };

        let config = args.resolve_config().unwrap();
        assert_eq!(config.api_endpoint, "http://flag.test/t");
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_invalid_timeout_flag() {
        assert!(Args::try_parse_from(["free-translate", "--timeout-ms", "soon"]).is_err());
    }
}
