//! Decode one request, translate it, encode one response

use serde::de::Error as _;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::core::client::Translator;
use crate::core::models::{TranslationRequest, TranslationResponse, AUTO_DETECT};

/// Decode the first JSON value of `input` as a request.
///
/// The value must be an object with string `text` and `to` fields. Anything
/// after the first value is ignored.
pub fn decode_request(input: &[u8]) -> serde_json::Result<TranslationRequest> {
    let mut stream = serde_json::Deserializer::from_slice(input).into_iter::<serde_json::Value>();

    let value = match stream.next() {
        Some(value) => value?,
        None => return Err(serde_json::Error::custom("empty input")),
    };

    if !value.is_object() {
        return Err(serde_json::Error::custom("expected a JSON object"));
    }

    serde_json::from_value(value)
}

/// Serialize a response as one line of JSON
pub fn encode_response(response: &TranslationResponse) -> serde_json::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec(response)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Map raw input to a response, calling `translator` at most once
pub async fn handle(input: &[u8], translator: &dyn Translator) -> TranslationResponse {
    let request = match decode_request(input) {
        Ok(request) => request,
        Err(e) => {
            debug!("Rejecting input: {}", e);
            return TranslationResponse::invalid_input();
        }
    };

    match translator
        .translate(&request.text, AUTO_DETECT, &request.target_lang)
        .await
    {
        Ok(translated) => {
            info!("Translated text into {}", request.target_lang);
            TranslationResponse::success(translated)
        }
        Err(e) => {
            if e.is_transient() {
                warn!("Translation failed (transient): {}", e);
            } else {
                warn!("Translation failed: {}", e);
            }
            TranslationResponse::translation_failed()
        }
    }
}

/// `handle` over bytes: input document in, output document out
pub async fn handle_bytes(input: &[u8], translator: &dyn Translator) -> serde_json::Result<Vec<u8>> {
    let response = handle(input, translator).await;
    encode_response(&response)
}

/// Whether `input` already holds a complete first value, or a syntax error
/// that more bytes cannot repair.
fn first_value_settled(input: &[u8]) -> bool {
    match serde_json::Deserializer::from_slice(input)
        .into_iter::<serde::de::IgnoredAny>()
        .next()
    {
        None => false,
        Some(Ok(_)) => true,
        Some(Err(e)) => !e.is_eof(),
    }
}

/// Read from `reader` until the first JSON value is complete or the stream ends.
pub async fn read_first_value<R: AsyncRead + Unpin>(reader: &mut R) -> std::io::Result<Vec<u8>> {
    let mut input = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        input.extend_from_slice(&chunk[..n]);
        if first_value_settled(&input) {
            break;
        }
    }

    Ok(input)
}

/// Read one request from `reader`, handle it, and write the response to `writer`.
///
/// Reading stops once the first JSON value is complete; the writer side of
/// the input does not need to be closed.
pub async fn run<R, W>(mut reader: R, mut writer: W, translator: &dyn Translator) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let input = read_first_value(&mut reader).await?;
    debug!("Read {} bytes of input", input.len());

    let output = handle_bytes(&input, translator).await.map_err(|e| {
        error!("Failed to encode response: {}", e);
        e
    })?;

    if let Err(e) = write_output(&mut writer, &output).await {
        error!("Failed to write response: {}", e);
        return Err(e.into());
    }

    Ok(())
}

async fn write_output<W: AsyncWrite + Unpin>(writer: &mut W, output: &[u8]) -> std::io::Result<()> {
    writer.write_all(output).await?;
    writer.flush().await
}
