//! HTTP client for the hosted speech-recognition service.

use std::path::Path;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::error::TranscribeError;

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    transcript: String,
}

/// Client for the speech-recognition endpoint: POSTs WAV bytes to
/// `{base_url}/recognize` and reads back `{"transcript": "..."}`.
pub struct SpeechClient {
    client: reqwest::Client,
    base_url: String,
}

impl SpeechClient {
    /// Creates a new client for the given service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`TranscribeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, TranscribeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("scamwatch/0.1 (speech-to-text)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Submit a WAV file for recognition and return the transcript text.
    ///
    /// One attempt, no retry.
    ///
    /// # Errors
    ///
    /// - [`TranscribeError::Io`] if the WAV file cannot be read.
    /// - [`TranscribeError::Api`] if the service returns a non-2xx status.
    /// - [`TranscribeError::Http`] on network failure or a malformed reply.
    pub async fn transcribe_wav(&self, wav_path: &Path) -> Result<String, TranscribeError> {
        let bytes = std::fs::read(wav_path)?;
        let url = format!("{}/recognize", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "audio/wav")
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscribeError::Api { status, body });
        }

        let parsed: RecognizeResponse = response.json().await?;
        Ok(parsed.transcript)
    }
}
