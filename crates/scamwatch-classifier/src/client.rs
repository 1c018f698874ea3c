//! HTTP client for the Groq chat-completions API.

use std::time::Duration;

use scamwatch_core::Verdict;

use crate::error::ClassifyError;
use crate::extract::extract_fenced_json;
use crate::prompt::{build_prompt, SYSTEM_PROMPT};
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const MODEL: &str = "llama-3.1-8b-instant";
/// Deterministic-leaning sampling: the verdict should not flip between runs.
const TEMPERATURE: f32 = 0.1;
const MAX_TOKENS: u32 = 1000;

/// Client for the Groq chat-completions endpoint.
///
/// Use [`GroqClient::new`] for production or [`GroqClient::with_base_url`] to
/// point at a mock server in tests.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    /// Creates a new client pointed at the production Groq API.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, ClassifyError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ClassifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("scamwatch/0.1 (scam-classification)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Classify `text` for scam indicators.
    ///
    /// Never fails outright: remote-call failures, empty replies, missing
    /// fenced JSON, and malformed JSON each produce a degraded [`Verdict`]
    /// with `is_scam = None` and a populated `error`. No retry is attempted;
    /// each failure is terminal for this single call.
    pub async fn classify(&self, text: &str) -> Verdict {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_owned(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(text),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = match self.chat(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "API call failed");
                return Verdict::degraded(
                    format!("Analysis failed: {e}"),
                    "Unable to complete analysis",
                );
            }
        };

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty());

        let Some(content) = content else {
            return Verdict::degraded(
                "Empty or invalid response from API",
                "Unable to complete analysis",
            );
        };

        tracing::debug!(reply_len = content.len(), "raw API response received");

        let Some(json_block) = extract_fenced_json(&content) else {
            return Verdict::degraded(
                "No valid JSON found in API response",
                "Unable to extract JSON from response",
            );
        };

        match serde_json::from_str::<Verdict>(json_block) {
            Ok(verdict) => verdict,
            Err(e) => {
                tracing::error!(error = %e, "JSON decode error");
                Verdict::degraded(
                    format!("JSON decode error: {e}"),
                    "Unable to parse API response",
                )
            }
        }
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClassifyError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifyError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}
