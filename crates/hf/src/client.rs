//! HTTP client for the hosted chat-completion endpoint.
//!
//! Wraps the Hugging Face router's OpenAI-compatible chat-completion API
//! using [`reqwest`]. One [`HfClient`] is built at startup and reused for
//! every request so connections are pooled.

use std::time::Duration;

use crate::extract::{self, ExtractError};

/// Maximum tokens requested per completion.
pub const MAX_TOKENS: u32 = 800;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.9;

/// Nucleus-sampling cutoff sent with every request.
pub const TOP_P: f64 = 0.95;

/// Outbound request timeout. A call that exceeds this fails; there are
/// no retries.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for a chat-completion endpoint.
pub struct HfClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

/// Errors from the chat-completion client.
#[derive(Debug, thiserror::Error)]
pub enum HfApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider reported an error of its own, either inside a 2xx
    /// payload or as a structured non-2xx body.
    #[error("{0}")]
    Upstream(String),

    /// Non-2xx status with no recognizable error body.
    #[error("Chat completion request failed ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response decoded cleanly but no shape produced any text.
    #[error("Model did not return any text.")]
    NoText,
}

impl From<ExtractError> for HfApiError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Upstream(msg) => HfApiError::Upstream(msg),
            ExtractError::NoText => HfApiError::NoText,
        }
    }
}

impl HfClient {
    /// Create a client for a chat-completion endpoint.
    ///
    /// * `api_url` - full endpoint URL, e.g.
    ///   `https://router.huggingface.co/v1/chat/completions`.
    /// * `api_key` - bearer token for the `Authorization` header.
    /// * `model`   - provider model identifier.
    pub fn new(api_url: String, api_key: String, model: String) -> Result<Self, HfApiError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// The caller is responsible for configuring the timeout on the
    /// supplied client.
    pub fn with_client(
        client: reqwest::Client,
        api_url: String,
        api_key: String,
        model: String,
    ) -> Self {
        Self {
            client,
            api_url,
            api_key,
            model,
        }
    }

    /// Model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a prompt and return the generated story text.
    ///
    /// Posts a single-user-message chat completion with fixed sampling
    /// parameters. Non-2xx responses carrying a structured `error` body
    /// surface the provider's message; otherwise the raw status and body
    /// are reported. Successful payloads go through
    /// [`extract::extract_story_text`].
    pub async fn generate(&self, prompt: &str) -> Result<String, HfApiError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt,
                }
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
            "top_p": TOP_P,
        });

        tracing::debug!(model = %self.model, "Sending chat completion request");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "Chat completion request rejected");

            if let Ok(payload) = serde_json::from_str::<serde_json::Value>(&body) {
                if let Some(message) = extract::upstream_error(&payload) {
                    return Err(HfApiError::Upstream(message));
                }
            }
            return Err(HfApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response.json().await?;
        Ok(extract::extract_story_text(&payload)?)
    }
}
