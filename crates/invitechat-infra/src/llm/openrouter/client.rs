//! OpenRouterClient -- concrete [`CompletionClient`] for OpenRouter.
//!
//! Sends one non-streaming request per call with the fixed persona prompt
//! and the latest user text. No retry.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use tracing::{Instrument, debug, field, info_span, warn};

use invitechat_core::llm::client::CompletionClient;
use invitechat_core::llm::prompt::system_prompt;
use invitechat_observe::genai_attrs::{GEN_AI_RESPONSE_ID, OP_CHAT, PROVIDER_OPENROUTER};
use invitechat_types::config::UpstreamConfig;
use invitechat_types::error::CompletionError;

use super::types::{ChatCompletionRequest, ChatCompletionResponse, WireMessage};

/// Longest slice of an upstream error body kept in logs and error values.
const MAX_ERROR_BODY: usize = 512;

/// OpenRouter chat-completions client.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the `Authorization` header.
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
    referer: String,
    title: String,
    system_prompt: String,
}

impl OpenRouterClient {
    /// Create a client from upstream settings and an optional credential.
    ///
    /// A missing credential is not an error here; every `complete` call
    /// reports it as [`CompletionError::Misconfigured`] instead.
    pub fn new(
        config: &UpstreamConfig,
        api_key: Option<SecretString>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        // 0 means no overall deadline.
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            referer: config.referer.clone(),
            title: config.title.clone(),
            system_prompt: system_prompt(),
        })
    }

    /// Whether a credential was supplied at startup.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    async fn send(&self, api_key: &SecretString, user_text: &str) -> Result<String, CompletionError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                WireMessage {
                    role: "user",
                    content: user_text,
                },
            ],
        };
        let payload = serde_json::to_vec(&body)
            .map_err(|e| CompletionError::Failed(format!("failed to encode request: {e}")))?;

        let response = self
            .client
            .post(self.url())
            .header(AUTHORIZATION, format!("Bearer {}", api_key.expose_secret()))
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(payload)
            .send()
            .await
            .map_err(|e| CompletionError::Failed(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CompletionError::Failed(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            let snippet = truncate(&text);
            warn!(status = status.as_u16(), body = %snippet, "upstream returned error status");
            return Err(CompletionError::Failed(format!("HTTP {status}: {snippet}")));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text).map_err(|e| {
            warn!(error = %e, body = %truncate(&text), "upstream returned malformed body");
            CompletionError::Failed(format!("invalid JSON from upstream: {e}"))
        })?;

        if let Some(id) = &parsed.id {
            tracing::Span::current().record(GEN_AI_RESPONSE_ID, id.as_str());
        }

        let provider_error = parsed.error.as_ref().map(|e| e.message.clone());
        match parsed.first_content() {
            Some(content) => {
                debug!(reply_chars = content.chars().count(), "completion received");
                Ok(content)
            }
            None => Err(CompletionError::Failed(match provider_error {
                Some(message) => format!("no choices in response: {message}"),
                None => "no choices in response".to_string(),
            })),
        }
    }
}

impl CompletionClient for OpenRouterClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, user_text: &str) -> Result<String, CompletionError> {
        let Some(api_key) = &self.api_key else {
            return Err(CompletionError::Misconfigured);
        };

        let span = info_span!(
            "chat",
            gen_ai.operation.name = OP_CHAT,
            gen_ai.provider.name = PROVIDER_OPENROUTER,
            gen_ai.request.model = %self.model,
            gen_ai.response.id = field::Empty,
        );

        self.send(api_key, user_text).instrument(span).await
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_ERROR_BODY).collect()
}
