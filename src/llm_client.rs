//! Client for the upstream chat-completions API.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::RelayConfig;

/// Failure modes of one upstream call. The server maps each variant to its
/// own response body.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The completion API reported an application-level error.
    #[error("{message}")]
    Upstream { message: String },
    /// The payload parsed as JSON but carried no usable choice.
    #[error("unexpected upstream response format")]
    UnexpectedFormat { raw: Value },
    /// Network failure, or a body that was not JSON.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

/// Completion API client. One reqwest client for the process lifetime.
pub struct LlmClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Sends the prompt as a single user message and extracts the first
    /// choice's content. Exactly one attempt, no retries.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        debug!("Calling completion API: model={}", self.model);

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&CompletionRequest {
                model: self.model.clone(),
                messages: vec![Message {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                }],
            })
            .send()
            .await?;

        // The upstream contract guarantees neither a 2xx status nor a fixed
        // shape; branch on the payload itself, keeping the raw value around
        // so malformed successes can be surfaced for diagnosis.
        let body: Value = resp.json().await?;

        if let Some(err) = body.get("error") {
            let message = err
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Completion API failed")
                .to_string();
            return Err(LlmError::Upstream { message });
        }

        let content = body
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.pointer("/message/content"))
            .and_then(Value::as_str);

        match content {
            Some(text) => {
                debug!("Completion response: {}", text);
                Ok(text.to_string())
            }
            None => Err(LlmError::UnexpectedFormat { raw: body }),
        }
    }
}
