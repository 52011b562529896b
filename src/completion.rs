//! Remote Assessment Invoker
//!
//! Anthropic Messages API client used by the remote strategy.
//! Uses a long-lived reqwest::Client for connection pooling.
//! Every failure is folded into `Completion::Failed`; nothing propagates
//! past this module.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use crate::config::CompletionConfig;
use crate::error::AssessmentError;
use crate::prompts::Feature;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Outcome of one remote completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// First text block of the response.
    Text(String),
    /// Why the call produced no text.
    Failed(String),
}

/// Seam between the assessment service and the remote model.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str, feature: Feature) -> Completion;
}

/// Reusable Anthropic client (connection-pooled)
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(config: &CompletionConfig) -> crate::Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request(&self, prompt: &str, max_tokens: u32) -> crate::Result<String> {
        if self.api_key.is_empty() {
            return Err(AssessmentError::Config(
                "ANTHROPIC_API_KEY not configured".to_string(),
            ));
        }

        let request = MessagesRequest {
            model: &self.model,
            max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssessmentError::Upstream(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AssessmentError::Upstream(format!(
                "API returned {}: {}",
                status,
                extract_error_message(&error_text)
            )));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AssessmentError::Upstream(format!("malformed response: {}", e)))?;

        first_text(body)
    }
}

#[async_trait]
impl CompletionBackend for AnthropicClient {
    async fn complete(&self, prompt: &str, feature: Feature) -> Completion {
        info!(feature = feature.as_str(), model = %self.model, "Calling completion API");

        match self.request(prompt, feature.max_tokens()).await {
            Ok(text) => {
                info!(feature = feature.as_str(), chars = text.len(), "Completion received");
                Completion::Text(text)
            }
            Err(e) => {
                error!(feature = feature.as_str(), "Completion failed: {}", e);
                Completion::Failed(e.to_string())
            }
        }
    }
}

fn first_text(body: MessagesResponse) -> crate::Result<String> {
    body.content
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
        .ok_or_else(|| AssessmentError::Upstream("empty response from completion API".to_string()))
}

/// Pull `error.message` out of an API error body, or return the body as is.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
