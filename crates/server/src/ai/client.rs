//! Claude API client for the Anthropic Messages API

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use triage_core::UpstreamError;

use super::provider::CompletionProvider;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// Model consulted when `TRIAGE_MODEL` is not set
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";

const MAX_TOKENS: u32 = 1024;

/// Client for the Anthropic Claude Messages API
#[derive(Clone)]
pub struct ClaudeClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

/// A message in the conversation
#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Request body for the Messages API
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message>,
}

/// Response from the Messages API
#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

/// Content block within a response; only text blocks are consumed
#[derive(Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Error detail from the Messages API
#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl ClaudeClient {
    /// Create a new client with the given API key, model id, and per-request
    /// timeout. The timeout covers the whole call; an expired call surfaces
    /// as [`UpstreamError::Transport`].
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to construct HTTP client");

        Self {
            http,
            api_key,
            model,
        }
    }

    /// Send a single user message under a system prompt, return the text reply
    async fn send(&self, system: &str, user: &str) -> Result<String, UpstreamError> {
        let request = ApiRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            // Deterministic output for identical prompts
            temperature: 0.0,
            system,
            messages: vec![Message {
                role: "user",
                content: user.to_string(),
            }],
        };

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(UpstreamError::Api { status, message });
        }

        let response: ApiResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Transport(format!("Failed to parse response: {e}")))?;

        response
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .ok_or_else(|| UpstreamError::UnusableOutput("No text content in response".into()))
    }
}

#[async_trait]
impl CompletionProvider for ClaudeClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, UpstreamError> {
        self.send(system, user).await
    }
}
