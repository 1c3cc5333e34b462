//! OpenAICompletionClient - Direct REST API implementation for OpenAI chat completions.
//!
//! Sends one system message and one user message per call and returns the
//! text of the first choice.

use async_trait::async_trait;
use driftwood_core::completion::{CompletionClient, CompletionError, CompletionRequest};
use driftwood_core::config::OpenAIConfig;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Completion client that talks to the OpenAI HTTP API (or any
/// OpenAI-compatible gateway via `base_url`).
#[derive(Clone)]
pub struct OpenAICompletionClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAICompletionClient {
    /// Creates a client from explicit configuration.
    ///
    /// `timeout` bounds each HTTP exchange at the transport level.
    pub fn new(config: OpenAIConfig, timeout: Duration) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| {
                CompletionError::Transport(format!("Failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_send_error(&self, err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout(self.timeout)
        } else {
            CompletionError::Transport(format!("OpenAI API request failed: {err}"))
        }
    }

    async fn send_request(&self, body: &ChatCompletionRequest<'_>) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| self.map_send_error(err))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            CompletionError::MalformedResponse(format!("Failed to parse OpenAI response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionClient for OpenAICompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let body = build_request_body(request);
        tracing::debug!(
            model = %request.model,
            system_chars = request.system.len(),
            user_chars = request.user.len(),
            "Sending chat completion request"
        );
        self.send_request(&body).await
    }
}

/// Completion client used when no API key is configured.
///
/// Every call fails with [`CompletionError::NotConfigured`], which the
/// orchestrator records in the transcript like any other failure.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredCompletionClient;

#[async_trait]
impl CompletionClient for UnconfiguredCompletionClient {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, CompletionError> {
        Err(CompletionError::NotConfigured(
            "OPENAI_API_KEY not found in secret.json or environment variables".into(),
        ))
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn build_request_body(request: &CompletionRequest) -> ChatCompletionRequest<'_> {
    ChatCompletionRequest {
        model: &request.model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: &request.system,
            },
            ChatMessage {
                role: "user",
                content: &request.user,
            },
        ],
        temperature: request.temperature,
        max_tokens: request.max_tokens,
    }
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String, CompletionError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| {
            CompletionError::MalformedResponse("OpenAI API returned no choices".into())
        })?
        .message
        .content
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(CompletionError::EmptyResponse);
    }
    Ok(content)
}

fn map_http_error(status: StatusCode, body: &str) -> CompletionError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited(message),
        _ => CompletionError::Provider {
            status: status.as_u16(),
            message,
        },
    }
}
