//! Completion capability boundary.
//!
//! The orchestrator talks to a language model only through [`CompletionClient`].
//! Failures come back as a tagged [`CompletionError`] so the caller can contain
//! them with a plain `match`.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// One chat completion call: a system instruction, a user turn, and the
/// model settings passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Why a completion call produced no usable text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompletionError {
    /// The client has no credentials to call the provider with
    #[error("completion provider is not configured: {0}")]
    NotConfigured(String),

    /// Network or connection failure before a response arrived
    #[error("request failed: {0}")]
    Transport(String),

    /// Provider rejected the credentials
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Provider throttled the request
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success response from the provider
    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// The response body could not be interpreted
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The provider answered with no text
    #[error("provider returned an empty response")]
    EmptyResponse,

    /// No answer within the request timeout
    #[error("request timed out after {}s", .0.as_secs_f32())]
    Timeout(Duration),
}

/// A language-model chat completion capability.
///
/// Implementations hold their credentials from construction; nothing is read
/// from ambient state per call.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_human_readable() {
        let err = CompletionError::Provider {
            status: 500,
            message: "upstream exploded".to_string(),
        };
        assert_eq!(err.to_string(), "provider returned 500: upstream exploded");

        let timeout = CompletionError::Timeout(Duration::from_secs(30));
        assert_eq!(timeout.to_string(), "request timed out after 30s");
    }
}
