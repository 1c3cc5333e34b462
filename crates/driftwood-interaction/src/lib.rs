//! Language-model adapters for Driftwood.
//!
//! Implements [`driftwood_core::completion::CompletionClient`] over the OpenAI
//! chat completions REST API.

pub mod openai_completion_client;

pub use openai_completion_client::{OpenAICompletionClient, UnconfiguredCompletionClient};
