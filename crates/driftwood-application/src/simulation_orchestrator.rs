//! Single-round group mediation.
//!
//! Every participant's opening statement is recorded first, then the
//! mediator answers the whole group in one completion call. A failed call
//! never fails the simulation; it becomes the mediator's line instead.

use std::sync::Arc;
use std::time::Duration;

use driftwood_core::completion::{CompletionClient, CompletionError, CompletionRequest};
use driftwood_core::error::Result;
use driftwood_core::run::ConversationLogEntry;
use driftwood_core::scenario::{ModelSettings, Participant, validate_participants};

use crate::prompt::{build_context, build_user_message};

/// Prefix that marks a mediator entry as a contained failure.
pub const AI_ERROR_PREFIX: &str = "[AI Error: Unable to generate response - ";

/// Produces simulation transcripts from participants and model settings.
#[derive(Clone)]
pub struct SimulationOrchestrator {
    client: Arc<dyn CompletionClient>,
    request_timeout: Duration,
}

impl SimulationOrchestrator {
    pub fn new(client: Arc<dyn CompletionClient>, request_timeout: Duration) -> Self {
        Self {
            client,
            request_timeout,
        }
    }

    /// Runs one mediation round.
    ///
    /// Returns `participants.len() + 1` entries, the last spoken by the
    /// mediator. Only invalid input is an error.
    pub async fn run_simulation(
        &self,
        participants: &[Participant],
        system_prompt: &str,
        settings: &ModelSettings,
    ) -> Result<Vec<ConversationLogEntry>> {
        validate_participants(participants)?;
        settings.validate()?;

        let context = build_context(system_prompt, participants);

        let mut log: Vec<ConversationLogEntry> = participants
            .iter()
            .map(|p| ConversationLogEntry::participant(&p.name, &p.initial_message))
            .collect();

        let request = CompletionRequest {
            system: context,
            user: build_user_message(&log),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        };
        tracing::debug!(
            participants = participants.len(),
            context_chars = request.system.len(),
            user_chars = request.user.len(),
            model = %request.model,
            "Requesting mediator response"
        );

        let content = match self.complete(&request).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "Mediator completion failed; recording error in transcript");
                format!("{AI_ERROR_PREFIX}{err}]")
            }
        };
        log.push(ConversationLogEntry::mediator(content));

        Ok(log)
    }

    async fn complete(&self, request: &CompletionRequest) -> std::result::Result<String, CompletionError> {
        let reply = tokio::time::timeout(self.request_timeout, self.client.complete(request))
            .await
            .map_err(|_| CompletionError::Timeout(self.request_timeout))??;

        let trimmed = reply.trim();
        if trimmed.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }
        Ok(trimmed.to_string())
    }
}
