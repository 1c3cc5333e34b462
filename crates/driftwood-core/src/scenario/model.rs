//! Scenario domain model.
//!
//! Represents a saved mediation setup. Scenarios are immutable once created;
//! "create" always inserts a new record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{DriftwoodError, Result};
use crate::run::MEDIATOR_SPEAKER;

const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 400;

/// A participant profile inside a scenario.
///
/// The `name` doubles as the speaker identity in the transcript and as the
/// label the mediator sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Speaker name, unique within a scenario
    pub name: String,
    /// Free-text role description
    pub role: String,
    /// Free-text description of how this participant sees the situation
    pub perspective: String,
    /// Emotional or behavioral tags, rendered comma-joined in the context
    #[serde(default)]
    pub meta_tags: Vec<String>,
    /// Opening statement recorded verbatim in the transcript
    pub initial_message: String,
}

impl Participant {
    /// Checks the fields the orchestrator relies on.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DriftwoodError::validation(
                "Participant name is required and cannot be empty",
            ));
        }
        if self.name == MEDIATOR_SPEAKER {
            return Err(DriftwoodError::validation(format!(
                "Participant name '{MEDIATOR_SPEAKER}' is reserved for the mediator"
            )));
        }
        if self.initial_message.trim().is_empty() {
            return Err(DriftwoodError::validation(format!(
                "Participant '{}' must have a non-empty initial message",
                self.name
            )));
        }
        Ok(())
    }
}

/// Validates a participant list as a whole.
///
/// Requires at least one participant, each individually valid, with no two
/// sharing a name.
pub fn validate_participants(participants: &[Participant]) -> Result<()> {
    if participants.is_empty() {
        return Err(DriftwoodError::validation(
            "A scenario needs at least one participant",
        ));
    }

    let mut seen = HashSet::with_capacity(participants.len());
    for participant in participants {
        participant.validate()?;
        if !seen.insert(participant.name.as_str()) {
            return Err(DriftwoodError::validation(format!(
                "Duplicate participant name: '{}'",
                participant.name
            )));
        }
    }
    Ok(())
}

/// Model configuration passed through to the completion capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature in `[0.0, 2.0]`
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Upper bound on generated tokens, must be positive
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl ModelSettings {
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(DriftwoodError::validation("Model name cannot be empty"));
        }
        if !self.temperature.is_finite() || !(0.0..=2.0).contains(&self.temperature) {
            return Err(DriftwoodError::validation(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(DriftwoodError::validation(
                "max_tokens must be a positive integer",
            ));
        }
        Ok(())
    }
}

/// A persisted scenario definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered participants; order controls transcript order
    pub participants: Vec<Participant>,
    /// Instructions for the mediator persona
    pub system_prompt: String,
    /// Model configuration
    pub settings: ModelSettings,
    /// Creation time (UTC)
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(name: &str, message: &str) -> Participant {
        Participant {
            name: name.to_string(),
            role: "Role".to_string(),
            perspective: "Perspective".to_string(),
            meta_tags: vec![],
            initial_message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_participants() {
        let participants = vec![participant("Alice", "Hi"), participant("Bob", "Hello")];
        assert!(validate_participants(&participants).is_ok());
    }

    #[test]
    fn test_empty_participant_list_is_rejected() {
        let err = validate_participants(&[]).unwrap_err();
        assert!(matches!(err, DriftwoodError::Validation(_)));
    }

    #[test]
    fn test_empty_initial_message_is_rejected() {
        let err = validate_participants(&[participant("Alice", "   ")]).unwrap_err();
        assert!(err.to_string().contains("Alice"));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let participants = vec![participant("Alice", "Hi"), participant("Alice", "Again")];
        let err = validate_participants(&participants).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_mediator_name_is_reserved() {
        let err = validate_participants(&[participant("AI", "Hi")]).unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_settings_defaults_from_empty_json() {
        let settings: ModelSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ModelSettings::default());
        assert_eq!(settings.model, "gpt-4");
        assert_eq!(settings.max_tokens, 400);
    }

    #[test]
    fn test_settings_range_checks() {
        let mut settings = ModelSettings::default();
        settings.temperature = 2.5;
        assert!(settings.validate().is_err());

        settings.temperature = 2.0;
        assert!(settings.validate().is_ok());

        settings.max_tokens = 0;
        assert!(settings.validate().is_err());

        settings.max_tokens = 1;
        settings.temperature = f32::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_meta_tags_default_to_empty() {
        let json = r#"{"name":"Sam","role":"r","perspective":"p","initial_message":"Hello"}"#;
        let parsed: Participant = serde_json::from_str(json).unwrap();
        assert!(parsed.meta_tags.is_empty());
    }
}
