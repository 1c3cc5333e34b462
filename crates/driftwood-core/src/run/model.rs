//! Run and transcript types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Speaker label reserved for the mediator's reply.
///
/// Downstream consumers key off this literal to tell mediator output apart
/// from participant output, whatever name the system prompt gives the persona.
pub const MEDIATOR_SPEAKER: &str = "AI";

/// A single line of a simulation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationLogEntry {
    /// Participant name, or [`MEDIATOR_SPEAKER`]
    pub speaker: String,
    pub content: String,
    /// Wall-clock capture at append time
    pub timestamp: DateTime<Utc>,
}

impl ConversationLogEntry {
    /// An entry spoken by a participant, stamped now.
    pub fn participant(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            speaker: name.into(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// An entry spoken by the mediator, stamped now.
    pub fn mediator(content: impl Into<String>) -> Self {
        Self {
            speaker: MEDIATOR_SPEAKER.to_string(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_mediator(&self) -> bool {
        self.speaker == MEDIATOR_SPEAKER
    }
}

/// A persisted simulation run.
///
/// `log` is fixed at creation; `starred` is the only field that changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Unique identifier (UUID format)
    pub id: String,
    /// ID of the scenario the run was produced from
    pub scenario_id: String,
    /// Creation time (UTC)
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub starred: bool,
    /// Ordered transcript
    pub log: Vec<ConversationLogEntry>,
}

impl Run {
    /// Creates an unstarred run with a fresh UUID.
    pub fn new(scenario_id: impl Into<String>, log: Vec<ConversationLogEntry>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            scenario_id: scenario_id.into(),
            timestamp: Utc::now(),
            starred: false,
            log,
        }
    }
}

/// Run metadata for history listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub id: String,
    pub scenario_id: String,
    pub timestamp: DateTime<Utc>,
    pub starred: bool,
    /// Name of the parent scenario, if it can still be found
    pub scenario_name: Option<String>,
}

impl RunSummary {
    pub fn from_run(run: &Run, scenario_name: Option<String>) -> Self {
        Self {
            id: run.id.clone(),
            scenario_id: run.scenario_id.clone(),
            timestamp: run.timestamp,
            starred: run.starred,
            scenario_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_is_unstarred() {
        let run = Run::new("scenario-1", vec![ConversationLogEntry::mediator("hi")]);
        assert!(!run.starred);
        assert!(Uuid::parse_str(&run.id).is_ok());
        assert_eq!(run.scenario_id, "scenario-1");
    }

    #[test]
    fn test_entry_constructors() {
        let sam = ConversationLogEntry::participant("Sam", "Hello");
        assert_eq!(sam.speaker, "Sam");
        assert!(!sam.is_mediator());

        let ai = ConversationLogEntry::mediator("Welcome");
        assert_eq!(ai.speaker, MEDIATOR_SPEAKER);
        assert!(ai.is_mediator());
    }

    #[test]
    fn test_starred_defaults_to_false_when_missing() {
        let json = r#"{
            "id": "1",
            "scenario_id": "2",
            "timestamp": "2025-01-01T00:00:00Z",
            "log": []
        }"#;
        let run: Run = serde_json::from_str(json).unwrap();
        assert!(!run.starred);
    }

    #[test]
    fn test_summary_copies_metadata() {
        let mut run = Run::new("s", vec![]);
        run.starred = true;
        let summary = RunSummary::from_run(&run, Some("Team Conflict".to_string()));
        assert_eq!(summary.id, run.id);
        assert!(summary.starred);
        assert_eq!(summary.scenario_name.as_deref(), Some("Team Conflict"));
    }
}
