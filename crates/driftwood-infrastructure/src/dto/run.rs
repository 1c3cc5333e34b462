//! Run DTOs and migrations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use driftwood_core::error::Result;
use driftwood_core::run::{ConversationLogEntry, Run};

/// Represents V1.0.0 of a transcript entry for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationLogEntryV1_0_0 {
    pub speaker: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Represents V1.0.0 of the run schema for serialization.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct RunV1_0_0 {
    /// Unique run identifier (UUID format).
    pub id: String,
    pub scenario_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub starred: bool,
    pub log: Vec<ConversationLogEntryV1_0_0>,
}

impl IntoDomain<Run> for RunV1_0_0 {
    fn into_domain(self) -> Run {
        Run {
            id: self.id,
            scenario_id: self.scenario_id,
            timestamp: self.timestamp,
            starred: self.starred,
            log: self
                .log
                .into_iter()
                .map(|entry| ConversationLogEntry {
                    speaker: entry.speaker,
                    content: entry.content,
                    timestamp: entry.timestamp,
                })
                .collect(),
        }
    }
}

impl FromDomain<Run> for RunV1_0_0 {
    fn from_domain(run: Run) -> Self {
        RunV1_0_0 {
            id: run.id,
            scenario_id: run.scenario_id,
            timestamp: run.timestamp,
            starred: run.starred,
            log: run
                .log
                .into_iter()
                .map(|entry| ConversationLogEntryV1_0_0 {
                    speaker: entry.speaker,
                    content: entry.content,
                    timestamp: entry.timestamp,
                })
                .collect(),
        }
    }
}

/// Creates a Migrator for Run records.
///
/// # Migration Path
///
/// - V1.0.0 → Run
pub fn create_run_migrator() -> Result<version_migrate::Migrator> {
    let mut migrator = version_migrate::Migrator::builder().build();

    let run_path = version_migrate::Migrator::define("run")
        .from::<RunV1_0_0>()
        .into_with_save::<Run>();

    migrator.register(run_path)?;
    Ok(migrator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_migration_defaults_starred() {
        let migrator = create_run_migrator().unwrap();
        let toml_str = r#"
version = "1.0.0"
id = "660e8400-e29b-41d4-a716-446655440001"
scenario_id = "550e8400-e29b-41d4-a716-446655440000"
timestamp = "2025-01-01T00:01:00Z"

[[log]]
speaker = "Sam"
content = "Hello"
timestamp = "2025-01-01T00:00:00Z"

[[log]]
speaker = "AI"
content = "Welcome, Sam."
timestamp = "2025-01-01T00:00:30Z"
"#;
        let toml_value: toml::Value = toml::from_str(toml_str).unwrap();

        let result: std::result::Result<Run, _> = migrator.load_flat_from("run", toml_value);

        assert!(result.is_ok(), "Migration failed: {:?}", result.err());
        let run = result.unwrap();
        assert!(!run.starred);
        assert_eq!(run.log.len(), 2);
        assert_eq!(run.log[1].speaker, "AI");
    }
}
