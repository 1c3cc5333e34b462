//! Domain layer for Driftwood.
//!
//! Holds the scenario and run models, the repository and completion traits
//! that the other crates implement, and the shared error type.

pub mod completion;
pub mod config;
pub mod error;
pub mod repository;
pub mod run;
pub mod scenario;

// Re-export common error type
pub use error::DriftwoodError;

use uuid::Uuid;

/// Parses an entity identifier, rejecting anything that is not a UUID.
///
/// Returns the canonical hyphenated lowercase form so lookups match the keys
/// repositories were written with.
pub fn parse_id(entity_type: &'static str, raw: &str) -> error::Result<String> {
    Uuid::parse_str(raw.trim())
        .map(|id| id.to_string())
        .map_err(|_| DriftwoodError::InvalidIdentifier(format!("Invalid {entity_type} ID format")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_uuid() {
        let id = parse_id("run", "550E8400-E29B-41D4-A716-446655440000").unwrap();
        assert_eq!(id, "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = parse_id("run", "not-a-uuid").unwrap_err();
        assert_eq!(err.to_string(), "Invalid identifier: Invalid run ID format");
    }
}
