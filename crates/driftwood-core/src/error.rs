//! Error types for the Driftwood application.

use thiserror::Error;

/// A shared error type for the entire Driftwood application.
///
/// Completion failures never appear here. The orchestrator turns them into
/// transcript content (see [`CompletionError`](crate::completion::CompletionError)).
#[derive(Error, Debug, Clone)]
pub enum DriftwoodError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// An identifier that is not a well-formed UUID
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Caller input that fails validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Schema migration error (unknown or unregistered record version)
    #[error("Migration error: {0}")]
    Migration(String),
}

impl DriftwoodError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error means the record file does not exist.
    pub fn is_not_found_or_missing(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io { message } => {
                let lower = message.to_lowercase();
                lower.contains("not found") || lower.contains("no such file")
            }
            _ => false,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for DriftwoodError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DriftwoodError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DriftwoodError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<uuid::Error> for DriftwoodError {
    fn from(err: uuid::Error) -> Self {
        Self::InvalidIdentifier(err.to_string())
    }
}

impl From<version_migrate::MigrationError> for DriftwoodError {
    fn from(err: version_migrate::MigrationError) -> Self {
        use version_migrate::MigrationError;

        match err {
            MigrationError::EntityNotFound(id) => Self::not_found("entity", id),
            MigrationError::DeserializationError(_) | MigrationError::SerializationError(_) => {
                Self::Serialization {
                    format: "migration".to_string(),
                    message: err.to_string(),
                }
            }
            MigrationError::IoError { .. } => Self::Io {
                message: err.to_string(),
            },
            _ => Self::Migration(err.to_string()),
        }
    }
}

/// A type alias for `Result<T, DriftwoodError>`.
pub type Result<T> = std::result::Result<T, DriftwoodError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = DriftwoodError::not_found("run", "abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: run 'abc'");
    }

    #[test]
    fn test_uuid_error_maps_to_invalid_identifier() {
        let err: DriftwoodError = uuid::Uuid::parse_str("not-a-uuid").unwrap_err().into();
        assert!(matches!(err, DriftwoodError::InvalidIdentifier(_)));
    }

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DriftwoodError = io.into();
        match err {
            DriftwoodError::Io { message } => assert!(message.contains("PermissionDenied")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_counts_as_not_found() {
        assert!(DriftwoodError::io("File not found: runs/abc.json").is_not_found_or_missing());
        assert!(DriftwoodError::not_found("run", "abc").is_not_found_or_missing());
        assert!(!DriftwoodError::io("permission denied").is_not_found_or_missing());
        assert!(!DriftwoodError::Migration("unknown version 9.0.0".to_string()).is_not_found_or_missing());
    }
}
