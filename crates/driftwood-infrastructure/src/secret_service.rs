//! Secret loading.
//!
//! Priority:
//! 1. `~/.config/driftwood/secret.json` (or an explicit path)
//! 2. Environment variables (`OPENAI_API_KEY`, `OPENAI_BASE_URL`)
//!
//! Secret values are never logged.

use crate::paths::DriftwoodPaths;
use driftwood_core::config::{OpenAIConfig, SecretConfig};
use driftwood_core::error::{DriftwoodError, Result};
use std::io::ErrorKind;
use std::path::Path;

const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";

pub struct SecretService;

impl SecretService {
    /// Resolves the OpenAI configuration from the secret file, then the
    /// process environment.
    ///
    /// Returns `Ok(None)` when neither source supplies a non-empty key.
    pub fn resolve_openai(path: Option<&Path>) -> Result<Option<OpenAIConfig>> {
        let secrets = Self::load(path)?;
        Ok(Self::resolve_openai_with(secrets, |name| {
            std::env::var(name).ok()
        }))
    }

    /// Reads `secret.json`. A missing file is an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<SecretConfig> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match DriftwoodPaths::secret_file() {
                Ok(path) => path,
                Err(_) => return Ok(SecretConfig::default()),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                DriftwoodError::config(format!(
                    "Failed to parse secret file at {}: {}",
                    path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(SecretConfig::default()),
            Err(e) => Err(DriftwoodError::config(format!(
                "Failed to read secret file at {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn resolve_openai_with(
        secrets: SecretConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Option<OpenAIConfig> {
        if let Some(config) = secrets.openai.filter(|c| !c.api_key.trim().is_empty()) {
            tracing::debug!("Using OpenAI credentials from secret file");
            return Some(config);
        }

        let api_key = env(OPENAI_API_KEY_VAR).filter(|key| !key.trim().is_empty())?;
        tracing::debug!("Using OpenAI credentials from environment");
        Some(OpenAIConfig {
            api_key,
            base_url: env(OPENAI_BASE_URL_VAR),
        })
    }
}
