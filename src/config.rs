//! Analysis configuration: candidate labels, likely-voter code and window size.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings shared by the queries and the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Label for the first result column
    pub candidate_a: String,
    /// Label for the second result column
    pub candidate_b: String,
    /// Sample type counted by the likely-voter average
    pub likely_voter_code: String,
    /// Records in each of the early and late history windows
    pub window: usize,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            candidate_a: "Harris".to_string(),
            candidate_b: "Trump".to_string(),
            likely_voter_code: "LV".to_string(),
            window: 30,
        }
    }
}

impl PollConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = PollConfig::default();
        assert_eq!(config.candidate_a, "Harris");
        assert_eq!(config.candidate_b, "Trump");
        assert_eq!(config.likely_voter_code, "LV");
        assert_eq!(config.window, 30);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PollConfig::from_json_str(r#"{"window": 10, "candidate_b": "Vance"}"#).unwrap();
        assert_eq!(config.window, 10);
        assert_eq!(config.candidate_b, "Vance");
        assert_eq!(config.candidate_a, "Harris");
        assert_eq!(config.likely_voter_code, "LV");
    }

    #[test]
    fn test_from_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, r#"{{"likely_voter_code": "RV"}}"#).unwrap();

        let config = PollConfig::from_json_file(tmp.path()).unwrap();
        assert_eq!(config.likely_voter_code, "RV");
    }

    #[test]
    fn test_bad_json() {
        let err = PollConfig::from_json_str("{window: }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));

        let err = PollConfig::from_json_file("missing/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
