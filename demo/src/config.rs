use std::str::FromStr;

use patterns_observer::SubjectConfig;
use thiserror::Error;
use tracing::Level;

/// Environment variable holding a JSON `SubjectConfig`
pub const CONFIG_VAR: &str = "PATTERNS_CONFIG";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PATTERNS_CONFIG: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a subject config from its raw JSON form; no value means the defaults
pub fn subject_config(raw: Option<&str>) -> Result<SubjectConfig, ConfigError> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => Ok(serde_json::from_str(raw)?),
        None => Ok(SubjectConfig::default()),
    }
}

/// Parses a tracing level, falling back to INFO for missing or unrecognised values
pub fn log_level(raw: Option<&str>) -> Level { raw.and_then(|raw| Level::from_str(raw.trim()).ok()).unwrap_or(Level::INFO) }
