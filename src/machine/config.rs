//! Runner configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid machine configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for a [`StateMachine`](super::StateMachine).
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use tickstate::machine::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{ "name": "goblin" }"#).unwrap();
/// assert_eq!(config.name, "goblin");
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, Some(256));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Label used in log spans
    pub name: String,

    /// Whether fired transitions are recorded
    pub record_history: bool,

    /// Maximum number of records kept; `None` keeps everything
    pub history_limit: Option<usize>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            name: "machine".to_string(),
            record_history: true,
            history_limit: Some(256),
        }
    }
}

impl MachineConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
