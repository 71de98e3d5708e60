//! Engine configuration loadable from JSON.

use crate::workflow::Script;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings applied when an engine is built. Every field is optional.
///
/// ```rust
/// use rma_workflow::config::EngineConfig;
/// use std::time::Duration;
///
/// let config = EngineConfig::from_json(r#"{"operation_delay_ms": 250}"#).unwrap();
/// assert_eq!(config.operation_delay(), Duration::from_millis(250));
/// assert!(config.states.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Delay before every facade result resolves.
    pub operation_delay_ms: u64,
    /// Workflow script installed at startup.
    pub states: Option<Script>,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn operation_delay(&self) -> Duration {
        Duration::from_millis(self.operation_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RmaState;

    #[test]
    fn empty_object_uses_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.operation_delay(), Duration::ZERO);
    }

    #[test]
    fn states_are_parsed_as_a_script() {
        let config = EngineConfig::from_json(
            r#"{"states": [{"state": "WelcomeScreen"}, {"state": "ConfigureNetwork", "error": "Ok"}]}"#,
        )
        .unwrap();

        let script = config.states.unwrap();
        assert_eq!(script.len(), 2);
        assert_eq!(script.get(1).unwrap().state, RmaState::ConfigureNetwork);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            EngineConfig::from_json("{\"operation_delay_ms\": -1}"),
            Err(ConfigError::Parse(_))
        ));
    }
}
