//! The scripted sequence of backend responses.

use crate::core::{RmaState, StateResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Script is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered list of state results the engine hands out as transitions
/// succeed. Entries are consumed strictly in order.
///
/// # Example
///
/// ```rust
/// use rma_workflow::workflow::Script;
/// use rma_workflow::RmaState;
///
/// let script = Script::from_json(
///     r#"[{"state": "WelcomeScreen"}, {"state": "UpdateOs", "can_go_back": true}]"#,
/// )
/// .unwrap();
///
/// assert_eq!(script.len(), 2);
/// assert_eq!(script.get(1).unwrap().state, RmaState::UpdateOs);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    entries: Vec<StateResult>,
}

impl Script {
    pub fn new(entries: Vec<StateResult>) -> Self {
        Self { entries }
    }

    /// Script where every entry is `Ok` with both flags cleared.
    pub fn from_states<I>(states: I) -> Self
    where
        I: IntoIterator<Item = RmaState>,
    {
        Self::new(states.into_iter().map(StateResult::ok).collect())
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, index: usize) -> Option<&StateResult> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StateResult] {
        &self.entries
    }
}

impl From<Vec<StateResult>> for Script {
    fn from(entries: Vec<StateResult>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<StateResult> for Script {
    fn from_iter<I: IntoIterator<Item = StateResult>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
