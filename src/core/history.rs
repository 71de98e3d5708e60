//! State transition history tracking.
//!
//! Every committed cursor move is recorded, forward or back. Rejected
//! requests never reach the history.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which way the cursor moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Back,
}

/// Record of a single committed move.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Forward step or undo
    pub direction: Direction,
    /// When the move was committed
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Forward move stamped with the current time.
    pub fn forward(from: S, to: S) -> Self {
        Self {
            from,
            to,
            direction: Direction::Forward,
            timestamp: Utc::now(),
        }
    }

    /// Undo move stamped with the current time.
    pub fn back(from: S, to: S) -> Self {
        Self {
            from,
            to,
            direction: Direction::Back,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of committed moves.
///
/// History is immutable: `record` returns a new history with the move
/// appended and leaves `self` untouched.
///
/// # Example
///
/// ```rust
/// use rma_workflow::core::{StateHistory, StateTransition};
/// use rma_workflow::RmaState;
///
/// let history = StateHistory::new()
///     .record(StateTransition::forward(RmaState::WelcomeScreen, RmaState::UpdateOs))
///     .record(StateTransition::back(RmaState::UpdateOs, RmaState::WelcomeScreen));
///
/// assert_eq!(history.path().len(), 3);
/// assert_eq!(history.forward_count(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a move, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States visited in order: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the first and last recorded move, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn forward_count(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.direction == Direction::Forward)
            .count()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RmaState;

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<RmaState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_leaves_original_untouched() {
        let history = StateHistory::new();
        let next = history.record(StateTransition::forward(
            RmaState::WelcomeScreen,
            RmaState::ConfigureNetwork,
        ));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(next.transitions().len(), 1);
    }

    #[test]
    fn path_follows_forward_and_back_moves() {
        let history = StateHistory::new()
            .record(StateTransition::forward(
                RmaState::WelcomeScreen,
                RmaState::UpdateOs,
            ))
            .record(StateTransition::forward(
                RmaState::UpdateOs,
                RmaState::SelectComponents,
            ))
            .record(StateTransition::back(
                RmaState::SelectComponents,
                RmaState::UpdateOs,
            ));

        let path = history.path();
        assert_eq!(
            path,
            vec![
                &RmaState::WelcomeScreen,
                &RmaState::UpdateOs,
                &RmaState::SelectComponents,
                &RmaState::UpdateOs,
            ]
        );
        assert_eq!(history.forward_count(), 2);
    }

    #[test]
    fn single_move_has_zero_duration() {
        let history = StateHistory::new().record(StateTransition::forward(
            RmaState::Finalize,
            RmaState::RepairComplete,
        ));

        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn history_serializes_with_direction() {
        let history = StateHistory::new().record(StateTransition::back(
            RmaState::UpdateOs,
            RmaState::WelcomeScreen,
        ));

        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("\"Back\""));
        let back: StateHistory<RmaState> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.transitions()[0].to, RmaState::WelcomeScreen);
    }
}
