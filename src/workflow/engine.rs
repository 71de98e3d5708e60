//! Transition engine: the script, the cursor and the undo stack.

use crate::core::{ErrorCode, RmaState, StateHistory, StateResult, StateTransition};
use crate::workflow::script::Script;
use tracing::debug;

/// Position in the script plus the positions a forward move left behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    back_stack: Vec<usize>,
}

impl Cursor {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of undo steps currently available.
    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }
}

/// Executes transitions against the installed script.
///
/// The cursor only moves on success. Every rejection returns the current
/// entry with an error code and leaves the cursor, the undo stack and the
/// history exactly as they were.
#[derive(Debug, Default)]
pub struct TransitionEngine {
    script: Script,
    cursor: Cursor,
    history: StateHistory<RmaState>,
}

impl TransitionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(script: Script) -> Self {
        let mut engine = Self::new();
        engine.set_script(script);
        engine
    }

    /// Replace the script and restart from its first entry.
    pub fn set_script(&mut self, script: Script) {
        debug!(entries = script.len(), "Installing workflow script");
        self.script = script;
        self.cursor = Cursor::default();
        self.history = StateHistory::new();
    }

    /// Drop the script, the cursor and the history.
    pub fn reset(&mut self) {
        self.set_script(Script::default());
    }

    pub fn current(&self) -> StateResult {
        self.entry(self.cursor.index)
            .unwrap_or_else(StateResult::rma_not_required)
    }

    /// Advance to the next entry if `precondition` holds and one exists.
    ///
    /// Returns the next entry unchanged (including any scripted error such
    /// as `ExpectReboot`). Without a script the answer is always
    /// `RmaNotRequired`; any other failure is `RequestInvalid`.
    pub fn attempt_transition(&mut self, precondition: bool) -> StateResult {
        if self.script.is_empty() {
            return StateResult::rma_not_required();
        }

        let current = self.current();
        let next_index = self.cursor.index + 1;
        let next = match self.entry(next_index) {
            Some(next) if precondition => next,
            Some(_) => {
                debug!(state = ?current.state, "Transition rejected: precondition failed");
                return current.with_error(ErrorCode::RequestInvalid);
            }
            None => {
                debug!(state = ?current.state, "Transition rejected: script exhausted");
                return current.with_error(ErrorCode::RequestInvalid);
            }
        };

        self.cursor.back_stack.push(self.cursor.index);
        self.cursor.index = next_index;
        self.history = self
            .history
            .record(StateTransition::forward(current.state, next.state));

        debug!(
            from = ?current.state,
            to = ?next.state,
            error = %next.error,
            "Transitioned forward"
        );
        next
    }

    /// Undo the most recent forward move that has not been undone yet.
    pub fn go_back(&mut self) -> StateResult {
        if self.script.is_empty() {
            return StateResult::rma_not_required();
        }

        let current = self.current();
        let Some(previous_index) = self.cursor.back_stack.pop() else {
            debug!(state = ?current.state, "Transition back rejected: nothing to undo");
            return current.with_error(ErrorCode::TransitionFailed);
        };

        self.cursor.index = previous_index;
        let previous = self.current().with_error(ErrorCode::Ok);
        self.history = self
            .history
            .record(StateTransition::back(current.state, previous.state));

        debug!(from = ?current.state, to = ?previous.state, "Transitioned back");
        previous
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn history(&self) -> &StateHistory<RmaState> {
        &self.history
    }

    fn entry(&self, index: usize) -> Option<StateResult> {
        self.script.get(index).copied()
    }
}
