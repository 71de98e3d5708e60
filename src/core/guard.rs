//! Guard predicates for controlling state transitions.
//!
//! A guard answers one question: may an operation run while the workflow
//! sits in a given state? Guards are pure and are evaluated before the
//! cursor is touched.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use rma_workflow::core::Guard;
/// use rma_workflow::RmaState;
///
/// let only_on_welcome = Guard::in_state(RmaState::WelcomeScreen);
///
/// assert!(only_on_welcome.check(&RmaState::WelcomeScreen));
/// assert!(!only_on_welcome.check(&RmaState::UpdateOs));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State + 'static> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that only passes in exactly `required`.
    pub fn in_state(required: S) -> Self {
        Self::new(move |current| *current == required)
    }
}

impl<S: State> Guard<S> {
    /// Evaluate the predicate against `state`.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
