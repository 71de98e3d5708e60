//! Context provided to precondition checks.

use crate::core::RmaState;
use crate::workflow::Operation;

/// What a check may look at: the request and where the workflow stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestContext {
    pub operation: Operation,
    pub current: RmaState,
}

impl RequestContext {
    pub fn new(operation: Operation, current: RmaState) -> Self {
        Self { operation, current }
    }

    pub fn in_required_state(&self) -> bool {
        self.operation.guard().check(&self.current)
    }
}
