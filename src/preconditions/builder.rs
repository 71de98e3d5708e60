//! Builder API for per-request precondition rules.

use crate::preconditions::context::RequestContext;
use crate::preconditions::rules::{PreconditionCheck, PreconditionRules};
use crate::preconditions::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for the field checks of one request.
pub struct PreconditionBuilder {
    checks: Vec<PreconditionCheck>,
}

impl PreconditionBuilder {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&RequestContext) -> Validation<(), NonEmptyVec<Violation>> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&RequestContext) -> bool + Send + Sync + 'static,
    {
        self.require(move |ctx| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(Violation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        })
    }

    /// `field` has `len` elements and must have at least one.
    pub fn require_non_empty(self, field: &'static str, len: usize) -> Self {
        self.require(move |_| {
            if len > 0 {
                Validation::success(())
            } else {
                Validation::fail(Violation::EmptyField { field })
            }
        })
    }

    pub fn require_length(self, field: &'static str, expected: usize, actual: usize) -> Self {
        self.require(move |_| {
            if actual == expected {
                Validation::success(())
            } else {
                Validation::fail(Violation::WrongLength {
                    field,
                    expected,
                    actual,
                })
            }
        })
    }

    /// `index` must address one of the `len` installed entries.
    pub fn require_index(self, field: &'static str, index: usize, len: usize) -> Self {
        self.require(move |_| {
            if index < len {
                Validation::success(())
            } else {
                Validation::fail(Violation::IndexOutOfRange { field, index, len })
            }
        })
    }

    pub fn build(self) -> PreconditionRules {
        PreconditionRules {
            checks: self.checks,
        }
    }
}

impl Default for PreconditionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
