//! Precondition rules evaluated with `Validation`.

use crate::preconditions::context::RequestContext;
use crate::preconditions::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Type alias for validation check functions
pub type PreconditionCheck =
    Box<dyn Fn(&RequestContext) -> Validation<(), NonEmptyVec<Violation>> + Send + Sync>;

/// Every check a single request must pass.
///
/// The state check derived from the operation always runs first; field
/// checks follow in the order they were added. All failures are collected.
pub struct PreconditionRules {
    pub(crate) checks: Vec<PreconditionCheck>,
}

impl PreconditionRules {
    /// Run every check, accumulating ALL violations.
    pub fn enforce(&self, context: &RequestContext) -> Validation<(), NonEmptyVec<Violation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<Violation>>> =
            Vec::with_capacity(self.checks.len() + 1);

        checks.push(if context.in_required_state() {
            Validation::success(())
        } else {
            Validation::fail(Violation::WrongState {
                operation: context.operation,
                required: context.operation.required_state(),
                current: context.current,
            })
        });

        for check_fn in &self.checks {
            checks.push(check_fn(context));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Collapse the validation into the single bit the transition engine
    /// takes, logging each violation on the way.
    pub fn allows(&self, context: &RequestContext) -> bool {
        match self.enforce(context) {
            Validation::Success(_) => true,
            Validation::Failure(violations) => {
                for violation in violations.iter() {
                    debug!(
                        operation = %context.operation,
                        current = ?context.current,
                        %violation,
                        "Precondition violated"
                    );
                }
                false
            }
        }
    }
}
