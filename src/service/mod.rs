//! The facade external callers drive the engine through.
//!
//! [`RmaService`] is a cheap, cloneable handle; every clone talks to the
//! same engine. Each request runs its synchronous part (precondition
//! checks, cursor movement) immediately and hands back a [`Pending`] that
//! the scheduler resolves after the configured operation delay. Two calls
//! resolve in the order their delays elapse, which is not necessarily the
//! order they were made in.

mod actions;
mod observe;
mod pending;
mod queries;

pub use pending::Pending;

use crate::core::{RmaState, StateHistory, StateResult};
use crate::error::EngineError;
use crate::observers::{Channel, ObserverDispatcher};
use crate::scheduler::{Epoch, Scheduler};
use crate::workflow::{Script, TransitionEngine};
use parking_lot::Mutex;
use queries::Overrides;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, trace};

/// Handle to a simulated repair backend.
///
/// # Example
///
/// ```rust
/// use rma_workflow::scheduler::ManualScheduler;
/// use rma_workflow::{ErrorCode, RmaService, RmaState, Script};
/// use std::sync::Arc;
///
/// let scheduler = Arc::new(ManualScheduler::new());
/// let service = RmaService::new(scheduler.clone());
/// service.set_states(Script::from_states([RmaState::WelcomeScreen, RmaState::UpdateOs]));
///
/// let mut result = service.begin_finalization();
/// assert!(result.try_take().is_none());
///
/// scheduler.run_until_idle();
/// let state = result.try_take().unwrap().unwrap();
/// assert_eq!(state.state, RmaState::UpdateOs);
/// assert_eq!(state.error, ErrorCode::Ok);
/// ```
#[derive(Clone)]
pub struct RmaService {
    inner: Arc<Inner>,
}

struct Inner {
    workflow: Mutex<TransitionEngine>,
    overrides: Mutex<Overrides>,
    observers: ObserverDispatcher,
    scheduler: Arc<dyn Scheduler>,
    epoch: Epoch,
    operation_delay: Mutex<Duration>,
    initial_delay: Duration,
}

impl RmaService {
    /// Engine with no script, no overrides and zero operation delay.
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self::from_parts(scheduler, Duration::ZERO, Script::default())
    }

    pub(crate) fn from_parts(
        scheduler: Arc<dyn Scheduler>,
        operation_delay: Duration,
        script: Script,
    ) -> Self {
        let epoch = Epoch::new();
        let observers = ObserverDispatcher::new(Arc::clone(&scheduler), epoch.clone());
        Self {
            inner: Arc::new(Inner {
                workflow: Mutex::new(TransitionEngine::with_script(script)),
                overrides: Mutex::new(Overrides::default()),
                observers,
                scheduler,
                epoch,
                operation_delay: Mutex::new(operation_delay),
                initial_delay: operation_delay,
            }),
        }
    }

    /// Replace the workflow script and restart from its first entry.
    ///
    /// Observer registrations and query overrides are kept.
    pub fn set_states(&self, script: impl Into<Script>) {
        let script = script.into();
        info!(entries = script.len(), "Installing workflow script");
        self.inner.workflow.lock().set_script(script);
    }

    /// Delay applied before every facade result resolves.
    pub fn set_async_operation_delay(&self, delay: Duration) {
        *self.inner.operation_delay.lock() = delay;
    }

    /// Restore the engine to its freshly built condition.
    ///
    /// Drops the script, cursor and history, every observer registration
    /// and every override. Results and notifications scheduled before the
    /// reset never arrive; their `Pending`s resolve as discarded.
    pub fn reset(&self) {
        let generation = self.inner.epoch.advance();
        self.inner.observers.clear();
        self.inner.workflow.lock().reset();
        *self.inner.overrides.lock() = Overrides::default();
        *self.inner.operation_delay.lock() = self.inner.initial_delay;
        info!(generation, "Engine reset");
    }

    /// Committed moves since the script was installed.
    pub fn history(&self) -> StateHistory<RmaState> {
        self.inner.workflow.lock().history().clone()
    }

    pub fn observer_count(&self, channel: Channel) -> usize {
        self.inner.observers.observer_count(channel)
    }

    pub fn get_current_state(&self) -> Pending<StateResult> {
        let current = self.inner.workflow.lock().current();
        self.resolve("get_current_state", current)
    }

    /// Undo the most recent forward move.
    pub fn transition_previous_state(&self) -> Pending<StateResult> {
        let result = self.inner.workflow.lock().go_back();
        self.resolve("transition_previous_state", result)
    }

    /// Hand `value` to the caller once the operation delay has elapsed.
    fn resolve<T: Send + 'static>(&self, operation: &'static str, value: T) -> Pending<T> {
        self.settle(operation, Ok(value))
    }

    /// Fail the call with `error`, delivered on the same schedule as a value.
    fn reject<T: Send + 'static>(
        &self,
        operation: &'static str,
        error: EngineError,
    ) -> Pending<T> {
        self.settle(operation, Err(error))
    }

    fn settle<T: Send + 'static>(
        &self,
        operation: &'static str,
        outcome: Result<T, EngineError>,
    ) -> Pending<T> {
        let (tx, pending) = Pending::channel(operation);
        let delay = *self.inner.operation_delay.lock();
        let stamp = self.inner.epoch.stamp();

        self.inner.scheduler.schedule(
            delay,
            Box::new(move || {
                if !stamp.is_current() {
                    trace!(operation, "Discarding result scheduled before reset");
                    return;
                }
                if tx.send(outcome).is_err() {
                    trace!(operation, "Caller dropped the result");
                }
            }),
        );
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorCode;
    use crate::scheduler::ManualScheduler;

    fn service() -> (Arc<ManualScheduler>, RmaService) {
        let scheduler = Arc::new(ManualScheduler::new());
        let service = RmaService::new(scheduler.clone());
        (scheduler, service)
    }

    #[test]
    fn results_never_resolve_inline() {
        let (scheduler, service) = service();
        let mut pending = service.get_current_state();

        assert!(pending.try_take().is_none());
        scheduler.run_until_idle();
        assert_eq!(
            pending.try_take(),
            Some(Ok(StateResult::rma_not_required()))
        );
    }

    #[test]
    fn operation_delay_holds_results_back() {
        let (scheduler, service) = service();
        service.set_async_operation_delay(Duration::from_millis(100));
        let mut pending = service.get_current_state();

        scheduler.advance(Duration::from_millis(99));
        assert!(pending.try_take().is_none());
        scheduler.advance(Duration::from_millis(1));
        assert!(pending.try_take().is_some());
    }

    #[test]
    fn shorter_delay_resolves_first() {
        let (scheduler, service) = service();
        service.set_async_operation_delay(Duration::from_millis(50));
        let mut slow = service.get_current_state();
        service.set_async_operation_delay(Duration::ZERO);
        let mut fast = service.get_current_state();

        scheduler.advance(Duration::ZERO);
        assert!(fast.try_take().is_some());
        assert!(slow.try_take().is_none());
    }

    #[test]
    fn reset_discards_in_flight_results() {
        let (scheduler, service) = service();
        service.set_states(Script::from_states([
            RmaState::WelcomeScreen,
            RmaState::UpdateOs,
        ]));
        let mut pending = service.get_current_state();

        service.reset();
        scheduler.run_until_idle();

        assert_eq!(
            pending.try_take(),
            Some(Err(EngineError::Discarded {
                operation: "get_current_state"
            }))
        );
    }

    #[test]
    fn reset_restores_initial_conditions() {
        let (scheduler, service) = service();
        service.set_states(Script::from_states([
            RmaState::WelcomeScreen,
            RmaState::UpdateOs,
        ]));
        service.set_async_operation_delay(Duration::from_secs(5));
        service.observe_error(|_: ErrorCode| {});

        service.reset();

        assert_eq!(service.observer_count(Channel::Error), 0);
        assert!(service.history().is_empty());
        let mut pending = service.get_current_state();
        scheduler.run_until_idle();
        assert_eq!(
            pending.try_take(),
            Some(Ok(StateResult::rma_not_required()))
        );
        assert_eq!(scheduler.now(), Duration::ZERO);
    }

    #[test]
    fn set_states_restarts_but_keeps_observers() {
        let (scheduler, service) = service();
        service.observe_error(|_: ErrorCode| {});
        service.set_states(Script::from_states([
            RmaState::WelcomeScreen,
            RmaState::UpdateOs,
        ]));
        service.begin_finalization();
        scheduler.run_until_idle();

        service.set_states(Script::from_states([RmaState::ChooseDestination]));
        let mut pending = service.get_current_state();
        scheduler.run_until_idle();

        assert_eq!(
            pending.try_take().unwrap().unwrap().state,
            RmaState::ChooseDestination
        );
        assert_eq!(service.observer_count(Channel::Error), 1);
    }
}
