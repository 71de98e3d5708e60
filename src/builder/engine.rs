//! Builder for constructing an engine.

use crate::builder::error::BuildError;
use crate::config::EngineConfig;
use crate::scheduler::{Scheduler, TokioScheduler};
use crate::service::RmaService;
use crate::workflow::Script;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Fluent construction of an [`RmaService`].
///
/// A scheduler is required; everything else has a default.
#[derive(Default)]
pub struct EngineBuilder {
    scheduler: Option<Arc<dyn Scheduler>>,
    operation_delay: Duration,
    script: Option<Script>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Use real timers on the tokio runtime the caller is running on.
    pub fn tokio_runtime(self) -> Result<Self, BuildError> {
        let scheduler = TokioScheduler::current()?;
        Ok(self.scheduler(Arc::new(scheduler)))
    }

    /// Apply a loaded configuration. A script in the configuration
    /// replaces any script set earlier.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.operation_delay = config.operation_delay();
        if let Some(script) = config.states {
            self.script = Some(script);
        }
        self
    }

    pub fn operation_delay(mut self, delay: Duration) -> Self {
        self.operation_delay = delay;
        self
    }

    pub fn script(mut self, script: impl Into<Script>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn build(self) -> Result<RmaService, BuildError> {
        let scheduler = self.scheduler.ok_or(BuildError::MissingScheduler)?;
        let script = self.script.unwrap_or_default();
        debug!(
            entries = script.len(),
            operation_delay_ms = self.operation_delay.as_millis() as u64,
            "Building engine"
        );
        Ok(RmaService::from_parts(
            scheduler,
            self.operation_delay,
            script,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RmaState, StateResult};
    use crate::error::EngineError;
    use crate::scheduler::ManualScheduler;

    #[test]
    fn builder_requires_scheduler() {
        let result = EngineBuilder::new().build();

        assert!(matches!(result, Err(BuildError::MissingScheduler)));
    }

    #[test]
    fn tokio_runtime_outside_runtime_fails() {
        let result = EngineBuilder::new().tokio_runtime();

        assert!(matches!(
            result,
            Err(BuildError::Scheduler(EngineError::NoRuntime))
        ));
    }

    #[test]
    fn config_sets_delay_and_script() {
        let scheduler = Arc::new(ManualScheduler::new());
        let config = EngineConfig::from_json(
            r#"{"operation_delay_ms": 20, "states": [{"state": "WelcomeScreen"}]}"#,
        )
        .unwrap();

        let service = EngineBuilder::new()
            .scheduler(scheduler.clone())
            .config(config)
            .build()
            .unwrap();
        let mut pending = service.get_current_state();

        scheduler.advance(Duration::from_millis(19));
        assert!(pending.try_take().is_none());
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(
            pending.try_take(),
            Some(Ok(StateResult::ok(RmaState::WelcomeScreen)))
        );
    }

    #[test]
    fn reset_returns_to_configured_delay() {
        let scheduler = Arc::new(ManualScheduler::new());
        let service = EngineBuilder::new()
            .scheduler(scheduler.clone())
            .operation_delay(Duration::from_millis(10))
            .script(Script::from_states([RmaState::WelcomeScreen]))
            .build()
            .unwrap();

        service.set_async_operation_delay(Duration::ZERO);
        service.reset();
        let mut pending = service.get_current_state();

        scheduler.advance(Duration::ZERO);
        assert!(pending.try_take().is_none());
        scheduler.advance(Duration::from_millis(10));
        assert!(pending.try_take().is_some());
    }
}
