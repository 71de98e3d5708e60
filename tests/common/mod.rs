#![allow(dead_code)]

use rma_workflow::scheduler::ManualScheduler;
use rma_workflow::{Pending, RmaService, RmaState, Script};
use std::sync::Arc;

/// Install a log subscriber once per test binary; `RUST_LOG` overrides.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rma_workflow=debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn manual_service() -> (Arc<ManualScheduler>, RmaService) {
    init_tracing();
    let scheduler = Arc::new(ManualScheduler::new());
    let service = RmaService::new(scheduler.clone());
    (scheduler, service)
}

pub fn scripted(states: &[RmaState]) -> (Arc<ManualScheduler>, RmaService) {
    let (scheduler, service) = manual_service();
    service.set_states(Script::from_states(states.iter().copied()));
    (scheduler, service)
}

/// Drain the scheduler and unwrap the resolved value.
pub fn settle<T>(scheduler: &ManualScheduler, mut pending: Pending<T>) -> T {
    scheduler.run_until_idle();
    pending
        .try_take()
        .expect("result should be resolved after draining the scheduler")
        .expect("operation should not be rejected")
}
