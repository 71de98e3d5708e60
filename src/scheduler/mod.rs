//! Deferred execution for the engine.
//!
//! Everything the engine delivers later (facade results, observer
//! notifications) goes through a [`Scheduler`]. Tasks never run inside the
//! call that scheduled them, even with a zero delay, so a caller can always
//! install a handler right after triggering and still see the delivery.
//!
//! Two implementations ship with the crate:
//! - [`ManualScheduler`]: a virtual clock driven by the test
//! - [`TokioScheduler`]: real timers on a tokio runtime

mod epoch;
mod manual;
mod runtime;

pub use epoch::{Epoch, EpochStamp};
pub use manual::ManualScheduler;
pub use runtime::TokioScheduler;

use std::time::Duration;

/// Unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks after a delay.
///
/// Tasks whose deadlines coincide may run in any order unless the
/// implementation documents otherwise; callers must not rely on ordering
/// between independently scheduled tasks.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task);
}
