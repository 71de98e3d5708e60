//! Virtual-clock scheduler for deterministic tests.

use super::{Scheduler, Task};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::trace;

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), Task>,
}

/// Scheduler whose clock only moves when the test moves it.
///
/// Tasks run in deadline order; tasks sharing a deadline run in the order
/// they were scheduled. Tasks may schedule more tasks while running, and
/// those run in the same drive call if they fall due within it.
///
/// # Example
///
/// ```rust
/// use rma_workflow::scheduler::{ManualScheduler, Scheduler};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
///
/// scheduler.schedule(Duration::from_millis(50), Box::new(move || flag.store(true, Ordering::SeqCst)));
/// assert!(!fired.load(Ordering::SeqCst));
///
/// scheduler.advance(Duration::from_millis(49));
/// assert!(!fired.load(Ordering::SeqCst));
///
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since construction.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Move the clock forward by `by`, running every task that falls due.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let ran = self.run_due(Some(target));
        let mut state = self.state.lock();
        if state.now < target {
            state.now = target;
        }
        ran
    }

    /// Run tasks until the queue is empty, jumping the clock to each
    /// deadline in turn. Returns how many tasks ran.
    pub fn run_until_idle(&self) -> usize {
        self.run_due(None)
    }

    fn run_due(&self, limit: Option<Duration>) -> usize {
        let mut ran = 0;
        loop {
            // The lock is released before the task runs; tasks schedule more work.
            let task = {
                let mut state = self.state.lock();
                let due = match state.queue.first_key_value() {
                    Some((&(due, _), _)) if limit.map_or(true, |limit| due <= limit) => due,
                    _ => break,
                };
                let Some((_, task)) = state.queue.pop_first() else {
                    break;
                };
                state.now = state.now.max(due);
                task
            };
            task();
            ran += 1;
        }
        trace!(ran, "Manual scheduler drained due tasks");
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut state = self.state.lock();
        let due = state.now.saturating_add(delay);
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.insert((due, seq), task);
    }
}
