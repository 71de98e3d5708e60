//! Scheduler backed by a tokio runtime.

use super::{Scheduler, Task};
use crate::error::EngineError;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::trace;

type Entry = (Instant, Task);

/// Cap for deadlines that would overflow the clock.
const FAR_FUTURE: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

/// Runs tasks on one driver task spawned on a tokio runtime.
///
/// Tasks fire in deadline order; tasks with equal deadlines fire in the
/// order they were scheduled, matching [`ManualScheduler`](super::ManualScheduler).
/// Tasks run on the driver, one at a time.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    inbox: mpsc::UnboundedSender<Entry>,
}

impl TokioScheduler {
    /// Spawn the driver on `handle`.
    pub fn new(handle: Handle) -> Self {
        let (inbox, rx) = mpsc::unbounded_channel();
        handle.spawn(drive(rx));
        Self { inbox }
    }

    /// Bind to the runtime the caller is running on.
    pub fn current() -> Result<Self, EngineError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| EngineError::NoRuntime)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let now = Instant::now();
        let deadline = now.checked_add(delay).unwrap_or(now + FAR_FUTURE);
        if self.inbox.send((deadline, task)).is_err() {
            trace!("Runtime shut down; dropping scheduled task");
        }
    }
}

/// Queue keyed by `(deadline, seq)`; runs until every handle is gone and
/// the queue is drained.
async fn drive(mut inbox: mpsc::UnboundedReceiver<Entry>) {
    let mut queue: BTreeMap<(Instant, u64), Task> = BTreeMap::new();
    let mut seq = 0u64;
    let mut open = true;

    loop {
        let next = queue.keys().next().map(|(deadline, _)| *deadline);
        tokio::select! {
            biased;
            received = inbox.recv(), if open => match received {
                Some((deadline, task)) => {
                    queue.insert((deadline, seq), task);
                    seq += 1;
                }
                None => open = false,
            },
            _ = tokio::time::sleep_until(next.unwrap_or_else(Instant::now)), if next.is_some() => {
                let now = Instant::now();
                while let Some(entry) = queue.first_entry() {
                    if entry.key().0 > now {
                        break;
                    }
                    let task = entry.remove();
                    task();
                }
            },
            else => break,
        }
    }
}
