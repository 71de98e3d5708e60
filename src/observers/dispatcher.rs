//! Schedules notifications and fans them out to registered handles.

use super::channel::{Channel, Notification};
use super::plan::ProgressPlan;
use super::registry::{ObserverHandle, ObserverRegistry};
use crate::scheduler::{Epoch, Scheduler};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Delivers notifications asynchronously, decoupled from requests.
///
/// - Every trigger becomes one scheduled delivery; nothing runs inline.
/// - Handles are looked up when the delivery fires, so a handle registered
///   right after a trigger still receives it, and a channel with no
///   handles at that point simply drops the payload.
/// - Handles on one channel run in registration order. Deliveries on
///   different channels carry no relative ordering guarantee, even at the
///   same delay.
/// - There is no queue bound and no per-trigger cancellation; only
///   [`clear`](Self::clear) voids outstanding deliveries.
#[derive(Clone)]
pub struct ObserverDispatcher {
    registry: Arc<Mutex<ObserverRegistry>>,
    scheduler: Arc<dyn Scheduler>,
    epoch: Epoch,
}

impl ObserverDispatcher {
    pub fn new(scheduler: Arc<dyn Scheduler>, epoch: Epoch) -> Self {
        Self {
            registry: Arc::new(Mutex::new(ObserverRegistry::default())),
            scheduler,
            epoch,
        }
    }

    pub fn observe(&self, handle: ObserverHandle) {
        let channel = handle.channel();
        let mut registry = self.registry.lock();
        registry.register(handle);
        debug!(
            %channel,
            observers = registry.count(channel),
            "Registered observer"
        );
    }

    pub fn observer_count(&self, channel: Channel) -> usize {
        self.registry.lock().count(channel)
    }

    pub fn trigger(&self, notification: Notification, delay: Duration) {
        let channel = notification.channel();
        trace!(%channel, delay_ms = delay.as_millis() as u64, "Scheduling notification");

        let registry = Arc::clone(&self.registry);
        let stamp = self.epoch.stamp();
        self.scheduler.schedule(
            delay,
            Box::new(move || {
                if !stamp.is_current() {
                    trace!(%channel, "Skipping notification scheduled before reset");
                    return;
                }
                // Handlers run without the lock held; they may register or trigger.
                let snapshot = registry.lock().clone();
                let delivered = snapshot.deliver(&notification);
                if delivered == 0 {
                    trace!(%channel, "Dropped notification: no observers");
                }
            }),
        );
    }

    pub fn trigger_plan(&self, plan: ProgressPlan) {
        debug!(steps = plan.len(), "Scheduling progress plan");
        for step in plan {
            self.trigger(step.notification, step.delay);
        }
    }

    /// Forget every handle. Outstanding deliveries are voided by the shared
    /// epoch, which the owner advances before calling this.
    pub fn clear(&self) {
        *self.registry.lock() = ObserverRegistry::default();
    }
}
