//! Ordered lists of notifications to fire later.

use super::channel::Notification;
use std::time::Duration;

/// A notification and how long after scheduling it fires.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedNotification {
    pub delay: Duration,
    pub notification: Notification,
}

/// Notifications produced by a progress simulator.
///
/// Delays are offsets from the moment the plan is handed to the
/// dispatcher, not gaps between consecutive steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressPlan {
    steps: Vec<PlannedNotification>,
}

impl ProgressPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step firing at `delay`.
    pub fn then(mut self, delay: Duration, notification: Notification) -> Self {
        self.push(delay, notification);
        self
    }

    pub fn push(&mut self, delay: Duration, notification: Notification) {
        self.steps.push(PlannedNotification {
            delay,
            notification,
        });
    }

    pub fn steps(&self) -> &[PlannedNotification] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.steps.last().map(|step| &step.notification)
    }
}

impl IntoIterator for ProgressPlan {
    type Item = PlannedNotification;
    type IntoIter = std::vec::IntoIter<PlannedNotification>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
