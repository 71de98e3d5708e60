//! Progress simulators.
//!
//! Each simulator is a pure function of its parameters that returns a
//! [`ProgressPlan`]; nothing is scheduled until the plan is handed to the
//! dispatcher. Timing comes from a [`Pacing`], so the same plan can run
//! instantly in tests or spread out to mimic real hardware.

mod calibration;
mod provisioning;
mod sensors;
mod updates;

pub use calibration::{calibration, CalibrationScenario};
pub use provisioning::{finalization, provisioning, Outcome};
pub use sensors::{external_disk, hardware_verification, power_cable, write_protection};
pub use updates::{os_update, ro_firmware_update, OsUpdateOutcome, RoFirmwareOutcome};

use crate::observers::{Notification, ProgressPlan};
use std::time::Duration;

/// When each step of a plan fires: `start + step * interval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    pub start: Duration,
    pub interval: Duration,
}

impl Pacing {
    /// Every step at zero delay.
    pub fn immediate() -> Self {
        Self {
            start: Duration::ZERO,
            interval: Duration::ZERO,
        }
    }

    /// First step after `interval`, then one step per `interval`.
    pub fn every(interval: Duration) -> Self {
        Self {
            start: interval,
            interval,
        }
    }

    /// Delay of `step`, saturating at [`Duration::MAX`].
    pub fn at(&self, step: usize) -> Duration {
        u32::try_from(step)
            .ok()
            .and_then(|step| self.interval.checked_mul(step))
            .and_then(|offset| self.start.checked_add(offset))
            .unwrap_or(Duration::MAX)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::immediate()
    }
}

/// Appends notifications to a plan at consecutive pacing steps.
struct Sequencer {
    pacing: Pacing,
    plan: ProgressPlan,
    next: usize,
}

impl Sequencer {
    fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            plan: ProgressPlan::new(),
            next: 0,
        }
    }

    fn emit(&mut self, notification: Notification) {
        self.plan.push(self.pacing.at(self.next), notification);
        self.next += 1;
    }

    fn finish(self) -> ProgressPlan {
        self.plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_pacing_is_always_zero() {
        let pacing = Pacing::immediate();
        assert_eq!(pacing.at(0), Duration::ZERO);
        assert_eq!(pacing.at(9), Duration::ZERO);
    }

    #[test]
    fn every_spaces_steps_evenly() {
        let pacing = Pacing::every(Duration::from_millis(500));
        assert_eq!(pacing.at(0), Duration::from_millis(500));
        assert_eq!(pacing.at(3), Duration::from_millis(2000));
    }

    #[test]
    fn huge_steps_saturate_instead_of_overflowing() {
        let pacing = Pacing::every(Duration::from_secs(u64::MAX / 2));
        assert_eq!(pacing.at(4), Duration::MAX);
        assert_eq!(pacing.at(usize::MAX), Duration::MAX);
    }
}
