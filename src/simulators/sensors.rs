use super::{Pacing, Sequencer};
use crate::domain::HardwareVerificationResult;
use crate::observers::{Notification, ProgressPlan};

pub fn hardware_verification(result: HardwareVerificationResult, pacing: Pacing) -> ProgressPlan {
    let mut seq = Sequencer::new(pacing);
    seq.emit(Notification::HardwareVerificationStatus(result));
    seq.finish()
}

/// One notification per entry, e.g. `[false, true]` for unplug then replug.
pub fn power_cable(states: &[bool], pacing: Pacing) -> ProgressPlan {
    toggles(states, pacing, |plugged_in| Notification::PowerCableState {
        plugged_in,
    })
}

pub fn external_disk(states: &[bool], pacing: Pacing) -> ProgressPlan {
    toggles(states, pacing, |detected| Notification::ExternalDiskState {
        detected,
    })
}

pub fn write_protection(states: &[bool], pacing: Pacing) -> ProgressPlan {
    toggles(states, pacing, |enabled| {
        Notification::HardwareWriteProtectionState { enabled }
    })
}

fn toggles(states: &[bool], pacing: Pacing, payload: impl Fn(bool) -> Notification) -> ProgressPlan {
    let mut seq = Sequencer::new(pacing);
    for &state in states {
        seq.emit(payload(state));
    }
    seq.finish()
}
