use super::{Pacing, Sequencer};
use crate::domain::{
    FinalizationError, FinalizationProgress, FinalizationStatus, ProvisioningError,
    ProvisioningProgress, ProvisioningStatus,
};
use crate::observers::{Notification, ProgressPlan};

/// How a provisioning or finalization run ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<E> {
    Complete,
    FailedBlocking(E),
    FailedNonBlocking(E),
}

/// InProgress at 0.25, 0.5, 0.75, then the terminal status.
pub fn provisioning(outcome: Outcome<ProvisioningError>, pacing: Pacing) -> ProgressPlan {
    let mut seq = Sequencer::new(pacing);
    for progress in [0.25, 0.5, 0.75] {
        seq.emit(Notification::ProvisioningProgress(
            ProvisioningProgress::in_progress(progress),
        ));
    }

    let terminal = match outcome {
        Outcome::Complete => ProvisioningProgress {
            status: ProvisioningStatus::Complete,
            progress: 1.0,
            error: ProvisioningError::Unknown,
        },
        Outcome::FailedBlocking(error) => ProvisioningProgress {
            status: ProvisioningStatus::FailedBlocking,
            progress: 0.75,
            error,
        },
        Outcome::FailedNonBlocking(error) => ProvisioningProgress {
            status: ProvisioningStatus::FailedNonBlocking,
            progress: 0.75,
            error,
        },
    };
    seq.emit(Notification::ProvisioningProgress(terminal));
    seq.finish()
}

/// InProgress at 0.25 and 0.75, then the terminal status.
pub fn finalization(outcome: Outcome<FinalizationError>, pacing: Pacing) -> ProgressPlan {
    let mut seq = Sequencer::new(pacing);
    for progress in [0.25, 0.75] {
        seq.emit(Notification::FinalizationStatus(
            FinalizationProgress::in_progress(progress),
        ));
    }

    let terminal = match outcome {
        Outcome::Complete => FinalizationProgress {
            status: FinalizationStatus::Complete,
            progress: 1.0,
            error: FinalizationError::Unknown,
        },
        Outcome::FailedBlocking(error) => FinalizationProgress {
            status: FinalizationStatus::FailedBlocking,
            progress: 0.75,
            error,
        },
        Outcome::FailedNonBlocking(error) => FinalizationProgress {
            status: FinalizationStatus::FailedNonBlocking,
            progress: 0.75,
            error,
        },
    };
    seq.emit(Notification::FinalizationStatus(terminal));
    seq.finish()
}
