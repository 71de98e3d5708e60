use super::{Pacing, Sequencer};
use crate::domain::{
    OsUpdateOperation, OsUpdateProgress, RoFirmwareUpdateProgress, UpdateErrorCode,
    UpdateRoFirmwareStatus,
};
use crate::observers::{Notification, ProgressPlan};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsUpdateOutcome {
    Updated,
    /// The download fails and the updater reports `error`.
    Failed(UpdateErrorCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoFirmwareOutcome {
    Complete,
    FileNotFound,
}

pub fn os_update(outcome: OsUpdateOutcome, pacing: Pacing) -> ProgressPlan {
    let mut seq = Sequencer::new(pacing);
    let mut stage = |operation, progress| {
        seq.emit(Notification::OsUpdateProgress(OsUpdateProgress::new(
            operation, progress,
        )))
    };

    stage(OsUpdateOperation::CheckingForUpdate, 0.0);
    stage(OsUpdateOperation::UpdateAvailable, 0.1);
    stage(OsUpdateOperation::Downloading, 0.4);

    match outcome {
        OsUpdateOutcome::Updated => {
            stage(OsUpdateOperation::Verifying, 0.7);
            stage(OsUpdateOperation::Finalizing, 0.9);
            stage(OsUpdateOperation::UpdatedNeedReboot, 1.0);
        }
        OsUpdateOutcome::Failed(error) => {
            seq.emit(Notification::OsUpdateProgress(OsUpdateProgress {
                operation: OsUpdateOperation::ReportingErrorEvent,
                progress: 0.4,
                error,
            }));
        }
    }
    seq.finish()
}

pub fn ro_firmware_update(outcome: RoFirmwareOutcome, pacing: Pacing) -> ProgressPlan {
    let mut seq = Sequencer::new(pacing);
    let mut stage = |status, progress| {
        seq.emit(Notification::RoFirmwareUpdateProgress(
            RoFirmwareUpdateProgress::new(status, progress),
        ))
    };

    stage(UpdateRoFirmwareStatus::WaitUsb, 0.0);
    match outcome {
        RoFirmwareOutcome::Complete => {
            stage(UpdateRoFirmwareStatus::Downloading, 0.25);
            stage(UpdateRoFirmwareStatus::Updating, 0.5);
            stage(UpdateRoFirmwareStatus::RebootingDevice, 0.9);
            stage(UpdateRoFirmwareStatus::Complete, 1.0);
        }
        RoFirmwareOutcome::FileNotFound => {
            stage(UpdateRoFirmwareStatus::FileNotFound, 0.0);
        }
    }
    seq.finish()
}
