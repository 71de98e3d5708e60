//! OS update and RO firmware update payloads.

use serde::{Deserialize, Serialize};

/// Stage reported by the OS updater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsUpdateOperation {
    Idle,
    CheckingForUpdate,
    UpdateAvailable,
    Downloading,
    Verifying,
    Finalizing,
    UpdatedNeedReboot,
    /// Terminal failure; the payload's error code says what went wrong.
    ReportingErrorEvent,
    AttemptingRollback,
    Disabled,
    NeedPermissionToUpdate,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateErrorCode {
    #[default]
    Success,
    DownloadError,
    VerifyError,
    ApplyError,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OsUpdateProgress {
    pub operation: OsUpdateOperation,
    pub progress: f64,
    pub error: UpdateErrorCode,
}

impl OsUpdateProgress {
    pub fn new(operation: OsUpdateOperation, progress: f64) -> Self {
        Self {
            operation,
            progress,
            error: UpdateErrorCode::Success,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.operation == OsUpdateOperation::ReportingErrorEvent
    }
}

/// Stage of the read-only firmware update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateRoFirmwareStatus {
    Unknown,
    WaitUsb,
    /// Terminal failure: no firmware image on the inserted drive.
    FileNotFound,
    Downloading,
    Updating,
    RebootingDevice,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoFirmwareUpdateProgress {
    pub status: UpdateRoFirmwareStatus,
    pub progress: f64,
}

impl RoFirmwareUpdateProgress {
    pub fn new(status: UpdateRoFirmwareStatus, progress: f64) -> Self {
        Self { status, progress }
    }
}
