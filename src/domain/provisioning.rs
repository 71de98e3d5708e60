//! Provisioning and finalization payloads.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProvisioningStatus {
    InProgress,
    Complete,
    FailedBlocking,
    FailedNonBlocking,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProvisioningError {
    #[default]
    Unknown,
    Internal,
    /// Write protection got re-enabled; the technician can disable it and retry.
    WpEnabled,
    CannotRead,
    CannotWrite,
    GenerateSecret,
    MissingBoardId,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProvisioningProgress {
    pub status: ProvisioningStatus,
    pub progress: f64,
    pub error: ProvisioningError,
}

impl ProvisioningProgress {
    pub fn in_progress(progress: f64) -> Self {
        Self {
            status: ProvisioningStatus::InProgress,
            progress,
            error: ProvisioningError::Unknown,
        }
    }

    /// Blocking failure caused by write protection rather than a fault.
    ///
    /// Callers route this one to a retry screen and every other blocking
    /// failure to a fatal one.
    pub fn is_write_protect_failure(&self) -> bool {
        self.status == ProvisioningStatus::FailedBlocking
            && self.error == ProvisioningError::WpEnabled
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalizationStatus {
    InProgress,
    Complete,
    FailedBlocking,
    FailedNonBlocking,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalizationError {
    #[default]
    Unknown,
    Internal,
    CannotEnableHardwareWp,
    CannotEnableSoftwareWp,
    Cr50,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalizationProgress {
    pub status: FinalizationStatus,
    pub progress: f64,
    pub error: FinalizationError,
}

impl FinalizationProgress {
    pub fn in_progress(progress: f64) -> Self {
        Self {
            status: FinalizationStatus::InProgress,
            progress,
            error: FinalizationError::Unknown,
        }
    }
}
