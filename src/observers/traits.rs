//! One observer interface per channel.
//!
//! Single-callback interfaces are also implemented for plain closures with
//! the matching signature.

use crate::core::ErrorCode;
use crate::domain::{
    CalibrationComponentStatus, CalibrationOverallStatus, FinalizationProgress,
    HardwareVerificationResult, OsUpdateProgress, ProvisioningProgress,
    RoFirmwareUpdateProgress,
};

pub trait ErrorObserver: Send + Sync {
    fn on_error(&self, error: ErrorCode);
}

pub trait OsUpdateObserver: Send + Sync {
    fn on_os_update_progress_updated(&self, progress: &OsUpdateProgress);
}

/// Calibration delivers two kinds of payload on the same channel.
pub trait CalibrationObserver: Send + Sync {
    fn on_calibration_updated(&self, status: &CalibrationComponentStatus);

    fn on_calibration_step_complete(&self, status: CalibrationOverallStatus);
}

pub trait ProvisioningObserver: Send + Sync {
    fn on_provisioning_updated(&self, progress: &ProvisioningProgress);
}

pub trait RoFirmwareUpdateObserver: Send + Sync {
    fn on_ro_firmware_update_progress(&self, progress: &RoFirmwareUpdateProgress);
}

pub trait HardwareWriteProtectionStateObserver: Send + Sync {
    fn on_hardware_write_protection_state_changed(&self, enabled: bool);
}

pub trait PowerCableStateObserver: Send + Sync {
    fn on_power_cable_state_changed(&self, plugged_in: bool);
}

pub trait ExternalDiskStateObserver: Send + Sync {
    fn on_external_disk_state_changed(&self, detected: bool);
}

pub trait HardwareVerificationStatusObserver: Send + Sync {
    fn on_hardware_verification_result(&self, result: &HardwareVerificationResult);
}

pub trait FinalizationObserver: Send + Sync {
    fn on_finalization_updated(&self, progress: &FinalizationProgress);
}

impl<F> ErrorObserver for F
where
    F: Fn(ErrorCode) + Send + Sync,
{
    fn on_error(&self, error: ErrorCode) {
        self(error)
    }
}

impl<F> OsUpdateObserver for F
where
    F: Fn(&OsUpdateProgress) + Send + Sync,
{
    fn on_os_update_progress_updated(&self, progress: &OsUpdateProgress) {
        self(progress)
    }
}

impl<F> ProvisioningObserver for F
where
    F: Fn(&ProvisioningProgress) + Send + Sync,
{
    fn on_provisioning_updated(&self, progress: &ProvisioningProgress) {
        self(progress)
    }
}

impl<F> RoFirmwareUpdateObserver for F
where
    F: Fn(&RoFirmwareUpdateProgress) + Send + Sync,
{
    fn on_ro_firmware_update_progress(&self, progress: &RoFirmwareUpdateProgress) {
        self(progress)
    }
}

impl<F> HardwareWriteProtectionStateObserver for F
where
    F: Fn(bool) + Send + Sync,
{
    fn on_hardware_write_protection_state_changed(&self, enabled: bool) {
        self(enabled)
    }
}

impl<F> PowerCableStateObserver for F
where
    F: Fn(bool) + Send + Sync,
{
    fn on_power_cable_state_changed(&self, plugged_in: bool) {
        self(plugged_in)
    }
}

impl<F> ExternalDiskStateObserver for F
where
    F: Fn(bool) + Send + Sync,
{
    fn on_external_disk_state_changed(&self, detected: bool) {
        self(detected)
    }
}

impl<F> HardwareVerificationStatusObserver for F
where
    F: Fn(&HardwareVerificationResult) + Send + Sync,
{
    fn on_hardware_verification_result(&self, result: &HardwareVerificationResult) {
        self(result)
    }
}

impl<F> FinalizationObserver for F
where
    F: Fn(&FinalizationProgress) + Send + Sync,
{
    fn on_finalization_updated(&self, progress: &FinalizationProgress) {
        self(progress)
    }
}
