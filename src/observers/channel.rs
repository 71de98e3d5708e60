//! Notification channels and their payloads.

use crate::core::ErrorCode;
use crate::domain::{
    CalibrationComponentStatus, CalibrationOverallStatus, FinalizationProgress,
    HardwareVerificationResult, OsUpdateProgress, ProvisioningProgress,
    RoFirmwareUpdateProgress,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named asynchronous notification stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Error,
    OsUpdateProgress,
    CalibrationProgress,
    ProvisioningProgress,
    RoFirmwareUpdateProgress,
    HardwareWriteProtectionState,
    PowerCableState,
    ExternalDiskState,
    HardwareVerificationStatus,
    FinalizationStatus,
}

impl Channel {
    pub fn name(self) -> &'static str {
        match self {
            Channel::Error => "error",
            Channel::OsUpdateProgress => "os_update_progress",
            Channel::CalibrationProgress => "calibration_progress",
            Channel::ProvisioningProgress => "provisioning_progress",
            Channel::RoFirmwareUpdateProgress => "ro_firmware_update_progress",
            Channel::HardwareWriteProtectionState => "hardware_write_protection_state",
            Channel::PowerCableState => "power_cable_state",
            Channel::ExternalDiskState => "external_disk_state",
            Channel::HardwareVerificationStatus => "hardware_verification_status",
            Channel::FinalizationStatus => "finalization_status",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One payload on one channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Notification {
    /// Backend-initiated fault, unrelated to any request in flight.
    Error(ErrorCode),
    OsUpdateProgress(OsUpdateProgress),
    CalibrationComponent(CalibrationComponentStatus),
    CalibrationOverall(CalibrationOverallStatus),
    ProvisioningProgress(ProvisioningProgress),
    RoFirmwareUpdateProgress(RoFirmwareUpdateProgress),
    HardwareWriteProtectionState { enabled: bool },
    PowerCableState { plugged_in: bool },
    ExternalDiskState { detected: bool },
    HardwareVerificationStatus(HardwareVerificationResult),
    FinalizationStatus(FinalizationProgress),
}

impl Notification {
    pub fn channel(&self) -> Channel {
        match self {
            Notification::Error(_) => Channel::Error,
            Notification::OsUpdateProgress(_) => Channel::OsUpdateProgress,
            Notification::CalibrationComponent(_) | Notification::CalibrationOverall(_) => {
                Channel::CalibrationProgress
            }
            Notification::ProvisioningProgress(_) => Channel::ProvisioningProgress,
            Notification::RoFirmwareUpdateProgress(_) => Channel::RoFirmwareUpdateProgress,
            Notification::HardwareWriteProtectionState { .. } => {
                Channel::HardwareWriteProtectionState
            }
            Notification::PowerCableState { .. } => Channel::PowerCableState,
            Notification::ExternalDiskState { .. } => Channel::ExternalDiskState,
            Notification::HardwareVerificationStatus(_) => Channel::HardwareVerificationStatus,
            Notification::FinalizationStatus(_) => Channel::FinalizationStatus,
        }
    }
}
