//! Registered observer handles, grouped by channel.

use super::channel::{Channel, Notification};
use super::traits::*;
use std::fmt;
use std::sync::Arc;

/// A handle for exactly one channel.
#[derive(Clone)]
pub enum ObserverHandle {
    Error(Arc<dyn ErrorObserver>),
    OsUpdate(Arc<dyn OsUpdateObserver>),
    Calibration(Arc<dyn CalibrationObserver>),
    Provisioning(Arc<dyn ProvisioningObserver>),
    RoFirmwareUpdate(Arc<dyn RoFirmwareUpdateObserver>),
    HardwareWriteProtectionState(Arc<dyn HardwareWriteProtectionStateObserver>),
    PowerCableState(Arc<dyn PowerCableStateObserver>),
    ExternalDiskState(Arc<dyn ExternalDiskStateObserver>),
    HardwareVerificationStatus(Arc<dyn HardwareVerificationStatusObserver>),
    Finalization(Arc<dyn FinalizationObserver>),
}

impl ObserverHandle {
    pub fn channel(&self) -> Channel {
        match self {
            ObserverHandle::Error(_) => Channel::Error,
            ObserverHandle::OsUpdate(_) => Channel::OsUpdateProgress,
            ObserverHandle::Calibration(_) => Channel::CalibrationProgress,
            ObserverHandle::Provisioning(_) => Channel::ProvisioningProgress,
            ObserverHandle::RoFirmwareUpdate(_) => Channel::RoFirmwareUpdateProgress,
            ObserverHandle::HardwareWriteProtectionState(_) => {
                Channel::HardwareWriteProtectionState
            }
            ObserverHandle::PowerCableState(_) => Channel::PowerCableState,
            ObserverHandle::ExternalDiskState(_) => Channel::ExternalDiskState,
            ObserverHandle::HardwareVerificationStatus(_) => Channel::HardwareVerificationStatus,
            ObserverHandle::Finalization(_) => Channel::FinalizationStatus,
        }
    }
}

impl fmt::Debug for ObserverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObserverHandle").field(&self.channel()).finish()
    }
}

/// Handles per channel, each list in registration order.
#[derive(Clone, Default)]
pub struct ObserverRegistry {
    error: Vec<Arc<dyn ErrorObserver>>,
    os_update: Vec<Arc<dyn OsUpdateObserver>>,
    calibration: Vec<Arc<dyn CalibrationObserver>>,
    provisioning: Vec<Arc<dyn ProvisioningObserver>>,
    ro_firmware_update: Vec<Arc<dyn RoFirmwareUpdateObserver>>,
    write_protection: Vec<Arc<dyn HardwareWriteProtectionStateObserver>>,
    power_cable: Vec<Arc<dyn PowerCableStateObserver>>,
    external_disk: Vec<Arc<dyn ExternalDiskStateObserver>>,
    hardware_verification: Vec<Arc<dyn HardwareVerificationStatusObserver>>,
    finalization: Vec<Arc<dyn FinalizationObserver>>,
}

impl ObserverRegistry {
    pub fn register(&mut self, handle: ObserverHandle) {
        match handle {
            ObserverHandle::Error(h) => self.error.push(h),
            ObserverHandle::OsUpdate(h) => self.os_update.push(h),
            ObserverHandle::Calibration(h) => self.calibration.push(h),
            ObserverHandle::Provisioning(h) => self.provisioning.push(h),
            ObserverHandle::RoFirmwareUpdate(h) => self.ro_firmware_update.push(h),
            ObserverHandle::HardwareWriteProtectionState(h) => self.write_protection.push(h),
            ObserverHandle::PowerCableState(h) => self.power_cable.push(h),
            ObserverHandle::ExternalDiskState(h) => self.external_disk.push(h),
            ObserverHandle::HardwareVerificationStatus(h) => self.hardware_verification.push(h),
            ObserverHandle::Finalization(h) => self.finalization.push(h),
        }
    }

    pub fn count(&self, channel: Channel) -> usize {
        match channel {
            Channel::Error => self.error.len(),
            Channel::OsUpdateProgress => self.os_update.len(),
            Channel::CalibrationProgress => self.calibration.len(),
            Channel::ProvisioningProgress => self.provisioning.len(),
            Channel::RoFirmwareUpdateProgress => self.ro_firmware_update.len(),
            Channel::HardwareWriteProtectionState => self.write_protection.len(),
            Channel::PowerCableState => self.power_cable.len(),
            Channel::ExternalDiskState => self.external_disk.len(),
            Channel::HardwareVerificationStatus => self.hardware_verification.len(),
            Channel::FinalizationStatus => self.finalization.len(),
        }
    }

    /// Hand `notification` to every handle on its channel, in registration
    /// order. Returns how many handles received it.
    pub fn deliver(&self, notification: &Notification) -> usize {
        match notification {
            Notification::Error(error) => {
                self.error.iter().for_each(|h| h.on_error(*error));
            }
            Notification::OsUpdateProgress(progress) => {
                self.os_update
                    .iter()
                    .for_each(|h| h.on_os_update_progress_updated(progress));
            }
            Notification::CalibrationComponent(status) => {
                self.calibration
                    .iter()
                    .for_each(|h| h.on_calibration_updated(status));
            }
            Notification::CalibrationOverall(status) => {
                self.calibration
                    .iter()
                    .for_each(|h| h.on_calibration_step_complete(*status));
            }
            Notification::ProvisioningProgress(progress) => {
                self.provisioning
                    .iter()
                    .for_each(|h| h.on_provisioning_updated(progress));
            }
            Notification::RoFirmwareUpdateProgress(progress) => {
                self.ro_firmware_update
                    .iter()
                    .for_each(|h| h.on_ro_firmware_update_progress(progress));
            }
            Notification::HardwareWriteProtectionState { enabled } => {
                self.write_protection
                    .iter()
                    .for_each(|h| h.on_hardware_write_protection_state_changed(*enabled));
            }
            Notification::PowerCableState { plugged_in } => {
                self.power_cable
                    .iter()
                    .for_each(|h| h.on_power_cable_state_changed(*plugged_in));
            }
            Notification::ExternalDiskState { detected } => {
                self.external_disk
                    .iter()
                    .for_each(|h| h.on_external_disk_state_changed(*detected));
            }
            Notification::HardwareVerificationStatus(result) => {
                self.hardware_verification
                    .iter()
                    .for_each(|h| h.on_hardware_verification_result(result));
            }
            Notification::FinalizationStatus(progress) => {
                self.finalization
                    .iter()
                    .for_each(|h| h.on_finalization_updated(progress));
            }
        }
        self.count(notification.channel())
    }
}
