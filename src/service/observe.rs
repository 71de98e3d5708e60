//! Observer registration, manual triggers and simulator-driven triggers.

use super::RmaService;
use crate::core::ErrorCode;
use crate::domain::{
    CalibrationComponentStatus, CalibrationOverallStatus, FinalizationError,
    FinalizationProgress, HardwareVerificationResult, OsUpdateProgress, ProvisioningError,
    ProvisioningProgress, RoFirmwareUpdateProgress,
};
use crate::observers::*;
use crate::simulators::{
    self, CalibrationScenario, OsUpdateOutcome, Outcome, Pacing, RoFirmwareOutcome,
};
use std::sync::Arc;
use std::time::Duration;

impl RmaService {
    pub fn observe_error(&self, observer: impl ErrorObserver + 'static) {
        self.observe(ObserverHandle::Error(Arc::new(observer)));
    }

    pub fn observe_os_update_progress(&self, observer: impl OsUpdateObserver + 'static) {
        self.observe(ObserverHandle::OsUpdate(Arc::new(observer)));
    }

    pub fn observe_calibration_progress(&self, observer: impl CalibrationObserver + 'static) {
        self.observe(ObserverHandle::Calibration(Arc::new(observer)));
    }

    pub fn observe_provisioning_progress(&self, observer: impl ProvisioningObserver + 'static) {
        self.observe(ObserverHandle::Provisioning(Arc::new(observer)));
    }

    pub fn observe_ro_firmware_update_progress(
        &self,
        observer: impl RoFirmwareUpdateObserver + 'static,
    ) {
        self.observe(ObserverHandle::RoFirmwareUpdate(Arc::new(observer)));
    }

    pub fn observe_hardware_write_protection_state(
        &self,
        observer: impl HardwareWriteProtectionStateObserver + 'static,
    ) {
        self.observe(ObserverHandle::HardwareWriteProtectionState(Arc::new(
            observer,
        )));
    }

    pub fn observe_power_cable_state(&self, observer: impl PowerCableStateObserver + 'static) {
        self.observe(ObserverHandle::PowerCableState(Arc::new(observer)));
    }

    pub fn observe_external_disk_state(
        &self,
        observer: impl ExternalDiskStateObserver + 'static,
    ) {
        self.observe(ObserverHandle::ExternalDiskState(Arc::new(observer)));
    }

    pub fn observe_hardware_verification_status(
        &self,
        observer: impl HardwareVerificationStatusObserver + 'static,
    ) {
        self.observe(ObserverHandle::HardwareVerificationStatus(Arc::new(
            observer,
        )));
    }

    pub fn observe_finalization_status(&self, observer: impl FinalizationObserver + 'static) {
        self.observe(ObserverHandle::Finalization(Arc::new(observer)));
    }

    /// Register a handle built by the caller.
    pub fn observe(&self, handle: ObserverHandle) {
        self.inner.observers.observe(handle);
    }

    /// Deliver `notification` on its channel after `delay`.
    ///
    /// Delivery is never synchronous, even with a zero delay.
    pub fn trigger(&self, notification: Notification, delay: Duration) {
        self.inner.observers.trigger(notification, delay);
    }

    pub fn trigger_error_observer(&self, error: ErrorCode, delay: Duration) {
        self.trigger(Notification::Error(error), delay);
    }

    pub fn trigger_os_update_observer(&self, progress: OsUpdateProgress, delay: Duration) {
        self.trigger(Notification::OsUpdateProgress(progress), delay);
    }

    pub fn trigger_calibration_observer(
        &self,
        status: CalibrationComponentStatus,
        delay: Duration,
    ) {
        self.trigger(Notification::CalibrationComponent(status), delay);
    }

    pub fn trigger_calibration_overall_observer(
        &self,
        status: CalibrationOverallStatus,
        delay: Duration,
    ) {
        self.trigger(Notification::CalibrationOverall(status), delay);
    }

    pub fn trigger_provisioning_observer(&self, progress: ProvisioningProgress, delay: Duration) {
        self.trigger(Notification::ProvisioningProgress(progress), delay);
    }

    pub fn trigger_ro_firmware_update_observer(
        &self,
        progress: RoFirmwareUpdateProgress,
        delay: Duration,
    ) {
        self.trigger(Notification::RoFirmwareUpdateProgress(progress), delay);
    }

    pub fn trigger_hardware_write_protection_observer(&self, enabled: bool, delay: Duration) {
        self.trigger(
            Notification::HardwareWriteProtectionState { enabled },
            delay,
        );
    }

    pub fn trigger_power_cable_observer(&self, plugged_in: bool, delay: Duration) {
        self.trigger(Notification::PowerCableState { plugged_in }, delay);
    }

    pub fn trigger_external_disk_observer(&self, detected: bool, delay: Duration) {
        self.trigger(Notification::ExternalDiskState { detected }, delay);
    }

    pub fn trigger_hardware_verification_status_observer(
        &self,
        result: HardwareVerificationResult,
        delay: Duration,
    ) {
        self.trigger(Notification::HardwareVerificationStatus(result), delay);
    }

    pub fn trigger_finalization_observer(&self, progress: FinalizationProgress, delay: Duration) {
        self.trigger(Notification::FinalizationStatus(progress), delay);
    }

    // Simulator-driven sequences.

    pub fn automatically_trigger_calibration_observers(
        &self,
        scenario: &CalibrationScenario,
        pacing: Pacing,
    ) {
        self.run_plan(simulators::calibration(scenario, pacing));
    }

    pub fn automatically_trigger_provisioning_observer(
        &self,
        outcome: Outcome<ProvisioningError>,
        pacing: Pacing,
    ) {
        self.run_plan(simulators::provisioning(outcome, pacing));
    }

    pub fn automatically_trigger_os_update_observer(
        &self,
        outcome: OsUpdateOutcome,
        pacing: Pacing,
    ) {
        self.run_plan(simulators::os_update(outcome, pacing));
    }

    pub fn automatically_trigger_ro_firmware_update_observer(
        &self,
        outcome: RoFirmwareOutcome,
        pacing: Pacing,
    ) {
        self.run_plan(simulators::ro_firmware_update(outcome, pacing));
    }

    pub fn automatically_trigger_finalization_observer(
        &self,
        outcome: Outcome<FinalizationError>,
        pacing: Pacing,
    ) {
        self.run_plan(simulators::finalization(outcome, pacing));
    }

    pub fn automatically_trigger_hardware_verification_status_observer(
        &self,
        result: HardwareVerificationResult,
        pacing: Pacing,
    ) {
        self.run_plan(simulators::hardware_verification(result, pacing));
    }

    pub fn automatically_trigger_power_cable_observer(&self, states: &[bool], pacing: Pacing) {
        self.run_plan(simulators::power_cable(states, pacing));
    }

    pub fn automatically_trigger_external_disk_observer(&self, states: &[bool], pacing: Pacing) {
        self.run_plan(simulators::external_disk(states, pacing));
    }

    pub fn automatically_trigger_hardware_write_protection_observer(
        &self,
        states: &[bool],
        pacing: Pacing,
    ) {
        self.run_plan(simulators::write_protection(states, pacing));
    }

    fn run_plan(&self, plan: ProgressPlan) {
        self.inner.observers.trigger_plan(plan);
    }
}
