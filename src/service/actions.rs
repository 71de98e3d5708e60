//! Workflow actions: requests that try to move the cursor forward.

use super::{Pending, RmaService};
use crate::core::StateResult;
use crate::domain::{CalibrationComponentStatus, Component, DeviceInformation, ShutdownMethod};
use crate::error::EngineError;
use crate::preconditions::{PreconditionBuilder, PreconditionRules, RequestContext};
use crate::workflow::Operation;
use tracing::debug;

const RSU_CODE_LENGTH: usize = 8;

/// Actions whose only precondition is the state they are legal in.
macro_rules! state_only_actions {
    ($( $(#[$meta:meta])* $method:ident => $operation:ident; )*) => {
        impl RmaService {
            $(
                $(#[$meta])*
                pub fn $method(&self) -> Pending<StateResult> {
                    self.transition(Operation::$operation, PreconditionBuilder::new().build())
                }
            )*
        }
    };
}

state_only_actions! {
    /// Leave the welcome screen and start the repair.
    begin_finalization => BeginFinalization;
    network_selection_complete => NetworkSelectionComplete;
    update_os_skipped => UpdateOsSkipped;
    set_same_owner => SetSameOwner;
    set_different_owner => SetDifferentOwner;
    choose_manually_disable_write_protect => ChooseManuallyDisableWriteProtect;
    choose_rsu_disable_write_protect => ChooseRsuDisableWriteProtect;
    write_protect_manually_disabled => WriteProtectManuallyDisabled;
    confirm_manual_wp_disable_complete => ConfirmManualWpDisableComplete;
    rework_mainboard => ReworkMainboard;
    ro_firmware_update_complete => RoFirmwareUpdateComplete;
    shutdown_for_restock => ShutdownForRestock;
    continue_finalization_after_restock => ContinueFinalizationAfterRestock;
    run_calibration_step => RunCalibrationStep;
    /// Ask for another calibration round. Any round outcome other than
    /// overall completion leads here; rounds are not counted.
    continue_calibration => ContinueCalibration;
    calibration_complete => CalibrationComplete;
    retry_provisioning => RetryProvisioning;
    provisioning_complete => ProvisioningComplete;
    write_protect_manually_enabled => WriteProtectManuallyEnabled;
    retry_finalization => RetryFinalization;
    finalization_complete => FinalizationComplete;
}

impl RmaService {
    pub fn set_wipe_device(&self, wipe: bool) -> Pending<StateResult> {
        debug!(wipe, "Wipe device selected");
        self.transition(Operation::SetWipeDevice, PreconditionBuilder::new().build())
    }

    /// The unlock code must be exactly eight characters.
    pub fn set_rsu_disable_write_protect_code(&self, code: &str) -> Pending<StateResult> {
        let rules = PreconditionBuilder::new()
            .require_length("code", RSU_CODE_LENGTH, code.chars().count())
            .build();
        self.transition(Operation::SetRsuDisableWriteProtectCode, rules)
    }

    pub fn set_component_list(&self, components: &[Component]) -> Pending<StateResult> {
        let rules = PreconditionBuilder::new()
            .require_non_empty("components", components.len())
            .build();
        self.transition(Operation::SetComponentList, rules)
    }

    pub fn start_calibration(
        &self,
        components: &[CalibrationComponentStatus],
    ) -> Pending<StateResult> {
        let rules = PreconditionBuilder::new()
            .require_non_empty("components", components.len())
            .build();
        self.transition(Operation::StartCalibration, rules)
    }

    /// Validate the new device identity against the installed lists.
    ///
    /// With no script this behaves like every other action. Otherwise it
    /// rejects with [`EngineError::NotConfigured`] when a list the request
    /// indexes into was never installed; any other problem is an inline
    /// `RequestInvalid`.
    pub fn set_device_information(&self, info: &DeviceInformation) -> Pending<StateResult> {
        let operation = Operation::SetDeviceInformation;
        if self.inner.workflow.lock().script().is_empty() {
            return self.transition(operation, PreconditionBuilder::new().build());
        }

        let (regions, skus, custom_labels) = {
            let overrides = self.inner.overrides.lock();
            (
                overrides.region_list.as_ref().map(Vec::len),
                overrides.sku_list.as_ref().map(Vec::len),
                overrides.custom_label_list.as_ref().map(Vec::len),
            )
        };

        let not_configured = |setting: &'static str| {
            debug!(%operation, setting, "Device information rejected");
            self.reject(
                operation.name(),
                EngineError::NotConfigured {
                    operation: operation.name(),
                    setting,
                },
            )
        };
        let Some(regions) = regions else {
            return not_configured("region_list");
        };
        let Some(skus) = skus else {
            return not_configured("sku_list");
        };

        let mut rules = PreconditionBuilder::new()
            .require_non_empty("serial_number", info.serial_number.len())
            .require_index("region_index", info.region_index, regions)
            .require_index("sku_index", info.sku_index, skus);
        if let Some(index) = info.custom_label_index {
            let Some(custom_labels) = custom_labels else {
                return not_configured("custom_label_list");
            };
            rules = rules.require_index("custom_label_index", index, custom_labels);
        }

        self.transition(operation, rules.build())
    }

    pub fn end_rma(&self, method: ShutdownMethod) -> Pending<StateResult> {
        debug!(?method, "Ending repair");
        self.transition(Operation::EndRma, PreconditionBuilder::new().build())
    }

    /// Check `rules` against the current state and try to advance.
    ///
    /// The check and the cursor move happen under one lock, so a rejected
    /// request never leaves a partial commit behind.
    fn transition(&self, operation: Operation, rules: PreconditionRules) -> Pending<StateResult> {
        let result = {
            let mut workflow = self.inner.workflow.lock();
            let context = RequestContext::new(operation, workflow.current().state);
            let allowed = workflow.script().is_empty() || rules.allows(&context);
            workflow.attempt_transition(allowed)
        };
        debug!(%operation, state = ?result.state, error = %result.error, "Action handled");
        self.resolve(operation.name(), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorCode, RmaState};
    use crate::domain::{ComponentRepairStatus, ComponentType};
    use crate::scheduler::ManualScheduler;
    use crate::workflow::Script;
    use std::sync::Arc;

    fn service_in(states: &[RmaState]) -> (Arc<ManualScheduler>, RmaService) {
        let scheduler = Arc::new(ManualScheduler::new());
        let service = RmaService::new(scheduler.clone());
        service.set_states(Script::from_states(states.iter().copied()));
        (scheduler, service)
    }

    fn take(scheduler: &ManualScheduler, mut pending: Pending<StateResult>) -> StateResult {
        scheduler.run_until_idle();
        pending.try_take().unwrap().unwrap()
    }

    fn keyboard() -> Component {
        Component::new(
            ComponentType::Keyboard,
            ComponentRepairStatus::Replaced,
            "Keyboard_1",
        )
    }

    fn device_info() -> DeviceInformation {
        DeviceInformation {
            serial_number: String::from("serial#1"),
            region_index: 1,
            sku_index: 0,
            ..DeviceInformation::default()
        }
    }

    #[test]
    fn legal_action_advances() {
        let (scheduler, service) =
            service_in(&[RmaState::SelectComponents, RmaState::ChooseDestination]);

        let result = take(&scheduler, service.set_component_list(&[keyboard()]));

        assert_eq!(result.state, RmaState::ChooseDestination);
        assert_eq!(result.error, ErrorCode::Ok);
    }

    #[test]
    fn empty_component_list_is_rejected_in_place() {
        let (scheduler, service) =
            service_in(&[RmaState::SelectComponents, RmaState::ChooseDestination]);

        let result = take(&scheduler, service.set_component_list(&[]));

        assert_eq!(result.state, RmaState::SelectComponents);
        assert_eq!(result.error, ErrorCode::RequestInvalid);
        assert_eq!(
            take(&scheduler, service.get_current_state()).state,
            RmaState::SelectComponents
        );
    }

    #[test]
    fn action_outside_its_state_is_rejected() {
        let (scheduler, service) = service_in(&[RmaState::WelcomeScreen, RmaState::UpdateOs]);

        let result = take(&scheduler, service.set_component_list(&[keyboard()]));

        assert_eq!(result.state, RmaState::WelcomeScreen);
        assert_eq!(result.error, ErrorCode::RequestInvalid);
    }

    #[test]
    fn rsu_code_must_have_eight_characters() {
        let (scheduler, service) =
            service_in(&[RmaState::EnterRsuWpDisableCode, RmaState::WpDisableComplete]);

        let short = take(&scheduler, service.set_rsu_disable_write_protect_code("1234"));
        assert_eq!(short.error, ErrorCode::RequestInvalid);

        let valid = take(&scheduler, service.set_rsu_disable_write_protect_code("ABCD1234"));
        assert_eq!(valid.state, RmaState::WpDisableComplete);
    }

    #[test]
    fn device_information_needs_installed_lists() {
        let (scheduler, service) =
            service_in(&[RmaState::UpdateDeviceInformation, RmaState::CheckCalibration]);

        let mut pending = service.set_device_information(&device_info());
        assert!(pending.try_take().is_none());

        scheduler.run_until_idle();
        assert!(matches!(
            pending.try_take(),
            Some(Err(EngineError::NotConfigured {
                setting: "region_list",
                ..
            }))
        ));
        assert_eq!(
            take(&scheduler, service.get_current_state()).state,
            RmaState::UpdateDeviceInformation
        );
    }

    #[test]
    fn device_information_indices_are_validated() {
        let (scheduler, service) =
            service_in(&[RmaState::UpdateDeviceInformation, RmaState::CheckCalibration]);
        service.set_get_region_list_result(vec![String::from("EMEA"), String::from("APAC")]);
        service.set_get_sku_list_result(vec![1, 2, 3]);

        let out_of_range = DeviceInformation {
            region_index: 2,
            ..device_info()
        };
        let rejected = take(&scheduler, service.set_device_information(&out_of_range));
        assert_eq!(rejected.error, ErrorCode::RequestInvalid);

        let accepted = take(&scheduler, service.set_device_information(&device_info()));
        assert_eq!(accepted.state, RmaState::CheckCalibration);
    }

    #[test]
    fn custom_label_requires_its_list() {
        let (scheduler, service) =
            service_in(&[RmaState::UpdateDeviceInformation, RmaState::CheckCalibration]);
        service.set_get_region_list_result(vec![String::from("EMEA")]);
        service.set_get_sku_list_result(vec![1]);

        let mut pending = service.set_device_information(&DeviceInformation {
            region_index: 0,
            custom_label_index: Some(0),
            ..device_info()
        });
        scheduler.run_until_idle();

        assert!(matches!(
            pending.try_take(),
            Some(Err(EngineError::NotConfigured {
                setting: "custom_label_list",
                ..
            }))
        ));
    }

    #[test]
    fn device_information_without_script_needs_no_repair() {
        let scheduler = Arc::new(ManualScheduler::new());
        let service = RmaService::new(scheduler.clone());

        let result = take(&scheduler, service.set_device_information(&device_info()));

        assert_eq!(result, StateResult::rma_not_required());
    }

    #[test]
    fn scripted_error_passes_through() {
        let scheduler = Arc::new(ManualScheduler::new());
        let service = RmaService::new(scheduler.clone());
        service.set_states(Script::new(vec![
            StateResult::ok(RmaState::RepairComplete),
            StateResult::ok(RmaState::Reboot).with_error(ErrorCode::ExpectReboot),
        ]));

        let result = take(&scheduler, service.end_rma(ShutdownMethod::Reboot));

        assert_eq!(result.state, RmaState::Reboot);
        assert_eq!(result.error, ErrorCode::ExpectReboot);
    }
}
