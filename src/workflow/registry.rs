//! Which operation may run in which state.

use crate::core::{Guard, RmaState};
use std::fmt;

/// Every transition-producing request the facade accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    BeginFinalization,
    NetworkSelectionComplete,
    UpdateOsSkipped,
    SetSameOwner,
    SetDifferentOwner,
    SetWipeDevice,
    ChooseManuallyDisableWriteProtect,
    ChooseRsuDisableWriteProtect,
    SetRsuDisableWriteProtectCode,
    WriteProtectManuallyDisabled,
    ConfirmManualWpDisableComplete,
    SetComponentList,
    ReworkMainboard,
    RoFirmwareUpdateComplete,
    ShutdownForRestock,
    ContinueFinalizationAfterRestock,
    SetDeviceInformation,
    StartCalibration,
    RunCalibrationStep,
    ContinueCalibration,
    CalibrationComplete,
    RetryProvisioning,
    ProvisioningComplete,
    WriteProtectManuallyEnabled,
    RetryFinalization,
    FinalizationComplete,
    EndRma,
}

impl Operation {
    pub const ALL: &'static [Operation] = &[
        Operation::BeginFinalization,
        Operation::NetworkSelectionComplete,
        Operation::UpdateOsSkipped,
        Operation::SetSameOwner,
        Operation::SetDifferentOwner,
        Operation::SetWipeDevice,
        Operation::ChooseManuallyDisableWriteProtect,
        Operation::ChooseRsuDisableWriteProtect,
        Operation::SetRsuDisableWriteProtectCode,
        Operation::WriteProtectManuallyDisabled,
        Operation::ConfirmManualWpDisableComplete,
        Operation::SetComponentList,
        Operation::ReworkMainboard,
        Operation::RoFirmwareUpdateComplete,
        Operation::ShutdownForRestock,
        Operation::ContinueFinalizationAfterRestock,
        Operation::SetDeviceInformation,
        Operation::StartCalibration,
        Operation::RunCalibrationStep,
        Operation::ContinueCalibration,
        Operation::CalibrationComplete,
        Operation::RetryProvisioning,
        Operation::ProvisioningComplete,
        Operation::WriteProtectManuallyEnabled,
        Operation::RetryFinalization,
        Operation::FinalizationComplete,
        Operation::EndRma,
    ];

    /// The only state this operation is legal in.
    pub fn required_state(self) -> RmaState {
        use Operation::*;
        match self {
            BeginFinalization => RmaState::WelcomeScreen,
            NetworkSelectionComplete => RmaState::ConfigureNetwork,
            UpdateOsSkipped => RmaState::UpdateOs,
            SetSameOwner | SetDifferentOwner => RmaState::ChooseDestination,
            SetWipeDevice => RmaState::ChooseWipeDevice,
            ChooseManuallyDisableWriteProtect | ChooseRsuDisableWriteProtect => {
                RmaState::ChooseWriteProtectDisableMethod
            }
            SetRsuDisableWriteProtectCode => RmaState::EnterRsuWpDisableCode,
            WriteProtectManuallyDisabled => RmaState::WaitForManualWpDisable,
            ConfirmManualWpDisableComplete => RmaState::WpDisableComplete,
            SetComponentList | ReworkMainboard => RmaState::SelectComponents,
            RoFirmwareUpdateComplete => RmaState::UpdateRoFirmware,
            ShutdownForRestock | ContinueFinalizationAfterRestock => RmaState::Restock,
            SetDeviceInformation => RmaState::UpdateDeviceInformation,
            StartCalibration => RmaState::CheckCalibration,
            RunCalibrationStep => RmaState::SetupCalibration,
            ContinueCalibration | CalibrationComplete => RmaState::RunCalibration,
            RetryProvisioning | ProvisioningComplete => RmaState::ProvisionDevice,
            WriteProtectManuallyEnabled => RmaState::WaitForManualWpEnable,
            RetryFinalization | FinalizationComplete => RmaState::Finalize,
            EndRma => RmaState::RepairComplete,
        }
    }

    pub fn guard(self) -> Guard<RmaState> {
        Guard::in_state(self.required_state())
    }

    pub fn name(self) -> &'static str {
        use Operation::*;
        match self {
            BeginFinalization => "begin_finalization",
            NetworkSelectionComplete => "network_selection_complete",
            UpdateOsSkipped => "update_os_skipped",
            SetSameOwner => "set_same_owner",
            SetDifferentOwner => "set_different_owner",
            SetWipeDevice => "set_wipe_device",
            ChooseManuallyDisableWriteProtect => "choose_manually_disable_write_protect",
            ChooseRsuDisableWriteProtect => "choose_rsu_disable_write_protect",
            SetRsuDisableWriteProtectCode => "set_rsu_disable_write_protect_code",
            WriteProtectManuallyDisabled => "write_protect_manually_disabled",
            ConfirmManualWpDisableComplete => "confirm_manual_wp_disable_complete",
            SetComponentList => "set_component_list",
            ReworkMainboard => "rework_mainboard",
            RoFirmwareUpdateComplete => "ro_firmware_update_complete",
            ShutdownForRestock => "shutdown_for_restock",
            ContinueFinalizationAfterRestock => "continue_finalization_after_restock",
            SetDeviceInformation => "set_device_information",
            StartCalibration => "start_calibration",
            RunCalibrationStep => "run_calibration_step",
            ContinueCalibration => "continue_calibration",
            CalibrationComplete => "calibration_complete",
            RetryProvisioning => "retry_provisioning",
            ProvisioningComplete => "provisioning_complete",
            WriteProtectManuallyEnabled => "write_protect_manually_enabled",
            RetryFinalization => "retry_finalization",
            FinalizationComplete => "finalization_complete",
            EndRma => "end_rma",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
