//! The steps of the repair workflow.

use crate::state_enum;

state_enum! {
    /// One step of the RMA workflow.
    ///
    /// Variant order is declaration order only; the installed script decides
    /// which state follows which.
    #[derive(Default)]
    pub enum RmaState {
        /// No repair in progress, or the backend could not tell.
        #[default]
        Unknown,
        WelcomeScreen,
        ConfigureNetwork,
        UpdateOs,
        SelectComponents,
        ChooseDestination,
        ChooseWipeDevice,
        ChooseWriteProtectDisableMethod,
        EnterRsuWpDisableCode,
        WaitForManualWpDisable,
        WpDisableComplete,
        UpdateRoFirmware,
        Restock,
        UpdateDeviceInformation,
        CheckCalibration,
        SetupCalibration,
        RunCalibration,
        ProvisionDevice,
        WaitForManualWpEnable,
        Finalize,
        RepairComplete,
        HardwareError,
        Reboot,
    }
    final: [RepairComplete]
    error: [HardwareError]
}
