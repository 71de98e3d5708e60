//! Payload and parameter types exchanged with the presentation layer.

mod calibration;
mod device;
mod provisioning;
mod update;

pub use calibration::{
    CalibrationComponentStatus, CalibrationOverallStatus, CalibrationSetupInstruction,
    CalibrationStatus,
};
pub use device::{
    Component, ComponentRepairStatus, ComponentType, DeviceInformation, FeatureLevel,
    HardwareVerificationResult, OsUpdateCheck, SaveLogResponse, ShutdownMethod,
    WriteProtectDisableCompleteAction,
};
pub use provisioning::{
    FinalizationError, FinalizationProgress, FinalizationStatus, ProvisioningError,
    ProvisioningProgress, ProvisioningStatus,
};
pub use update::{
    OsUpdateOperation, OsUpdateProgress, RoFirmwareUpdateProgress, UpdateErrorCode,
    UpdateRoFirmwareStatus,
};
