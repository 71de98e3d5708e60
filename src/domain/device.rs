//! Device, component and sensor payloads.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    Audio,
    Battery,
    Storage,
    VpdCached,
    Network,
    Camera,
    Stylus,
    Touchpad,
    Touchscreen,
    Dram,
    DisplayPanel,
    Cellular,
    Ethernet,
    Wireless,
    BaseAccelerometer,
    LidAccelerometer,
    BaseGyroscope,
    LidGyroscope,
    Screen,
    Keyboard,
    PowerButton,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentRepairStatus {
    #[default]
    Unknown,
    Original,
    Replaced,
    Missing,
}

/// A component as listed on the component selection step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub component: ComponentType,
    pub state: ComponentRepairStatus,
    pub identifier: String,
}

impl Component {
    pub fn new(
        component: ComponentType,
        state: ComponentRepairStatus,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            component,
            state,
            identifier: identifier.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureLevel {
    Unsupported,
    Unknown,
    Level0,
    Level1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WriteProtectDisableCompleteAction {
    Unknown,
    SkippedAssembleDevice,
    CompleteAssembleDevice,
    CompleteKeepDeviceOpen,
    CompleteNoOp,
}

/// How the device leaves the repair flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShutdownMethod {
    Reboot,
    Shutdown,
}

/// Fields submitted on the device information step.
///
/// Indices refer to the region, SKU and custom-label lists the backend
/// reported earlier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInformation {
    pub serial_number: String,
    pub region_index: usize,
    pub sku_index: usize,
    pub custom_label_index: Option<usize>,
    pub dram_part_number: String,
    pub is_chassis_branded: bool,
    pub hw_compliance_version: u32,
}

/// Result of comparing installed hardware against what the device expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareVerificationResult {
    pub is_compliant: bool,
    pub error_message: String,
}

impl HardwareVerificationResult {
    pub fn compliant() -> Self {
        Self {
            is_compliant: true,
            error_message: String::new(),
        }
    }

    pub fn non_compliant(error_message: impl Into<String>) -> Self {
        Self {
            is_compliant: false,
            error_message: error_message.into(),
        }
    }
}

/// Answer to an OS update check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsUpdateCheck {
    pub update_available: bool,
    pub version: String,
}

/// Answer to a log save request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveLogResponse {
    pub save_path: String,
    /// `Ok`, `CannotSaveLog` or `UsbNotFound`.
    pub error: crate::core::ErrorCode,
}
