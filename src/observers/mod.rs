//! Observer channels and the dispatcher that feeds them.
//!
//! Each channel has its own observer interface with exactly the callbacks
//! that channel delivers. Registrations last until the engine is reset.

mod channel;
mod dispatcher;
mod plan;
mod registry;
mod traits;

pub use channel::{Channel, Notification};
pub use dispatcher::ObserverDispatcher;
pub use plan::{PlannedNotification, ProgressPlan};
pub use registry::{ObserverHandle, ObserverRegistry};
pub use traits::{
    CalibrationObserver, ErrorObserver, ExternalDiskStateObserver, FinalizationObserver,
    HardwareVerificationStatusObserver, HardwareWriteProtectionStateObserver, OsUpdateObserver,
    PowerCableStateObserver, ProvisioningObserver, RoFirmwareUpdateObserver,
};
