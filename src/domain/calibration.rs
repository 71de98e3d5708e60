//! Calibration payloads.

use super::device::ComponentType;
use serde::{Deserialize, Serialize};

/// Progress of a single component's calibration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalibrationStatus {
    Waiting,
    InProgress,
    Complete,
    Failed,
    Skip,
}

/// Per-component calibration update.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibrationComponentStatus {
    pub component: ComponentType,
    pub status: CalibrationStatus,
    /// Fraction complete, in `[0, 1]`.
    pub progress: f64,
}

impl CalibrationComponentStatus {
    pub fn new(component: ComponentType, status: CalibrationStatus, progress: f64) -> Self {
        Self {
            component,
            status,
            progress,
        }
    }
}

/// Outcome of a whole calibration step.
///
/// Only `Complete` tells the caller to finish calibration. The other three
/// each tell it to ask for continuation; the engine relays them and never
/// counts rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalibrationOverallStatus {
    Complete,
    CurrentRoundComplete,
    CurrentRoundFailed,
    InitializationFailed,
}

impl CalibrationOverallStatus {
    pub fn is_complete(self) -> bool {
        self == CalibrationOverallStatus::Complete
    }
}

/// What the technician must do before a calibration round starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalibrationSetupInstruction {
    PlaceBaseOnFlatSurface,
    PlaceLidOnFlatSurface,
    NoNeedCalibration,
}
