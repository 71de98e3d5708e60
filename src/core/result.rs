//! Error codes and the state result envelope.
//!
//! Domain failures are values, not Rust errors: every transition-producing
//! operation answers with a [`StateResult`] whose `error` field says whether
//! the returned state is authoritative.

use super::rma_state::RmaState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of error codes the backend reports inline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[default]
    Ok,
    RmaNotRequired,
    RequestInvalid,
    TransitionFailed,
    CannotSaveLog,
    UsbNotFound,
    ProvisioningFailed,
    FinalizationFailed,
    /// The device is about to reboot; no further transitions are valid.
    ExpectReboot,
    /// The device is about to shut down; no further transitions are valid.
    ExpectShutdown,
}

impl ErrorCode {
    pub fn is_ok(self) -> bool {
        self == ErrorCode::Ok
    }

    /// True for the codes that end the session with a power cycle.
    ///
    /// The engine passes these through untouched; callers stop issuing
    /// transitions and show a reboot or shutdown notice.
    pub fn expects_power_cycle(self) -> bool {
        matches!(self, ErrorCode::ExpectReboot | ErrorCode::ExpectShutdown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Ok => "Ok",
            ErrorCode::RmaNotRequired => "RmaNotRequired",
            ErrorCode::RequestInvalid => "RequestInvalid",
            ErrorCode::TransitionFailed => "TransitionFailed",
            ErrorCode::CannotSaveLog => "CannotSaveLog",
            ErrorCode::UsbNotFound => "UsbNotFound",
            ErrorCode::ProvisioningFailed => "ProvisioningFailed",
            ErrorCode::FinalizationFailed => "FinalizationFailed",
            ErrorCode::ExpectReboot => "ExpectReboot",
            ErrorCode::ExpectShutdown => "ExpectShutdown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot returned by every transition-producing operation.
///
/// Only a result with `error == Ok` names the authoritative current state.
/// Script entries use the same shape, so omitted fields default to
/// `Ok` / `false` when a script is read from JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResult {
    pub state: RmaState,
    #[serde(default)]
    pub error: ErrorCode,
    #[serde(default)]
    pub can_exit: bool,
    #[serde(default)]
    pub can_go_back: bool,
}

impl StateResult {
    pub fn new(state: RmaState, can_exit: bool, can_go_back: bool) -> Self {
        Self {
            state,
            error: ErrorCode::Ok,
            can_exit,
            can_go_back,
        }
    }

    /// Entry for `state` with both flags cleared and no error.
    pub fn ok(state: RmaState) -> Self {
        Self::new(state, false, false)
    }

    /// What every operation answers when no script is installed.
    pub fn rma_not_required() -> Self {
        Self::ok(RmaState::Unknown).with_error(ErrorCode::RmaNotRequired)
    }

    pub fn with_error(self, error: ErrorCode) -> Self {
        Self { error, ..self }
    }

    pub fn is_authoritative(&self) -> bool {
        self.error.is_ok()
    }
}

impl From<RmaState> for StateResult {
    fn from(state: RmaState) -> Self {
        Self::ok(state)
    }
}
