//! Abnormal failures of the engine itself.
//!
//! Workflow outcomes travel inline as [`ErrorCode`](crate::core::ErrorCode);
//! the variants here only cover misuse and discarded work.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("'{operation}' needs '{setting}' to be installed first")]
    NotConfigured {
        operation: &'static str,
        setting: &'static str,
    },

    #[error("Result of '{operation}' was discarded by a reset")]
    Discarded { operation: &'static str },

    #[error("No tokio runtime is running on this thread")]
    NoRuntime,
}
