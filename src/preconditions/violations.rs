//! Precondition violations.

use crate::core::RmaState;
use crate::workflow::Operation;
use thiserror::Error;

/// One reason a request was rejected before touching the script.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    #[error("'{operation}' is only legal in {required:?} (current: {current:?})")]
    WrongState {
        operation: Operation,
        required: RmaState,
        current: RmaState,
    },

    #[error("'{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("'{field}' must be {expected} characters long (got {actual})")]
    WrongLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("'{field}' index {index} is outside the {len} installed entries")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
