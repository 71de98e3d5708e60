//! Core workflow types and logic.
//!
//! This module contains the pure part of the engine:
//! - State definitions via the `State` trait and the `RmaState` enum
//! - Guard predicates deciding where an operation is legal
//! - The error code taxonomy and the `StateResult` envelope
//! - Immutable history of committed moves
//!
//! Nothing here schedules work or touches shared state.

mod guard;
mod history;
mod result;
mod rma_state;
mod state;

pub use guard::Guard;
pub use history::{Direction, StateHistory, StateTransition};
pub use result::{ErrorCode, StateResult};
pub use rma_state::RmaState;
pub use state::State;
