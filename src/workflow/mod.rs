//! The primary workflow state machine.
//!
//! - **Script**: the planned responses, consumed strictly in order
//! - **Operation registry**: which request is legal in which state
//! - **Transition engine**: cursor, undo stack and history over the script

mod engine;
mod registry;
mod script;

pub use engine::{Cursor, TransitionEngine};
pub use registry::Operation;
pub use script::{Script, ScriptError};
