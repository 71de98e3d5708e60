//! Builder API for engine construction.
//!
//! This module provides the fluent [`EngineBuilder`] and the `state_enum!`
//! macro that derives the [`State`](crate::core::State) plumbing for a
//! workflow state enum.

pub mod engine;
pub mod error;
pub mod macros;

pub use engine::EngineBuilder;
pub use error::BuildError;
