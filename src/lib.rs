//! rma-workflow: a simulated device-repair (RMA) backend
//!
//! The engine stands in for a privileged repair daemon. It hands out a
//! pre-loaded script of workflow states as requests succeed, rejects
//! requests whose preconditions fail without side effects, and drives
//! independent progress channels (calibration, provisioning, firmware and
//! OS updates, finalization, sensors) with simulated timing.
//!
//! The design keeps a pure core and an effectful shell:
//!
//! - **core**: states, guards, error codes and immutable history
//! - **workflow**: script, cursor and the transition engine
//! - **preconditions**: accumulating per-request validation
//! - **scheduler**: the injectable clock every deferred result goes through
//! - **observers** / **simulators**: notification channels and the plans
//!   that feed them
//! - **service**: the [`RmaService`] facade
//!
//! # Example
//!
//! ```rust
//! use rma_workflow::scheduler::ManualScheduler;
//! use rma_workflow::{EngineBuilder, ErrorCode, RmaState, Script};
//! use std::sync::Arc;
//!
//! let scheduler = Arc::new(ManualScheduler::new());
//! let service = EngineBuilder::new()
//!     .scheduler(scheduler.clone())
//!     .script(Script::from_states([RmaState::WelcomeScreen, RmaState::UpdateOs]))
//!     .build()
//!     .unwrap();
//!
//! let mut forward = service.begin_finalization();
//! scheduler.run_until_idle();
//! assert_eq!(forward.try_take().unwrap().unwrap().state, RmaState::UpdateOs);
//!
//! let mut back = service.transition_previous_state();
//! scheduler.run_until_idle();
//! let previous = back.try_take().unwrap().unwrap();
//! assert_eq!(previous.state, RmaState::WelcomeScreen);
//! assert_eq!(previous.error, ErrorCode::Ok);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod observers;
pub mod preconditions;
pub mod scheduler;
pub mod service;
pub mod simulators;
pub mod workflow;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder};
pub use config::EngineConfig;
pub use core::{ErrorCode, RmaState, State, StateResult};
pub use error::EngineError;
pub use service::{Pending, RmaService};
pub use workflow::Script;
