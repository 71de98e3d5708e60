//! Validation-based preconditions for facade requests.
//!
//! Each request is checked against the state its operation requires and
//! against its own field rules before the transition engine sees it. Checks
//! use Stillwater's `Validation` so every violation of a request is
//! collected and logged, not just the first.
//!
//! # Example
//!
//! ```rust
//! use rma_workflow::preconditions::{PreconditionBuilder, RequestContext};
//! use rma_workflow::workflow::Operation;
//! use rma_workflow::RmaState;
//!
//! let code = "12345678";
//! let rules = PreconditionBuilder::new()
//!     .require_length("code", 8, code.len())
//!     .build();
//!
//! let context = RequestContext::new(
//!     Operation::SetRsuDisableWriteProtectCode,
//!     RmaState::EnterRsuWpDisableCode,
//! );
//! assert!(rules.allows(&context));
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::PreconditionBuilder;
pub use context::RequestContext;
pub use rules::PreconditionRules;
pub use violations::Violation;
