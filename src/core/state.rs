//! Core State trait for workflow states.
//!
//! Every state the engine can hand out implements this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for workflow states.
///
/// All methods are pure. A state is an opaque token naming one step of a
/// workflow; any ordering between states comes from the script that is
/// installed, never from the type itself.
///
/// # Required Traits
///
/// - `Clone`: states are copied into results and history records
/// - `PartialEq`: guards compare the current state against a required one
/// - `Debug`: states show up in logs
/// - `Serialize` + `Deserialize`: scripts are loaded from JSON
///
/// # Example
///
/// ```rust
/// use rma_workflow::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DockState {
///     Docked,
///     Undocking,
///     Released,
///     Jammed,
/// }
///
/// impl State for DockState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Docked => "Docked",
///             Self::Undocking => "Undocking",
///             Self::Released => "Released",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Released | Self::Jammed)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and serialized scripts.
    fn name(&self) -> &str;

    /// Whether the workflow is expected to stop here.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state reports a failure of the repair itself.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
