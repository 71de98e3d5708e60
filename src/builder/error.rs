//! Errors raised while building an engine.

use crate::error::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Scheduler not specified. Call .scheduler(..) or .tokio_runtime() before .build()")]
    MissingScheduler,

    #[error("Cannot bind a scheduler: {0}")]
    Scheduler(#[from] EngineError),
}
