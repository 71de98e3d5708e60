//! Deferred results handed out by every facade operation.

use crate::error::EngineError;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Result of a facade call, resolved later by the engine.
///
/// Await it on a runtime, or poll it synchronously with
/// [`try_take`](Self::try_take) when driving a
/// [`ManualScheduler`](crate::scheduler::ManualScheduler). Rejections are
/// delivered the same way as values, never inside the call.
///
/// Dropping a `Pending` abandons the result; the engine still runs the
/// operation to completion.
#[derive(Debug)]
pub struct Pending<T> {
    operation: &'static str,
    rx: oneshot::Receiver<Result<T, EngineError>>,
}

pub(crate) type Resolver<T> = oneshot::Sender<Result<T, EngineError>>;

impl<T> Unpin for Pending<T> {}

impl<T> Pending<T> {
    pub(crate) fn channel(operation: &'static str) -> (Resolver<T>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { operation, rx })
    }

    /// Name of the operation that produced this result.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Take the outcome if it is already known, without blocking.
    ///
    /// Returns `None` while the engine has not resolved the call yet.
    /// After an outcome has been taken, later calls report it as discarded.
    pub fn try_take(&mut self) -> Option<Result<T, EngineError>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(EngineError::Discarded {
                operation: self.operation,
            })),
        }
    }
}

impl<T> Future for Pending<T> {
    type Output = Result<T, EngineError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let operation = this.operation;
        Pin::new(&mut this.rx).poll(cx).map(|received| {
            received.unwrap_or(Err(EngineError::Discarded { operation }))
        })
    }
}
