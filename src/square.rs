//! Delayed, fallible squaring.
//!
//! Every square waits out a fixed [`SQUARE_DELAY`] and then checks its input exactly once:
//! negative inputs resolve to [`SquareError::NegativeInput`], everything else to `n * n`.
//!
//! Three surfaces share the same semantics:
//! - [`square_delayed`] — a plain lazy future; the timer starts on first poll.
//! - [`DelayedSquarer::spawn`] — an eagerly started [`SquareTask`] that resolves on the
//!   runtime whether or not anybody awaits it, and replays its one result to every clone.
//! - [`SquareService`] — a `tower` service for composing with middleware.
//!
//! ```rust
//! use primer::square::{square_delayed, SquareError};
//!
//! #[tokio::main]
//! async fn main() {
//!     assert_eq!(square_delayed(5.0).await, Ok(25.0));
//!     assert_eq!(square_delayed(-3.0).await, Err(SquareError::NegativeInput));
//! }
//! ```

pub use crate::error::SquareError;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tower_service::Service;

/// Fixed wait before a square resolves.
pub const SQUARE_DELAY: Duration = Duration::from_millis(1000);

/// Result of a delayed square.
pub type SquareOutcome = Result<f64, SquareError>;

/// Square `n` after [`SQUARE_DELAY`] using the tokio timer.
pub async fn square_delayed(n: f64) -> SquareOutcome {
    DelayedSquarer::new().square(n).await
}

fn resolve(n: f64) -> SquareOutcome {
    if n < 0.0 {
        Err(SquareError::NegativeInput)
    } else {
        Ok(n * n)
    }
}

/// Schedules delayed squares on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayedSquarer;

impl DelayedSquarer {
    pub fn new() -> Self {
        Self
    }

    /// The wait applied to every square.
    pub fn delay(&self) -> Duration {
        SQUARE_DELAY
    }

    /// Arm the timer now and return a future that resolves once it fires.
    ///
    /// Panics if called outside a tokio runtime.
    pub fn square(&self, n: f64) -> impl Future<Output = SquareOutcome> + Send + 'static {
        let wait = tokio::time::sleep(SQUARE_DELAY);
        tracing::debug!(n, delay_ms = SQUARE_DELAY.as_millis() as u64, "square scheduled");
        async move {
            wait.await;
            let outcome = resolve(n);
            tracing::debug!(n, outcome = ?outcome, "square resolved");
            outcome
        }
    }

    /// Start a square on the tokio runtime and return a shareable handle to its result.
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn(&self, n: f64) -> SquareTask {
        let inner = self.square(n).boxed().shared();
        // The background clone drives the timer even if every handle is dropped unawaited.
        drop(tokio::spawn(inner.clone()));
        SquareTask { inner }
    }
}

/// Observable state of a [`SquareTask`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskState {
    Pending,
    Resolved(SquareOutcome),
}

impl TaskState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Handle to an eagerly started square.
///
/// Cloning is cheap; all clones observe the same single resolution.
#[derive(Clone)]
pub struct SquareTask {
    inner: Shared<BoxFuture<'static, SquareOutcome>>,
}

impl SquareTask {
    pub fn state(&self) -> TaskState {
        match self.inner.peek() {
            Some(outcome) => TaskState::Resolved(*outcome),
            None => TaskState::Pending,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.inner.peek().is_some()
    }
}

impl fmt::Debug for SquareTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SquareTask").field("state", &self.state()).finish()
    }
}

impl Future for SquareTask {
    type Output = SquareOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}

/// `tower` service that squares each request after the fixed delay.
#[derive(Debug, Clone, Default)]
pub struct SquareService {
    squarer: DelayedSquarer,
}

impl SquareService {
    pub fn new(squarer: DelayedSquarer) -> Self {
        Self { squarer }
    }
}

impl Service<f64> for SquareService {
    type Response = f64;
    type Error = SquareError;
    type Future = BoxFuture<'static, SquareOutcome>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, n: f64) -> Self::Future {
        self.squarer.square(n).boxed()
    }
}
