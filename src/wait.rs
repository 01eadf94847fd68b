//! Injectable wait primitive for the status-poll loop
//!
//! Polling is the only place this crate suspends between requests. Routing
//! that suspension through a trait lets tests and embedders substitute the
//! delay (skip it, record it, or drive it from a paused clock) without
//! touching the poll logic itself.

use async_trait::async_trait;
use std::time::Duration;

/// Trait for the delay between status checks
///
/// Implementations decide how to spend the requested interval. The production
/// implementation is [`TokioWaiter`]; [`NoWait`] returns immediately and is
/// intended for tests and embedders that manage pacing themselves.
///
/// # Examples
///
/// ```
/// use report_dl::{NoWait, Waiter};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let waiter = NoWait;
/// // Returns immediately regardless of the requested interval.
/// waiter.wait(Duration::from_secs(60)).await;
/// # }
/// ```
#[async_trait]
pub trait Waiter: Send + Sync {
    /// Suspend for the given interval
    async fn wait(&self, interval: Duration);

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}

/// Production waiter backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioWaiter;

#[async_trait]
impl Waiter for TokioWaiter {
    async fn wait(&self, interval: Duration) {
        tokio::time::sleep(interval).await;
    }

    fn name(&self) -> &'static str {
        "tokio"
    }
}

/// Waiter that returns immediately without sleeping
///
/// Useful in tests that exercise the full poll loop but must not spend wall
/// time, and for embedders that pace status checks externally.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWait;

#[async_trait]
impl Waiter for NoWait {
    async fn wait(&self, _interval: Duration) {}

    fn name(&self) -> &'static str {
        "no-wait"
    }
}
