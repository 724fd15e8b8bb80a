//! Fixed-interval run scheduling.
//!
//! The connector process runs forever under this loop: one full run to
//! completion, a fixed sleep, then the next run. Runs never overlap because
//! the loop blocks on the current run before arming the timer, and shutdown
//! is honored only between runs so a partially built graph is never
//! published.

use crate::shared::Result;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

/// One schedulable unit of work, run to completion per tick.
#[async_trait]
pub trait Cycle {
    async fn run_once(&self) -> Result<()>;
}

/// Fixed-interval scheduler with a single exclusive run slot.
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Runs the cycle immediately, then once per interval, until `shutdown`
    /// resolves or the cycle fails.
    ///
    /// The first error ends the loop and is returned to the process
    /// boundary; the scheduler itself performs no retries beyond the next
    /// tick never happening. Shutdown is only observed while sleeping
    /// between runs.
    pub async fn run<C, S>(&self, cycle: &C, shutdown: S) -> Result<()>
    where
        C: Cycle + Sync,
        S: Future<Output = ()> + Send,
    {
        tokio::pin!(shutdown);

        loop {
            cycle.run_once().await?;

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = &mut shutdown => return Ok(()),
            }
        }
    }
}
