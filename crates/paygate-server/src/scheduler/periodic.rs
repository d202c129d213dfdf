//! Generic fixed-interval task engine.
//!
//! Runs a named action once immediately and then once per period, forever,
//! until asked to stop. One engine instance drives one action; the process
//! may run several independent tasks side by side.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running periodic task.
///
/// Dropping the handle without calling [`PeriodicTask::shutdown`] also stops
/// the loop after the current cycle, so handles must be kept alive for the
/// lifetime of the process.
pub struct PeriodicTask {
    name: &'static str,
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl PeriodicTask {
    /// Ask the loop to stop, then wait for it to exit.
    ///
    /// Cooperative: an in-flight cycle runs to completion first; the stop is
    /// only observed between cycles. Consuming `self` makes repeated stops a
    /// non-issue.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.handle.await {
            tracing::error!(task = self.name, error = %e, "periodic task did not exit cleanly");
        }
    }
}

/// Spawn `action` to run once immediately and then every `period`.
///
/// An `Err` from the action is logged under `name` and the loop schedules
/// the next cycle as if it had succeeded — one bad cycle never takes the
/// engine down. Cycles never overlap: the action is awaited to completion
/// before the next tick is taken, and a cycle that overruns the period
/// delays the following tick instead of queueing a backlog.
pub fn spawn<A, Fut>(name: &'static str, period: Duration, mut action: A) -> PeriodicTask
where
    A: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            task = name,
            period_secs = period.as_secs(),
            "periodic task started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown_rx.changed() => break,
            }

            if let Err(e) = action().await {
                tracing::error!(task = name, error = %e, "periodic task cycle failed");
            }

            // Re-check after the cycle so a stop requested mid-cycle is
            // honoured without waiting out another period.
            if *shutdown_rx.borrow() {
                break;
            }
        }

        tracing::info!(task = name, "periodic task stopped");
    });

    PeriodicTask {
        name,
        shutdown_tx,
        handle,
    }
}
