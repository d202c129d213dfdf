//! Background job scheduling.
//!
//! [`periodic`] is the generic fixed-interval engine; [`rate_sync`] is the
//! one job this service runs on it. Jobs are plain async closures handed to
//! the engine, each on its own timer, mutually independent.

pub mod periodic;
pub mod rate_sync;

use std::sync::Arc;

use paygate_core::AppConfig;
use paygate_feed::{FeedError, QuoteClient};
use sqlx::PgPool;

use self::periodic::PeriodicTask;
use self::rate_sync::{RateSyncJob, SYNC_INTERVAL};

/// Build the shared quote client and start every background job.
///
/// Returns the running task handles. Hold them for the lifetime of the
/// process and call [`PeriodicTask::shutdown`] on each during exit —
/// dropping a handle also stops its job.
///
/// # Errors
///
/// Returns [`FeedError`] if the quote client cannot be constructed (for
/// example an unusable proxy URL).
pub fn start_jobs(pool: PgPool, config: &Arc<AppConfig>) -> Result<Vec<PeriodicTask>, FeedError> {
    let client = QuoteClient::new(config.web_proxy.as_deref())?;
    let job = Arc::new(RateSyncJob::new(pool, client));

    let config = Arc::clone(config);
    let rate_sync = periodic::spawn("rate-sync", SYNC_INTERVAL, move || {
        let job = Arc::clone(&job);
        // Override snapshot taken at the start of the cycle; the job never
        // consults configuration mid-cycle.
        let overrides = config.rate_overrides;
        async move {
            job.run_cycle(&overrides)
                .await
                .map_err(anyhow::Error::from)
        }
    });

    Ok(vec![rate_sync])
}
