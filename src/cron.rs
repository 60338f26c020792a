//! One-shot scheduled task wrapper

use crate::error::Result;
use std::future::Future;
use std::time::Instant;
use tracing::{error, info};

/// Run a one-shot scheduled task with start/finish timing logs
///
/// Logs the start timestamp, the outcome, and the elapsed time, then
/// returns the task's result unchanged so the caller can map a failure to
/// a non-zero exit status.
pub async fn run_scheduled<T, Fut>(task: T) -> Result<()>
where
    T: FnOnce() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let started = Instant::now();
    info!("Cron job started at {}", chrono::Utc::now().to_rfc3339());

    let result = task().await;

    match &result {
        Ok(()) => info!("Scheduled task completed successfully"),
        Err(e) => error!("Cron job failed: {}", e),
    }
    info!("Cron job finished in {:.2}s", started.elapsed().as_secs_f64());

    result
}
