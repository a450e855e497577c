use tokio::time::Instant;
use tracing::{debug, info};

use crate::domain::RunSettings;
use crate::error::AppResult;
use crate::http::{HttpExecutor, RequestExecutor, outcome_channel, spawn_worker_pool};
use crate::metrics::{Report, setup_result_aggregator};

/// Runs the load described by `settings` against the network and returns
/// the finished report.
///
/// # Errors
///
/// Returns an error when a worker's HTTP client cannot be built or a worker
/// task panics. Individual request failures are counted in the report.
pub async fn run_load(settings: &RunSettings) -> AppResult<Report> {
    let request_timeout = settings.request_timeout();
    run_load_with(settings, |_| HttpExecutor::new(request_timeout)).await
}

/// Same as [`run_load`] with a caller-supplied executor per worker.
///
/// # Errors
///
/// Returns an error when `make_executor` fails or a worker task panics.
pub async fn run_load_with<E, F>(settings: &RunSettings, make_executor: F) -> AppResult<Report>
where
    E: RequestExecutor + 'static,
    F: FnMut(usize) -> AppResult<E>,
{
    info!(
        "Sending {} GET requests to {} with {} workers",
        settings.total_requests().get(),
        settings.url(),
        settings.concurrency().get()
    );

    let run_start = Instant::now();
    let (outcomes_tx, outcomes_rx) = outcome_channel(settings.total_requests());
    let pool = spawn_worker_pool(settings, make_executor, outcomes_tx)?;
    let aggregator = setup_result_aggregator(run_start, outcomes_rx);

    let report = aggregator.await?;
    pool.await??;

    debug!(
        "Run finished: {} requests, {} errors",
        report.total_requests, report.error_count
    );
    Ok(report)
}
