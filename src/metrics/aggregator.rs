use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use super::{Report, RequestOutcome};

/// Upper bound on latency slots reserved up front; the vector grows past it
/// on demand.
const LATENCY_PREALLOC_LIMIT: usize = 1 << 20;

/// Spawns the single consumer that folds every outcome into a [`Report`].
///
/// The task finishes once every sender of `outcomes_rx` has been dropped.
#[must_use]
pub fn setup_result_aggregator(
    run_start: Instant,
    outcomes_rx: mpsc::Receiver<RequestOutcome>,
) -> JoinHandle<Report> {
    tokio::spawn(aggregate_outcomes(run_start, outcomes_rx))
}

/// Drains `outcomes_rx` until it is closed and stamps the total run duration.
pub async fn aggregate_outcomes(
    run_start: Instant,
    mut outcomes_rx: mpsc::Receiver<RequestOutcome>,
) -> Report {
    let capacity = outcomes_rx.max_capacity().min(LATENCY_PREALLOC_LIMIT);
    let mut report = Report::with_capacity(capacity);

    while let Some(outcome) = outcomes_rx.recv().await {
        report.record(outcome);
    }

    report.total_duration = run_start.elapsed();
    debug!(
        "Aggregated {} outcomes ({} errors) in {:?}",
        report.total_requests, report.error_count, report.total_duration
    );
    report
}
