use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::args::{PositiveU64, RemainderPolicy};
use crate::domain::RunSettings;
use crate::error::AppResult;
use crate::metrics::RequestOutcome;

use super::executor::RequestExecutor;

/// Creates the outcome channel, sized so that a full run never waits on a
/// send.
#[must_use]
pub fn outcome_channel(
    total_requests: PositiveU64,
) -> (mpsc::Sender<RequestOutcome>, mpsc::Receiver<RequestOutcome>) {
    let capacity = usize::try_from(total_requests.get())
        .unwrap_or(usize::MAX)
        .min(Semaphore::MAX_PERMITS)
        .max(1);
    mpsc::channel(capacity)
}

/// Splits `total_requests` into one share per worker.
///
/// With [`RemainderPolicy::Drop`] every worker gets `total / concurrency`
/// and up to `concurrency - 1` requests are never issued. With
/// [`RemainderPolicy::Distribute`] the first `total % concurrency` workers
/// take one extra request each.
#[must_use]
pub fn partition_requests(
    total_requests: u64,
    concurrency: usize,
    policy: RemainderPolicy,
) -> Vec<u64> {
    let workers = u64::try_from(concurrency).unwrap_or(u64::MAX);
    let per_worker = total_requests.checked_div(workers).unwrap_or(0);
    let remainder = total_requests.checked_rem(workers).unwrap_or(0);

    (0..concurrency)
        .map(|index| {
            let index = u64::try_from(index).unwrap_or(u64::MAX);
            match policy {
                RemainderPolicy::Distribute if index < remainder => per_worker.saturating_add(1),
                RemainderPolicy::Distribute | RemainderPolicy::Drop => per_worker,
            }
        })
        .collect()
}

/// Spawns one task per worker, each with its own executor, and returns a
/// handle that resolves once every worker has finished.
///
/// All executors are created before the first request goes out, so a setup
/// failure aborts the run without issuing any traffic. `outcomes_tx` is
/// consumed: once the last worker exits the channel closes.
///
/// # Errors
///
/// Returns the first error produced by `make_executor`.
pub fn spawn_worker_pool<E, F>(
    settings: &RunSettings,
    mut make_executor: F,
    outcomes_tx: mpsc::Sender<RequestOutcome>,
) -> AppResult<JoinHandle<AppResult<()>>>
where
    E: RequestExecutor + 'static,
    F: FnMut(usize) -> AppResult<E>,
{
    let requested = settings.total_requests().get();
    let concurrency = settings.concurrency().get();
    let shares = partition_requests(requested, concurrency, settings.remainder());

    let planned = shares
        .iter()
        .fold(0u64, |sum, share| sum.saturating_add(*share));
    let dropped = requested.saturating_sub(planned);
    debug!(
        "Planned {} of {} requests across {} workers (remainder: {})",
        planned,
        requested,
        concurrency,
        settings.remainder().as_str()
    );
    if dropped > 0 {
        warn!(
            "{} of {} requests do not divide across {} workers and will not be issued \
(use --remainder distribute to run them).",
            dropped, requested, concurrency
        );
    }

    let mut executors = Vec::with_capacity(shares.len());
    for worker in 0..shares.len() {
        let executor = make_executor(worker).map_err(|err| {
            error!("Worker {} setup failed: {}", worker, err);
            err
        })?;
        executors.push(executor);
    }

    let url: Arc<str> = Arc::from(settings.url());
    let mut handles = Vec::with_capacity(executors.len());
    for (worker, (executor, assigned)) in executors.into_iter().zip(shares).enumerate() {
        handles.push(tokio::spawn(run_worker(
            worker,
            executor,
            Arc::clone(&url),
            assigned,
            outcomes_tx.clone(),
        )));
    }
    drop(outcomes_tx);

    Ok(tokio::spawn(join_workers(handles)))
}

async fn run_worker<E>(
    worker: usize,
    executor: E,
    url: Arc<str>,
    assigned: u64,
    outcomes_tx: mpsc::Sender<RequestOutcome>,
) where
    E: RequestExecutor,
{
    debug!("Worker {} starting with {} requests", worker, assigned);
    for _ in 0..assigned {
        let outcome = executor.execute(&url).await;
        if outcomes_tx.send(outcome).await.is_err() {
            warn!("Worker {} stopped early: outcome channel closed", worker);
            return;
        }
    }
    debug!("Worker {} finished", worker);
}

async fn join_workers(handles: Vec<JoinHandle<()>>) -> AppResult<()> {
    for handle in handles {
        handle.await?;
    }
    Ok(())
}
