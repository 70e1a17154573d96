//! Cooperative cancellation: the task observes the token and exits itself.

use crate::PatternError;
use crate::context::fibonacci;
use arda_client::ApiError;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Per-iteration work factor. Small enough that the cancellation checkpoint
/// comes around every fraction of a millisecond.
const WORK_DEPTH: u64 = 20;

/// Run a compute loop until `cancel` fires or `max_iterations` complete.
///
/// The token is checked once per iteration; those checks are the loop's
/// only checkpoints.
/// A cancellation request that lands mid-iteration takes effect at the next
/// check, never by preemption. Returns the number of completed iterations.
pub async fn compute_until_cancelled(cancel: CancellationToken, max_iterations: u64) -> u64 {
    let mut completed = 0;
    while completed < max_iterations {
        if cancel.is_cancelled() {
            tracing::debug!(completed, "compute loop observed cancellation; stopping");
            break;
        }
        let _ = fibonacci(WORK_DEPTH);
        completed += 1;
        // Hand the worker thread back between iterations.
        tokio::task::yield_now().await;
    }
    completed
}

/// Race a request against a cancellation token.
///
/// Loop iterations are one kind of checkpoint; suspension points are the
/// other. A request future parked on the network is abandoned the moment the
/// token fires (dropping it cancels the in-flight call) and the caller sees
/// [`ApiError::Cancelled`], which signals expected termination rather than a
/// failure.
pub async fn with_cancellation<T>(
    cancel: &CancellationToken,
    request: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    // Biased so an already-cancelled token wins before the request is ever
    // polled; otherwise the first poll would put it on the wire.
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(ApiError::Cancelled),
        result = request => result,
    }
}

/// Spawn the compute loop, cancel it after `delay`, and wait for it to stop.
///
/// The await on the join handle guarantees the task has fully terminated
/// before this function returns; nothing runs past the cancellation.
pub async fn run_cancellation_demo(delay: Duration) -> Result<u64, PatternError> {
    let cancel = CancellationToken::new();
    let worker = tokio::spawn(compute_until_cancelled(cancel.clone(), u64::MAX));

    tokio::time::sleep(delay).await;
    cancel.cancel();

    let completed = worker.await?;
    tracing::info!(completed, "worker stopped cooperatively");
    Ok(completed)
}
