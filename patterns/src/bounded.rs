//! Bounded concurrency: N requests, at most K in flight.

use crate::PatternError;
use arda_client::{LoreClient, Query};
use arda_types::{Paged, Quote};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

/// Observable in-flight counter.
///
/// The semaphore enforces the bound; the gauge makes it visible. `peak`
/// records the highest simultaneous in-flight count ever observed, which is
/// what tests (and tuning) care about.
#[derive(Debug, Default)]
pub struct FlightGauge {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl FlightGauge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Highest simultaneous in-flight count observed so far.
    #[must_use]
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

/// Issue `requests` quote fetches while holding at most `permits` in flight.
///
/// Every task is spawned immediately, but each must acquire a semaphore
/// permit before its request starts; the rest queue until a permit frees up.
/// Results are collected in task order, one per request.
pub async fn quotes_bounded(
    api: &LoreClient,
    requests: usize,
    permits: usize,
    gauge: Arc<FlightGauge>,
) -> Result<Vec<Paged<Quote>>, PatternError> {
    let semaphore = Arc::new(Semaphore::new(permits));

    let mut workers = Vec::with_capacity(requests);
    for index in 0..requests {
        let semaphore = Arc::clone(&semaphore);
        let gauge = Arc::clone(&gauge);
        let api = api.clone();
        workers.push(tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("semaphore is never closed");
            gauge.enter();
            tracing::debug!(request = index, "permit acquired; fetching");
            let result = api.quotes(&Query::new().limit(3)).await;
            gauge.exit();
            result
        }));
    }

    let mut results = Vec::with_capacity(requests);
    for worker in workers {
        results.push(worker.await??);
    }
    Ok(results)
}
