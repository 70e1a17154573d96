//! Executor-context switching: I/O on the async workers, CPU on the
//! blocking pool.

use crate::PatternError;
use arda_client::{LoreClient, Query};
use arda_types::{Paged, Quote};

/// Naive recursive Fibonacci. Deliberately unmemoized: the point is a pure,
/// synchronous computation expensive enough to be worth moving off the I/O
/// workers.
#[must_use]
pub fn fibonacci(n: u64) -> u64 {
    if n <= 1 {
        n
    } else {
        fibonacci(n - 1) + fibonacci(n - 2)
    }
}

/// Fetch quotes, then crunch numbers on the blocking pool.
///
/// The fetch suspends on the network and costs the async workers nothing
/// while waiting. The Fibonacci call would pin a worker thread for its whole
/// duration, so it runs via [`tokio::task::spawn_blocking`] on the dedicated
/// blocking pool instead, leaving the I/O workers free for other tasks.
pub async fn quotes_then_crunch(
    api: &LoreClient,
    depth: u64,
) -> Result<(Paged<Quote>, u64), PatternError> {
    let quotes = api.quotes(&Query::new().limit(10)).await?;
    tracing::debug!(docs = quotes.docs.len(), "I/O stage done; switching to blocking pool");

    let crunched = tokio::task::spawn_blocking(move || fibonacci(depth)).await?;
    Ok((quotes, crunched))
}
