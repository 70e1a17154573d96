//! Deferred start: a composed request future does nothing until awaited.

use arda_client::{ApiError, LoreClient, Query};
use arda_types::Quote;

/// Compose the request first, trigger it later.
///
/// Rust futures are inert by construction: building the call below performs
/// no I/O. Only the first poll, the `.await` at the end, puts the request
/// on the wire, so the two log lines always appear before anything is sent.
pub async fn deferred_random_quote(api: &LoreClient) -> Result<Quote, ApiError> {
    let query = Query::new();
    let pending = api.random_quote(&query);
    tracing::info!("quote request composed; nothing sent yet");

    tracing::info!("user clicked the button; starting the request");
    pending.await
}
