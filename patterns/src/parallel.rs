//! Parallel composition: independent requests joined under fail-fast policy.

use crate::combinators::join_strict;
use arda_client::{ApiError, LoreClient, Query};
use arda_types::{Character, Movie, Paged};

/// Fetch movies and characters concurrently.
///
/// Both requests are in flight at the same time; neither waits for the other.
/// Results are combined only after both complete, so the observed wall-clock
/// time is roughly the max of the two latencies rather than their sum. Under
/// [`join_strict`] the first failure fails the pair.
pub async fn movies_and_characters(
    api: &LoreClient,
) -> Result<(Paged<Movie>, Paged<Character>), ApiError> {
    join_strict(api.movies(&Query::new()), api.characters(&Query::new())).await
}
