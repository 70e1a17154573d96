//! Partial-failure isolation: a failing sibling never takes down the group.

use crate::combinators::join_isolated;
use arda_client::{ApiError, LoreClient, Query};
use arda_types::{Character, Movie, Paged};

/// Fetch movies and characters concurrently under the isolating policy.
///
/// Unlike [`crate::parallel::movies_and_characters`], a failure in one branch
/// is caught and reported locally while the sibling's result is still
/// returned. The function itself cannot fail: each branch carries its own
/// `Result`.
pub async fn movies_and_characters_isolated(
    api: &LoreClient,
) -> (Result<Paged<Movie>, ApiError>, Result<Paged<Character>, ApiError>) {
    let (movies, characters) =
        join_isolated(api.movies(&Query::new()), api.characters(&Query::new())).await;

    if let Err(err) = &movies {
        report_sibling_failure("movies", err);
    }
    if let Err(err) = &characters {
        report_sibling_failure("characters", err);
    }

    (movies, characters)
}

/// Cancellation is expected termination, not a failure; log it quietly.
fn report_sibling_failure(what: &str, err: &ApiError) {
    if err.is_cancelled() {
        tracing::debug!(what, "sibling stopped by cancellation");
    } else {
        tracing::warn!(what, error = %err, "sibling failed; continuing with the survivor");
    }
}
