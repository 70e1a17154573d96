//! Movie insights: a movie and its quotes, fetched as one strict group.

use crate::PatternError;
use crate::combinators::join_strict;
use arda_client::{LoreClient, Query};
use arda_types::{EntityId, Movie, Quote};

/// Everything the dashboard needs for one movie card.
#[derive(Debug)]
pub struct MovieInsights {
    pub movie: Movie,
    pub quotes: Vec<Quote>,
}

/// Fetch a movie and its quotes concurrently and combine them.
///
/// Both requests share the strict policy: if either fails, the pair fails.
/// The singular movie lookup arrives in the usual one-doc envelope.
pub async fn movie_insights(
    api: &LoreClient,
    id: &EntityId,
) -> Result<MovieInsights, PatternError> {
    let (movie_page, quote_page) = join_strict(
        api.movie(id),
        api.movie_quotes(id, &Query::new().limit(5)),
    )
    .await?;

    let Some(movie) = movie_page.docs.into_iter().next() else {
        return Err(PatternError::EmptyResult { what: "movie" });
    };
    Ok(MovieInsights {
        movie,
        quotes: quote_page.docs,
    })
}
