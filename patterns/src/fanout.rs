//! Fan-out/fan-in: one child request per parent, merged in parent order.

use crate::PatternError;
use arda_client::{LoreClient, Query};
use arda_types::{Movie, Quote};
use futures_util::future::try_join_all;

/// The fan-in result: the parent movies and their flattened quotes.
#[derive(Debug)]
pub struct QuoteHarvest {
    pub movies: Vec<Movie>,
    pub quotes: Vec<Quote>,
}

/// Fetch up to `parents` movies, then fan out one concurrent quote request
/// per movie and flatten the answers.
///
/// Movie ids are treated as opaque join keys. The flattened order is parent
/// order first, then child order within each parent's branch; `try_join_all`
/// preserves the input order of its futures, so no re-sorting is needed. A
/// failure in any branch fails the whole fan-out (strict group policy).
pub async fn quotes_per_movie(
    api: &LoreClient,
    parents: usize,
    quotes_per_parent: u32,
) -> Result<QuoteHarvest, PatternError> {
    let page = api.movies(&Query::new().limit(10)).await?;
    let movies: Vec<Movie> = page.docs.into_iter().take(parents).collect();
    if movies.is_empty() {
        return Err(PatternError::EmptyResult { what: "movies" });
    }

    tracing::debug!(parents = movies.len(), "fanning out quote requests");
    let query = Query::new().limit(quotes_per_parent);
    let branches = movies
        .iter()
        .map(|movie| api.movie_quotes(&movie.id, &query));
    let pages = try_join_all(branches).await?;

    let quotes: Vec<Quote> = pages.into_iter().flat_map(|page| page.docs).collect();
    tracing::debug!(quotes = quotes.len(), "fan-in complete");
    Ok(QuoteHarvest { movies, quotes })
}
