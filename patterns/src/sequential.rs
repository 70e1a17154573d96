//! Sequential composition: the dependent request waits for its input.

use crate::PatternError;
use arda_client::{LoreClient, Query};
use arda_types::{Book, Chapter, Paged};

/// Fetch the book list, then the chapters of the first book.
///
/// The chapter request cannot be issued until the book request has completed,
/// because its path depends on the returned book id. No concurrency here;
/// total latency is the sum of both calls.
pub async fn first_book_chapters(
    api: &LoreClient,
) -> Result<(Book, Paged<Chapter>), PatternError> {
    let books = api.books(&Query::new()).await?;
    let Some(book) = books.docs.into_iter().next() else {
        return Err(PatternError::EmptyResult { what: "books" });
    };

    tracing::debug!(book = %book.id, "book list fetched; requesting chapters");
    let chapters = api.book_chapters(&book.id, &Query::new()).await?;
    Ok((book, chapters))
}
