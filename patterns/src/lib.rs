//! Concurrency orchestration patterns over the lore API client.
//!
//! Each module demonstrates one composition of [`arda_client::LoreClient`]
//! calls. They are example compositions, not a reusable framework; each one
//! stands alone and is tested independently.
//!
//! | Module | Pattern |
//! |--------|---------|
//! | [`sequential`] | request B starts only after request A completes |
//! | [`parallel`] | two independent requests joined; latency ≈ max, not sum |
//! | [`context`] | I/O on the async workers, CPU-bound work on the blocking pool |
//! | [`isolation`] | a failing sibling is caught locally, the survivor is kept |
//! | [`cancel`] | cooperative cancellation via per-iteration checkpoints |
//! | [`bounded`] | at most K requests in flight, enforced by a counting permit |
//! | [`fanout`] | one child request per parent, flattened in parent order |
//! | [`deferred`] | a composed request future does nothing until awaited |
//! | [`insights`] | fan-in of a movie and its quotes for the dashboard |
//!
//! # Group policies
//!
//! Two distinct combinators expose the two failure-propagation policies:
//! [`join_strict`] fails the whole group on the first error (dropping, and
//! thereby cancelling, the sibling), while [`join_isolated`] lets every
//! branch run to completion and hands back each `Result` separately. The
//! asymmetry is the point: pick the policy explicitly, never by accident.

pub mod bounded;
pub mod cancel;
mod combinators;
pub mod context;
pub mod deferred;
pub mod fanout;
pub mod insights;
pub mod isolation;
pub mod parallel;
pub mod sequential;

pub use combinators::{join_isolated, join_strict};

use arda_client::ApiError;
use thiserror::Error;

/// Failure of an orchestration pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The API answered, but with nothing to continue from.
    #[error("API returned no {what}")]
    EmptyResult { what: &'static str },

    /// A spawned worker task panicked or was aborted.
    #[error("worker task failed")]
    Join(#[from] tokio::task::JoinError),
}
