//! Group-policy combinators: fail-fast vs. sibling isolation.

use std::future::Future;

/// Run two fallible futures concurrently; the first error wins.
///
/// When either branch fails, the other is dropped mid-flight; dropping a
/// future cancels it, so under this policy a sibling failure cancels the
/// whole group. Latency of the success path is the max of the two branches.
pub async fn join_strict<A, B, E>(
    left: impl Future<Output = Result<A, E>>,
    right: impl Future<Output = Result<B, E>>,
) -> Result<(A, B), E> {
    tokio::try_join!(left, right)
}

/// Run two fallible futures concurrently; each branch keeps its own outcome.
///
/// A failure in one branch never cancels or fails the other. Callers decide
/// per-branch what to do with the error; the group itself cannot fail.
pub async fn join_isolated<A, B, E>(
    left: impl Future<Output = Result<A, E>>,
    right: impl Future<Output = Result<B, E>>,
) -> (Result<A, E>, Result<B, E>) {
    tokio::join!(left, right)
}

#[cfg(test)]
mod tests {
    use super::{join_isolated, join_strict};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    async fn ok_after(delay: Duration, value: u32, completed: Arc<AtomicBool>) -> Result<u32, &'static str> {
        tokio::time::sleep(delay).await;
        completed.store(true, Ordering::SeqCst);
        Ok(value)
    }

    #[tokio::test]
    async fn strict_joins_both_successes() {
        let flag = Arc::new(AtomicBool::new(false));
        let result = join_strict(
            ok_after(Duration::from_millis(5), 1, Arc::clone(&flag)),
            ok_after(Duration::from_millis(5), 2, Arc::clone(&flag)),
        )
        .await;
        assert_eq!(result, Ok((1, 2)));
    }

    #[tokio::test]
    async fn strict_failure_cancels_the_sibling() {
        let sibling_completed = Arc::new(AtomicBool::new(false));
        let result = join_strict(
            async { Err::<u32, _>("boom") },
            ok_after(Duration::from_millis(50), 2, Arc::clone(&sibling_completed)),
        )
        .await;
        assert_eq!(result, Err("boom"));
        // The slow sibling was dropped before it could finish.
        assert!(!sibling_completed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn isolated_failure_leaves_the_sibling_running() {
        let sibling_completed = Arc::new(AtomicBool::new(false));
        let (left, right) = join_isolated(
            async { Err::<u32, _>("boom") },
            ok_after(Duration::from_millis(20), 2, Arc::clone(&sibling_completed)),
        )
        .await;
        assert_eq!(left, Err("boom"));
        assert_eq!(right, Ok(2));
        assert!(sibling_completed.load(Ordering::SeqCst));
    }
}
