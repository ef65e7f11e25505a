//! Join combinators for a view's concurrent reads.
//!
//! Two policies are available:
//!
//! - **fail-fast** (`fail_fast2`, `fail_fast4`): all requests run
//!   concurrently; the first error wins and the remaining requests are
//!   dropped. No partial data reaches the view. Every dashboard view uses
//!   this policy.
//! - **settle** (`settle2`, `settle4`): every request runs to completion and
//!   each outcome is returned on its own, for callers that want to show the
//!   subset that succeeded.

use std::future::Future;

use schooldesk_domain::error::DashboardError;

type Outcome<T> = Result<T, DashboardError>;

/// Run two requests concurrently, failing on the first error.
///
/// # Errors
///
/// Returns the first error produced by either request.
pub async fn fail_fast2<A, B, FA, FB>(a: FA, b: FB) -> Outcome<(A, B)>
where
    FA: Future<Output = Outcome<A>>,
    FB: Future<Output = Outcome<B>>,
{
    tokio::try_join!(a, b)
}

/// Run four requests concurrently, failing on the first error.
///
/// # Errors
///
/// Returns the first error produced by any request.
pub async fn fail_fast4<A, B, C, D, FA, FB, FC, FD>(
    a: FA,
    b: FB,
    c: FC,
    d: FD,
) -> Outcome<(A, B, C, D)>
where
    FA: Future<Output = Outcome<A>>,
    FB: Future<Output = Outcome<B>>,
    FC: Future<Output = Outcome<C>>,
    FD: Future<Output = Outcome<D>>,
{
    tokio::try_join!(a, b, c, d)
}

/// Run two requests concurrently and keep every outcome.
pub async fn settle2<A, B, FA, FB>(a: FA, b: FB) -> (Outcome<A>, Outcome<B>)
where
    FA: Future<Output = Outcome<A>>,
    FB: Future<Output = Outcome<B>>,
{
    tokio::join!(a, b)
}

/// Run four requests concurrently and keep every outcome.
pub async fn settle4<A, B, C, D, FA, FB, FC, FD>(
    a: FA,
    b: FB,
    c: FC,
    d: FD,
) -> (Outcome<A>, Outcome<B>, Outcome<C>, Outcome<D>)
where
    FA: Future<Output = Outcome<A>>,
    FB: Future<Output = Outcome<B>>,
    FC: Future<Output = Outcome<C>>,
    FD: Future<Output = Outcome<D>>,
{
    tokio::join!(a, b, c, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::future;

    fn transport(msg: &str) -> DashboardError {
        DashboardError::Transport(msg.to_string())
    }

    #[tokio::test]
    async fn should_return_all_values_when_every_request_succeeds() {
        let joined = fail_fast4(
            async { Ok(1_u8) },
            async { Ok("two") },
            async { Ok(3.0_f32) },
            async { Ok(vec![4]) },
        )
        .await
        .unwrap();
        assert_eq!(joined.0, 1);
        assert_eq!(joined.1, "two");
        assert_eq!(joined.3, vec![4]);
    }

    #[tokio::test]
    async fn should_fail_fast_without_waiting_for_pending_requests() {
        let result = fail_fast2(
            future::pending::<Outcome<u8>>(),
            async { Err::<u8, _>(transport("down")) },
        )
        .await;
        assert_eq!(result, Err(transport("down")));
    }

    #[tokio::test]
    async fn should_start_every_request_concurrently() {
        let counter = Cell::new(0);
        let started = &counter;
        let probe = move || async move {
            started.set(started.get() + 1);
            Ok::<_, DashboardError>(())
        };
        fail_fast4(probe(), probe(), probe(), probe()).await.unwrap();
        assert_eq!(started.get(), 4);
    }

    #[tokio::test]
    async fn should_keep_partial_outcomes_when_settling() {
        let (a, b) = settle2(async { Ok(1_u8) }, async {
            Err::<u8, _>(transport("down"))
        })
        .await;
        assert_eq!(a, Ok(1));
        assert_eq!(b, Err(transport("down")));
    }

    #[tokio::test]
    async fn should_settle_four_requests() {
        let (a, b, c, d) = settle4(
            async { Ok(1_u8) },
            async { Err::<u8, _>(transport("x")) },
            async { Ok(3_u8) },
            async { Err::<u8, _>(DashboardError::Cancelled) },
        )
        .await;
        assert!(a.is_ok() && c.is_ok());
        assert!(b.is_err() && d.is_err());
    }
}
