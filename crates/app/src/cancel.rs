//! Cancellation tied to a view's lifetime.
//!
//! A view owns a [`CancelScope`]; every request it starts runs under a
//! [`CancelToken`] taken from that scope. When the view is cleaned up the
//! scope is cancelled (or dropped) and any request still in flight is
//! dropped, so its result can never land on a view that no longer exists.

use std::future::Future;

use schooldesk_domain::error::DashboardError;
use tokio::sync::watch;

/// Owner side of a cancellation signal. Cancels on drop.
#[derive(Debug)]
pub struct CancelScope {
    sender: watch::Sender<bool>,
}

impl Default for CancelScope {
    fn default() -> Self {
        let (sender, _) = watch::channel(false);
        Self { sender }
    }
}

impl CancelScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a token observing this scope.
    #[must_use]
    pub fn token(&self) -> CancelToken {
        CancelToken {
            receiver: self.sender.subscribe(),
        }
    }

    /// Fire the signal. Idempotent.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

impl Drop for CancelScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Observer side of a [`CancelScope`].
#[derive(Debug, Clone)]
pub struct CancelToken {
    receiver: watch::Receiver<bool>,
}

impl CancelToken {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolve once the owning scope is cancelled or gone.
    pub async fn cancelled(&self) {
        let mut receiver = self.receiver.clone();
        // An error means the scope was dropped, which also cancels.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }

    /// Race `request` against cancellation.
    ///
    /// When the scope fires first the request future is dropped and
    /// [`DashboardError::Cancelled`] is returned.
    ///
    /// # Errors
    ///
    /// Returns the request's own error, or [`DashboardError::Cancelled`].
    pub async fn run<T, F>(&self, request: F) -> Result<T, DashboardError>
    where
        F: Future<Output = Result<T, DashboardError>>,
    {
        if self.is_cancelled() {
            return Err(DashboardError::Cancelled);
        }
        tokio::select! {
            biased;
            () = self.cancelled() => {
                tracing::debug!("request abandoned, view is gone");
                Err(DashboardError::Cancelled)
            }
            result = request => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future;

    #[tokio::test]
    async fn should_pass_through_result_when_not_cancelled() {
        let scope = CancelScope::new();
        let token = scope.token();
        let result = token.run(async { Ok::<_, DashboardError>(7) }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn should_abandon_pending_request_when_scope_cancelled() {
        let scope = CancelScope::new();
        let token = scope.token();
        let pending = token.run(future::pending::<Result<u8, DashboardError>>());

        scope.cancel();

        assert_eq!(pending.await, Err(DashboardError::Cancelled));
    }

    #[tokio::test]
    async fn should_abandon_even_ready_request_after_cancel() {
        let scope = CancelScope::new();
        let token = scope.token();
        scope.cancel();
        let result = token.run(async { Ok::<_, DashboardError>(1) }).await;
        assert_eq!(result, Err(DashboardError::Cancelled));
    }

    #[tokio::test]
    async fn should_cancel_when_scope_dropped() {
        let scope = CancelScope::new();
        let token = scope.token();
        drop(scope);
        assert!(token.is_cancelled());
        token.cancelled().await;
    }

    #[test]
    fn should_share_state_between_token_clones() {
        let scope = CancelScope::new();
        let token = scope.token();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        scope.cancel();
        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
        assert!(scope.is_cancelled());
    }
}
