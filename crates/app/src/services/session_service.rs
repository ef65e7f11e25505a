//! Session service: reads the persisted login state and signs out.

use schooldesk_domain::error::DashboardError;
use schooldesk_domain::role::{AuthContext, ROLE_KEY, RoleRoute, USER_KEY};

use crate::cancel::CancelToken;
use crate::notice::Notice;
use crate::ports::{SchoolApi, SessionStore};

const LOGOUT_SUCCESS: &str = "Logout successfully.";
const LOGOUT_FAILURE: &str = "Failed to log out.";

/// Application service for the authentication context.
pub struct SessionService<S> {
    store: S,
}

impl<S: SessionStore> SessionService<S> {
    /// Create a new service reading from the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Build the auth context from storage, `None` when not signed in.
    pub fn auth_context(&self) -> Option<AuthContext> {
        let role = self.store.get(ROLE_KEY);
        let user = self.store.get(USER_KEY);
        let context = AuthContext::from_storage(role.as_deref(), user.as_deref());
        if context.is_none() {
            tracing::debug!(role = ?role, "no usable role in storage");
        }
        context
    }

    /// Where the dashboard root should send the visitor.
    pub fn route(&self) -> RoleRoute {
        RoleRoute::for_context(self.auth_context().as_ref())
    }
}

/// Ask the backend to end the session.
///
/// Returns whether the backend reported `success`.
///
/// # Errors
///
/// Returns the transport/server/schema error, or
/// [`DashboardError::Cancelled`] when `token` fires first.
pub async fn logout<A: SchoolApi>(api: &A, token: &CancelToken) -> Result<bool, DashboardError> {
    let envelope = token.run(api.logout()).await?;
    if !envelope.is_success() {
        tracing::warn!(status = %envelope.status, "logout rejected");
    }
    Ok(envelope.is_success())
}

/// Toast for a logout outcome. Cancellation is silent.
#[must_use]
pub fn logout_notice(outcome: &Result<bool, DashboardError>) -> Option<Notice> {
    match outcome {
        Ok(true) => Some(Notice::success(LOGOUT_SUCCESS)),
        Ok(false) => Some(Notice::error(LOGOUT_FAILURE)),
        Err(err) if err.is_cancelled() => None,
        Err(err) => Some(Notice::error(err.user_message(LOGOUT_FAILURE))),
    }
}
