//! Results service: the results board and row deletion.

use schooldesk_domain::error::DashboardError;
use schooldesk_domain::id::ResultId;
use schooldesk_domain::result::{self, ExamResult};

use crate::cancel::CancelToken;
use crate::notice::Notice;
use crate::ports::SchoolApi;

const DELETED: &str = "Result deleted successfully!";
const DELETE_FAILED: &str = "Failed to delete result.";

/// Application service for the results table.
pub struct ResultsService<A> {
    api: A,
}

impl<A: SchoolApi> ResultsService<A> {
    /// Create a new service backed by the given API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Load every result. A non-`success` status yields an empty board.
    ///
    /// # Errors
    ///
    /// Returns the request error or [`DashboardError::Cancelled`].
    pub async fn load(&self, token: &CancelToken) -> Result<Vec<ExamResult>, DashboardError> {
        let envelope = token.run(self.api.results()).await?;
        if !envelope.is_success() {
            tracing::warn!(status = %envelope.status, "results listing not successful");
        }
        Ok(envelope.into_results())
    }

    /// Delete one result, returning the backend's message if it sent one.
    ///
    /// # Errors
    ///
    /// Returns the request error or [`DashboardError::Cancelled`].
    pub async fn delete(
        &self,
        id: &ResultId,
        token: &CancelToken,
    ) -> Result<Option<String>, DashboardError> {
        tracing::debug!(%id, "deleting result");
        Ok(token.run(self.api.delete_result(id)).await?.message)
    }
}

/// Apply a delete outcome to the loaded rows.
///
/// Only a successful delete removes the row.
pub fn apply_delete(
    results: &mut Vec<ExamResult>,
    id: &ResultId,
    outcome: &Result<Option<String>, DashboardError>,
) -> Option<Notice> {
    match outcome {
        Ok(message) => {
            result::remove_result(results, id);
            Some(Notice::success(
                message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(DELETED),
            ))
        }
        Err(err) if err.is_cancelled() => None,
        Err(err) => Some(Notice::error(err.user_message(DELETE_FAILED))),
    }
}
