//! Result form service: validates and submits a new exam result.

use schooldesk_domain::error::DashboardError;
use schooldesk_domain::form::ResultForm;
use schooldesk_domain::payload::endpoint;
use schooldesk_domain::student::Student;

use crate::cancel::CancelToken;
use crate::notice::Notice;
use crate::ports::SchoolApi;

const ADDED: &str = "Result added successfully";
const INLINE_FALLBACK: &str = "An error occurred while adding result.";
const TOAST_FALLBACK: &str = "Failed to add result";

/// What the form shows after a submit settles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitFeedback {
    /// Message rendered under the form, `None` clears it.
    pub inline: Option<String>,
    pub notice: Option<Notice>,
}

/// Application service for the "Create Result" form.
pub struct ResultFormService<A> {
    api: A,
}

impl<A: SchoolApi> ResultFormService<A> {
    /// Create a new service backed by the given API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Validate `form` against the loaded `students` and post it.
    ///
    /// Validation runs first; when it fails nothing is sent. On success the
    /// backend's confirmation message is returned.
    ///
    /// # Errors
    ///
    /// - [`DashboardError::Validation`] for missing selections or an unknown
    ///   student
    /// - [`DashboardError::Schema`] when the success body has no `message`
    /// - transport/server errors, or [`DashboardError::Cancelled`]
    pub async fn submit(
        &self,
        form: &ResultForm,
        students: &[Student],
        token: &CancelToken,
    ) -> Result<String, DashboardError> {
        let request = form.prepare(students)?;
        tracing::debug!(
            registration = %request.registration_number,
            total = request.marks.total(),
            "submitting result"
        );
        let envelope = token.run(self.api.add_result(&request)).await?;
        Ok(envelope.require_message(endpoint::ADD_RESULT)?)
    }
}

/// Apply a submit outcome to the form and pick what to show.
///
/// Success clears the form; any failure keeps the entered values.
pub fn settle_submit(
    form: &mut ResultForm,
    outcome: &Result<String, DashboardError>,
) -> SubmitFeedback {
    match outcome {
        Ok(_) => {
            form.reset();
            SubmitFeedback {
                inline: None,
                notice: Some(Notice::success(ADDED)),
            }
        }
        Err(DashboardError::Cancelled) => SubmitFeedback::default(),
        Err(DashboardError::Validation(err)) => SubmitFeedback {
            inline: Some(err.to_string()),
            notice: None,
        },
        Err(err) => SubmitFeedback {
            inline: Some(err.user_message(INLINE_FALLBACK)),
            notice: Some(Notice::error(err.user_message(TOAST_FALLBACK))),
        },
    }
}
