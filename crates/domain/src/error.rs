//! Common error types used across the workspace.
//!
//! Each failure class from the dashboard's error taxonomy has its own type:
//! [`ValidationError`] never leaves the client, [`SchemaError`] marks a
//! response that did not match its payload schema, and [`DashboardError`]
//! is what every use-case returns to a view.

use crate::marks::MarkField;

/// Top-level error returned by use-cases and API adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// Local validation failed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("server responded with status {status}")]
    Server {
        status: u16,
        /// Message from the backend's `{ "message": ... }` body, if any.
        message: Option<String>,
    },

    /// The response body did not match the expected payload schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The owning view went away before the request settled.
    #[error("request abandoned")]
    Cancelled,
}

impl DashboardError {
    /// Text to show the user for this failure.
    ///
    /// Validation errors carry their own literal message and a server message
    /// is shown verbatim. Everything else falls back to `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether this error only means the view was torn down.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Local validation failures, raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,

    #[error("Invalid student selection.")]
    UnknownStudent,

    #[error("{field} must be between 0 and {max}, got {value}")]
    MarkOutOfRange {
        field: MarkField,
        value: u32,
        max: u32,
    },
}

/// A response body that could not be decoded against its schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed response from {endpoint}: {detail}")]
pub struct SchemaError {
    /// Endpoint path the body came from.
    pub endpoint: String,
    /// Decoder message or the missing field.
    pub detail: String,
}

impl SchemaError {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            detail: detail.into(),
        }
    }
}
