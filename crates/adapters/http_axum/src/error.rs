//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schooldesk_domain::payload::MessageEnvelope;

/// Failures while forwarding a request to the backend.
///
/// Bodies use the same `{ "message": ... }` shape the backend returns, so the
/// dashboard surfaces them like any other server error.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The incoming body could not be read (too large or interrupted).
    #[error("failed to read request body")]
    Body(#[source] axum::Error),
    /// The backend could not be reached or its response was cut short.
    #[error("upstream request to {target} failed")]
    Upstream {
        target: String,
        #[source]
        source: reqwest::Error,
    },
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Body(err) => {
                tracing::warn!(error = %err, "rejected request body");
                (StatusCode::BAD_REQUEST, "Invalid request body")
            }
            Self::Upstream { target, source } => {
                tracing::error!(%target, error = %source, "upstream unavailable");
                (StatusCode::BAD_GATEWAY, "Upstream service unavailable")
            }
        };

        let body = MessageEnvelope {
            message: Some(message.to_string()),
        };
        (status, Json(body)).into_response()
    }
}
