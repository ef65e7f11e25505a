//! HTTP implementation of the [`SchoolApi`] port, wrapping `gloo-net`.
//!
//! Every body is read as text and decoded against its payload schema, so a
//! malformed response surfaces as a schema error instead of missing data.

use gloo_net::http::{Request, Response};
use schooldesk_app::ports::SchoolApi;
use schooldesk_domain::error::DashboardError;
use schooldesk_domain::id::{ResultId, TeacherId};
use schooldesk_domain::payload::{
    self, AdminsEnvelope, ClassesEnvelope, CoursesEnvelope, MessageEnvelope, ResultsEnvelope,
    StatusEnvelope, StudentsEnvelope, TeacherStatsEnvelope, TeachersEnvelope, endpoint,
};
use schooldesk_domain::result::NewResult;
use serde::de::DeserializeOwned;

/// Base address baked in at build time, same origin when unset.
const API_BASE: &str = match option_env!("SCHOOLDESK_API_BASE") {
    Some(base) => base,
    None => "",
};

fn transport(err: gloo_net::Error) -> DashboardError {
    DashboardError::Transport(err.to_string())
}

/// Read a response body, turning a non-2xx status into a server error.
async fn read_body(
    endpoint: &str,
    sent: Result<Response, gloo_net::Error>,
) -> Result<String, DashboardError> {
    let resp = sent.map_err(transport)?;
    let body = resp.text().await.map_err(transport)?;
    if !resp.ok() {
        let message = serde_json::from_str::<MessageEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.message);
        leptos::logging::warn!("{endpoint} answered HTTP {}", resp.status());
        return Err(DashboardError::Server {
            status: resp.status(),
            message,
        });
    }
    Ok(body)
}

/// Turn a response into its decoded payload, or the matching error.
async fn read_payload<T: DeserializeOwned>(
    endpoint: &str,
    sent: Result<Response, gloo_net::Error>,
) -> Result<T, DashboardError> {
    let body = read_body(endpoint, sent).await?;
    Ok(payload::decode(endpoint, &body)?)
}

/// Like [`read_payload`] for write replies, which may come back empty.
async fn read_message(
    endpoint: &str,
    sent: Result<Response, gloo_net::Error>,
) -> Result<MessageEnvelope, DashboardError> {
    let body = read_body(endpoint, sent).await?;
    Ok(payload::decode_message(endpoint, &body)?)
}

/// Backend client over `fetch`.
#[derive(Debug, Clone)]
pub struct HttpSchoolApi {
    base: String,
}

impl Default for HttpSchoolApi {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl HttpSchoolApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        read_payload(path, Request::get(&self.url(path)).send().await).await
    }
}

impl SchoolApi for HttpSchoolApi {
    async fn courses(&self) -> Result<CoursesEnvelope, DashboardError> {
        self.get(endpoint::COURSES).await
    }

    async fn classes(&self) -> Result<ClassesEnvelope, DashboardError> {
        self.get(endpoint::CLASSES).await
    }

    async fn teachers(&self) -> Result<TeachersEnvelope, DashboardError> {
        self.get(endpoint::TEACHERS).await
    }

    async fn students(&self) -> Result<StudentsEnvelope, DashboardError> {
        self.get(endpoint::STUDENTS).await
    }

    async fn admins(&self) -> Result<AdminsEnvelope, DashboardError> {
        self.get(endpoint::ADMINS).await
    }

    async fn results(&self) -> Result<ResultsEnvelope, DashboardError> {
        self.get(endpoint::RESULTS).await
    }

    async fn delete_result(&self, id: &ResultId) -> Result<MessageEnvelope, DashboardError> {
        let path = endpoint::result(id.as_str());
        read_message(&path, Request::delete(&self.url(&path)).send().await).await
    }

    async fn add_result(&self, request: &NewResult) -> Result<MessageEnvelope, DashboardError> {
        let sent = match Request::post(&self.url(endpoint::ADD_RESULT)).json(request) {
            Ok(req) => req.send().await,
            Err(err) => Err(err),
        };
        read_message(endpoint::ADD_RESULT, sent).await
    }

    async fn logout(&self) -> Result<StatusEnvelope, DashboardError> {
        read_payload(
            endpoint::LOGOUT,
            Request::post(&self.url(endpoint::LOGOUT)).send().await,
        )
        .await
    }

    async fn teacher_stats(
        &self,
        teacher_id: &TeacherId,
    ) -> Result<TeacherStatsEnvelope, DashboardError> {
        self.get(&endpoint::teacher_stats(teacher_id.as_str()))
            .await
    }
}
