//! Payload schemas for every endpoint the dashboard consumes.
//!
//! The backend is not under this workspace's control, so each response is
//! decoded against an explicit schema at the boundary. A body that does not
//! fit becomes a [`SchemaError`] instead of silently missing data.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::admin::Admin;
use crate::class::SchoolClass;
use crate::course::Course;
use crate::error::SchemaError;
use crate::result::ExamResult;
use crate::stats::TeacherStats;
use crate::student::Student;
use crate::teacher::Teacher;

/// Endpoint paths, relative to the API base.
pub mod endpoint {
    pub const COURSES: &str = "/api/courses";
    pub const CLASSES: &str = "/api/class";
    pub const TEACHERS: &str = "/api/auth/teachers";
    pub const STUDENTS: &str = "/api/auth/students";
    pub const ADMINS: &str = "/api/auth/admin";
    pub const RESULTS: &str = "/api/all-results";
    pub const ADD_RESULT: &str = "/api/add-result";
    pub const LOGOUT: &str = "/api/auth/logout";

    /// `DELETE /api/results/:id`
    #[must_use]
    pub fn result(id: &str) -> String {
        format!("/api/results/{id}")
    }

    /// `GET /api/teacher/:teacherId/stats`
    #[must_use]
    pub fn teacher_stats(teacher_id: &str) -> String {
        format!("/api/teacher/{teacher_id}/stats")
    }
}

/// Status value the backend uses for success envelopes.
pub const STATUS_SUCCESS: &str = "success";

/// Decode `body` as `T`, tagging failures with the endpoint.
///
/// # Errors
///
/// Returns [`SchemaError`] when `body` is not valid JSON for `T`.
pub fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, SchemaError> {
    serde_json::from_str(body).map_err(|err| SchemaError::new(endpoint, err.to_string()))
}

/// Decode a write reply. An empty body, such as a `204`, carries no message.
///
/// # Errors
///
/// Returns [`SchemaError`] when a non-empty `body` is not a message envelope.
pub fn decode_message(endpoint: &str, body: &str) -> Result<MessageEnvelope, SchemaError> {
    if body.trim().is_empty() {
        return Ok(MessageEnvelope::default());
    }
    decode(endpoint, body)
}

/// `GET /api/courses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesEnvelope {
    pub courses: Vec<Course>,
    pub total_courses: u64,
}

/// `GET /api/class`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassesEnvelope {
    pub classes: Vec<SchoolClass>,
    pub total_classes: u64,
}

/// `GET /api/auth/teachers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachersEnvelope {
    pub teachers: Vec<Teacher>,
    pub total_teachers: u64,
}

/// `GET /api/auth/students`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentsEnvelope {
    pub students: Vec<Student>,
    pub total_students: u64,
}

/// `GET /api/auth/admin`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminsEnvelope {
    pub admin: Vec<Admin>,
}

/// `GET /api/all-results`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: Vec<ExamResult>,
}

impl ResultsEnvelope {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// The result rows, or nothing when the status is not `success`.
    #[must_use]
    pub fn into_results(self) -> Vec<ExamResult> {
        if self.is_success() {
            self.data
        } else {
            Vec::new()
        }
    }
}

/// `{ "message": ... }` bodies returned by writes and by error responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageEnvelope {
    /// The message, required on success bodies.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the message is absent.
    pub fn require_message(self, endpoint: &str) -> Result<String, SchemaError> {
        self.message
            .ok_or_else(|| SchemaError::new(endpoint, "missing field `message`"))
    }
}

/// `POST /api/auth/logout`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEnvelope {
    pub status: String,
}

impl StatusEnvelope {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// `GET /api/teacher/:teacherId/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherStatsEnvelope {
    pub total_classes: u64,
    pub total_courses: u64,
}

impl From<TeacherStatsEnvelope> for TeacherStats {
    fn from(envelope: TeacherStatsEnvelope) -> Self {
        Self {
            classes: envelope.total_classes,
            courses: envelope.total_courses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_courses_envelope() {
        let body = r#"{"courses":[{"_id":"c1","courseName":"Physics","courseCode":"PHY-101"}],"totalCourses":1}"#;
        let envelope: CoursesEnvelope = decode(endpoint::COURSES, body).unwrap();
        assert_eq!(envelope.total_courses, 1);
        assert_eq!(envelope.courses[0].name, "Physics");
    }

    #[test]
    fn should_report_schema_error_with_endpoint_when_field_missing() {
        let err = decode::<ClassesEnvelope>(endpoint::CLASSES, r#"{"classes":[]}"#).unwrap_err();
        assert_eq!(err.endpoint, "/api/class");
        assert!(err.detail.contains("totalClasses"), "{}", err.detail);
    }

    #[test]
    fn should_report_schema_error_for_non_json_body() {
        let err = decode::<StudentsEnvelope>(endpoint::STUDENTS, "<html>").unwrap_err();
        assert_eq!(err.endpoint, "/api/auth/students");
    }

    #[test]
    fn should_read_empty_write_reply_as_no_message() {
        let delete = endpoint::result("r1");
        assert_eq!(decode_message(&delete, ""), Ok(MessageEnvelope::default()));
        assert_eq!(decode_message(&delete, " \n"), Ok(MessageEnvelope::default()));
        assert_eq!(
            decode_message(&delete, r#"{"message":"Result deleted"}"#),
            Ok(MessageEnvelope {
                message: Some("Result deleted".to_string())
            })
        );
        assert!(decode_message(&delete, "<html>").is_err());
    }

    #[test]
    fn should_keep_results_only_on_success_status() {
        let ok: ResultsEnvelope = decode(endpoint::RESULTS, r#"{"status":"success","data":[]}"#).unwrap();
        assert!(ok.is_success());

        let failed: ResultsEnvelope =
            decode(endpoint::RESULTS, r#"{"status":"error","message":"db down"}"#).unwrap();
        assert!(!failed.is_success());
        assert!(failed.into_results().is_empty());
    }

    #[test]
    fn should_require_message_on_write_responses() {
        let missing: MessageEnvelope = decode(endpoint::ADD_RESULT, "{}").unwrap();
        let err = missing.require_message(endpoint::ADD_RESULT).unwrap_err();
        assert_eq!(err.endpoint, "/api/add-result");

        let present: MessageEnvelope =
            decode(endpoint::ADD_RESULT, r#"{"message":"Result added"}"#).unwrap();
        assert_eq!(
            present.require_message(endpoint::ADD_RESULT).unwrap(),
            "Result added"
        );
    }

    #[test]
    fn should_convert_teacher_stats_envelope() {
        let envelope: TeacherStatsEnvelope =
            decode("/api/teacher/t1/stats", r#"{"totalClasses":2,"totalCourses":3}"#).unwrap();
        let stats = TeacherStats::from(envelope);
        assert_eq!(stats.classes, 2);
        assert_eq!(stats.courses, 3);
    }

    #[test]
    fn should_build_parameterised_endpoints() {
        assert_eq!(endpoint::result("r1"), "/api/results/r1");
        assert_eq!(endpoint::teacher_stats("t1"), "/api/teacher/t1/stats");
    }
}
