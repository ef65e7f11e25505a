//! School API port: every backend endpoint the dashboard consumes.
//!
//! Implementations decode each body against its payload schema, so callers
//! only ever see typed envelopes or a [`DashboardError`]. The futures are
//! not required to be `Send`: the browser adapter runs on a single thread.

use std::future::Future;

use schooldesk_domain::error::DashboardError;
use schooldesk_domain::id::{ResultId, TeacherId};
use schooldesk_domain::payload::{
    AdminsEnvelope, ClassesEnvelope, CoursesEnvelope, MessageEnvelope, ResultsEnvelope,
    StatusEnvelope, StudentsEnvelope, TeacherStatsEnvelope, TeachersEnvelope,
};
use schooldesk_domain::result::NewResult;

/// Client for the school administration REST backend.
pub trait SchoolApi {
    /// `GET /api/courses`
    fn courses(&self) -> impl Future<Output = Result<CoursesEnvelope, DashboardError>>;

    /// `GET /api/class`
    fn classes(&self) -> impl Future<Output = Result<ClassesEnvelope, DashboardError>>;

    /// `GET /api/auth/teachers`
    fn teachers(&self) -> impl Future<Output = Result<TeachersEnvelope, DashboardError>>;

    /// `GET /api/auth/students`
    fn students(&self) -> impl Future<Output = Result<StudentsEnvelope, DashboardError>>;

    /// `GET /api/auth/admin`
    fn admins(&self) -> impl Future<Output = Result<AdminsEnvelope, DashboardError>>;

    /// `GET /api/all-results`
    fn results(&self) -> impl Future<Output = Result<ResultsEnvelope, DashboardError>>;

    /// `DELETE /api/results/:id`
    fn delete_result(
        &self,
        id: &ResultId,
    ) -> impl Future<Output = Result<MessageEnvelope, DashboardError>>;

    /// `POST /api/add-result`
    fn add_result(
        &self,
        request: &NewResult,
    ) -> impl Future<Output = Result<MessageEnvelope, DashboardError>>;

    /// `POST /api/auth/logout`
    fn logout(&self) -> impl Future<Output = Result<StatusEnvelope, DashboardError>>;

    /// `GET /api/teacher/:teacherId/stats`
    fn teacher_stats(
        &self,
        teacher_id: &TeacherId,
    ) -> impl Future<Output = Result<TeacherStatsEnvelope, DashboardError>>;
}

impl<T: SchoolApi + ?Sized> SchoolApi for &T {
    fn courses(&self) -> impl Future<Output = Result<CoursesEnvelope, DashboardError>> {
        (**self).courses()
    }

    fn classes(&self) -> impl Future<Output = Result<ClassesEnvelope, DashboardError>> {
        (**self).classes()
    }

    fn teachers(&self) -> impl Future<Output = Result<TeachersEnvelope, DashboardError>> {
        (**self).teachers()
    }

    fn students(&self) -> impl Future<Output = Result<StudentsEnvelope, DashboardError>> {
        (**self).students()
    }

    fn admins(&self) -> impl Future<Output = Result<AdminsEnvelope, DashboardError>> {
        (**self).admins()
    }

    fn results(&self) -> impl Future<Output = Result<ResultsEnvelope, DashboardError>> {
        (**self).results()
    }

    fn delete_result(
        &self,
        id: &ResultId,
    ) -> impl Future<Output = Result<MessageEnvelope, DashboardError>> {
        (**self).delete_result(id)
    }

    fn add_result(
        &self,
        request: &NewResult,
    ) -> impl Future<Output = Result<MessageEnvelope, DashboardError>> {
        (**self).add_result(request)
    }

    fn logout(&self) -> impl Future<Output = Result<StatusEnvelope, DashboardError>> {
        (**self).logout()
    }

    fn teacher_stats(
        &self,
        teacher_id: &TeacherId,
    ) -> impl Future<Output = Result<TeacherStatsEnvelope, DashboardError>> {
        (**self).teacher_stats(teacher_id)
    }
}
