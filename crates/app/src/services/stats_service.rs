//! Stats service: aggregate counts for the statistics views.

use schooldesk_domain::error::DashboardError;
use schooldesk_domain::id::TeacherId;
use schooldesk_domain::stats::{AdminStats, TeacherStats};

use crate::cancel::CancelToken;
use crate::join::fail_fast4;
use crate::ports::SchoolApi;

/// Application service for the admin and teacher statistics.
pub struct StatsService<A> {
    api: A,
}

impl<A: SchoolApi> StatsService<A> {
    /// Create a new service backed by the given API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// School-wide totals from the four list endpoints, fetched
    /// concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first request error or [`DashboardError::Cancelled`].
    pub async fn admin_stats(&self, token: &CancelToken) -> Result<AdminStats, DashboardError> {
        let (classes, courses, students, teachers) = token
            .run(fail_fast4(
                self.api.classes(),
                self.api.courses(),
                self.api.students(),
                self.api.teachers(),
            ))
            .await?;
        Ok(AdminStats {
            classes: classes.total_classes,
            courses: courses.total_courses,
            students: students.total_students,
            teachers: teachers.total_teachers,
        })
    }

    /// Like [`Self::admin_stats`], but any failure becomes the zero state.
    pub async fn admin_stats_or_zero(&self, token: &CancelToken) -> AdminStats {
        self.admin_stats(token).await.unwrap_or_else(|err| {
            if !err.is_cancelled() {
                tracing::warn!(error = %err, "admin stats unavailable, showing zeros");
            }
            AdminStats::default()
        })
    }

    /// Totals for one teacher.
    ///
    /// # Errors
    ///
    /// Returns the request error or [`DashboardError::Cancelled`].
    pub async fn teacher_stats(
        &self,
        teacher_id: &TeacherId,
        token: &CancelToken,
    ) -> Result<TeacherStats, DashboardError> {
        Ok(token.run(self.api.teacher_stats(teacher_id)).await?.into())
    }

    /// Like [`Self::teacher_stats`], but any failure, or an unknown teacher,
    /// becomes the zero state.
    pub async fn teacher_stats_or_zero(
        &self,
        teacher_id: Option<&TeacherId>,
        token: &CancelToken,
    ) -> TeacherStats {
        let Some(teacher_id) = teacher_id else {
            tracing::warn!("no teacher id in session, showing zeros");
            return TeacherStats::default();
        };
        self.teacher_stats(teacher_id, token)
            .await
            .unwrap_or_else(|err| {
                if !err.is_cancelled() {
                    tracing::warn!(error = %err, %teacher_id, "teacher stats unavailable");
                }
                TeacherStats::default()
            })
    }
}
