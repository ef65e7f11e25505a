//! Roster service: the admin list views and the result form's options.

use schooldesk_domain::admin::Admin;
use schooldesk_domain::class::SchoolClass;
use schooldesk_domain::course::Course;
use schooldesk_domain::error::DashboardError;
use schooldesk_domain::student::{self, Student};
use schooldesk_domain::teacher::Teacher;

use crate::cancel::CancelToken;
use crate::join::fail_fast4;
use crate::ports::SchoolApi;

/// Everything the result form offers in its selects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOptions {
    pub students: Vec<Student>,
    pub classes: Vec<SchoolClass>,
    pub courses: Vec<Course>,
    pub teachers: Vec<Teacher>,
}

/// Application service for the roster lists.
pub struct RosterService<A> {
    api: A,
}

impl<A: SchoolApi> RosterService<A> {
    /// Create a new service backed by the given API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// List students, sorted by registration number.
    ///
    /// # Errors
    ///
    /// Returns the request error or [`DashboardError::Cancelled`].
    pub async fn students(&self, token: &CancelToken) -> Result<Vec<Student>, DashboardError> {
        let mut students = token.run(self.api.students()).await?.students;
        student::sort_by_registration(&mut students);
        tracing::debug!(count = students.len(), "students loaded");
        Ok(students)
    }

    /// List classes.
    ///
    /// # Errors
    ///
    /// Returns the request error or [`DashboardError::Cancelled`].
    pub async fn classes(&self, token: &CancelToken) -> Result<Vec<SchoolClass>, DashboardError> {
        Ok(token.run(self.api.classes()).await?.classes)
    }

    /// List courses.
    ///
    /// # Errors
    ///
    /// Returns the request error or [`DashboardError::Cancelled`].
    pub async fn courses(&self, token: &CancelToken) -> Result<Vec<Course>, DashboardError> {
        Ok(token.run(self.api.courses()).await?.courses)
    }

    /// List teachers.
    ///
    /// # Errors
    ///
    /// Returns the request error or [`DashboardError::Cancelled`].
    pub async fn teachers(&self, token: &CancelToken) -> Result<Vec<Teacher>, DashboardError> {
        Ok(token.run(self.api.teachers()).await?.teachers)
    }

    /// Load the four option lists concurrently. Any failure fails the whole
    /// load and no list is returned.
    ///
    /// # Errors
    ///
    /// Returns the first request error or [`DashboardError::Cancelled`].
    pub async fn form_options(&self, token: &CancelToken) -> Result<FormOptions, DashboardError> {
        let (students, classes, courses, teachers) = token
            .run(fail_fast4(
                self.api.students(),
                self.api.classes(),
                self.api.courses(),
                self.api.teachers(),
            ))
            .await?;
        let mut students = students.students;
        student::sort_by_registration(&mut students);
        Ok(FormOptions {
            students,
            classes: classes.classes,
            courses: courses.courses,
            teachers: teachers.teachers,
        })
    }

    /// The admin greeted on the overview, the first one the backend lists.
    ///
    /// # Errors
    ///
    /// Returns the request error or [`DashboardError::Cancelled`].
    pub async fn admin_profile(&self, token: &CancelToken) -> Result<Option<Admin>, DashboardError> {
        Ok(token.run(self.api.admins()).await?.admin.into_iter().next())
    }
}
