//! Aggregate counts and their chart series.
//!
//! Counts are computed by the backend; the client only reshapes them into an
//! ordered list of labelled points that every chart draws from.

use serde::{Deserialize, Serialize};

/// One labelled count in a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPoint {
    pub label: String,
    pub value: u64,
}

impl StatPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// School-wide totals shown on the admin statistics view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminStats {
    pub classes: u64,
    pub courses: u64,
    pub students: u64,
    pub teachers: u64,
}

impl AdminStats {
    /// Ordered series: classes, courses, students, teachers.
    #[must_use]
    pub fn series(&self) -> Vec<StatPoint> {
        vec![
            StatPoint::new("Classes", self.classes),
            StatPoint::new("Courses", self.courses),
            StatPoint::new("Students", self.students),
            StatPoint::new("Teachers", self.teachers),
        ]
    }
}

/// Per-teacher totals from `GET /api/teacher/:id/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeacherStats {
    pub classes: u64,
    pub courses: u64,
}

impl TeacherStats {
    /// Ordered series: classes, courses.
    #[must_use]
    pub fn series(&self) -> Vec<StatPoint> {
        vec![
            StatPoint::new("Classes", self.classes),
            StatPoint::new("Courses", self.courses),
        ]
    }
}

/// Largest value in a series, `0` when empty.
#[must_use]
pub fn peak(series: &[StatPoint]) -> u64 {
    series.iter().map(|p| p.value).max().unwrap_or(0)
}
