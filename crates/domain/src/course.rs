//! Course: a subject taught in one or more classes.

use serde::{Deserialize, Serialize};

use crate::id::CourseId;

/// A course as listed by `GET /api/courses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: CourseId,
    #[serde(rename = "courseName")]
    pub name: String,
    #[serde(rename = "courseCode")]
    pub code: String,
}

impl Course {
    /// Option label used by selection lists, e.g. `Physics (PHY-101)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}
