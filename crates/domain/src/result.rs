//! Exam result: one student's marks for one course, as recorded by a teacher.

use serde::{Deserialize, Serialize};

use crate::class::SchoolClass;
use crate::course::Course;
use crate::error::ValidationError;
use crate::id::{ClassId, CourseId, ResultId, TeacherId};
use crate::marks::{Grade, Marks};
use crate::reference::Ref;
use crate::student::Student;
use crate::teacher::Teacher;

/// A result row from `GET /api/all-results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    #[serde(rename = "_id")]
    pub id: ResultId,
    pub student: Ref<Student>,
    pub class: Ref<SchoolClass>,
    pub course: Ref<Course>,
    pub teacher: Ref<Teacher>,
    #[serde(flatten)]
    pub marks: Marks,
}

impl ExamResult {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.marks.total()
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        self.marks.grade()
    }
}

/// Drop the result with `id` from a displayed list.
pub fn remove_result(results: &mut Vec<ExamResult>, id: &ResultId) {
    results.retain(|result| &result.id != id);
}

/// Request body for `POST /api/add-result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResult {
    pub registration_number: String,
    pub class_id: ClassId,
    pub course_id: CourseId,
    pub teacher_id: TeacherId,
    #[serde(flatten)]
    pub marks: Marks,
}

impl NewResult {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredFields`] when the
    /// registration number is empty, or [`ValidationError::MarkOutOfRange`]
    /// when a mark exceeds its maximum.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.registration_number.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        self.marks.validate()
    }
}
