//! Student: an enrolled learner, identified on paper by a registration number.

use serde::{Deserialize, Serialize};

use crate::class::SchoolClass;
use crate::id::StudentId;
use crate::reference::Ref;

/// A student as listed by `GET /api/auth/students`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: StudentId,
    pub name: String,
    /// Registration number, the key students are sorted and looked up by.
    #[serde(rename = "reg_No")]
    pub registration_number: String,
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Ref<SchoolClass>>,
}

impl Student {
    /// Option label used by selection lists, e.g. `Ayesha (B2)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.registration_number)
    }
}

/// Sort students ascending by registration number (plain string order).
pub fn sort_by_registration(students: &mut [Student]) {
    students.sort_by(|a, b| a.registration_number.cmp(&b.registration_number));
}

/// Find a student by id in an already loaded list.
#[must_use]
pub fn find<'a>(students: &'a [Student], id: &StudentId) -> Option<&'a Student> {
    students.iter().find(|s| &s.id == id)
}
