//! Result form: the field state behind "Create Result".
//!
//! The form holds the four required selections and the three marks. Mark
//! edits clamp immediately, so the marks are always in range; the
//! selections are only checked by [`ResultForm::prepare`], right before
//! submit.

use crate::error::ValidationError;
use crate::id::{ClassId, CourseId, StudentId, TeacherId};
use crate::marks::{MarkField, Marks};
use crate::result::NewResult;
use crate::student::{self, Student};

/// Current values of the result form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultForm {
    pub student: Option<StudentId>,
    pub class: Option<ClassId>,
    pub course: Option<CourseId>,
    pub teacher: Option<TeacherId>,
    pub marks: Marks,
}

/// Empty select values mean "nothing selected".
fn selection<T>(raw: &str) -> Option<T>
where
    T: for<'a> From<&'a str>,
{
    if raw.is_empty() {
        None
    } else {
        Some(T::from(raw))
    }
}

impl ResultForm {
    pub fn select_student(&mut self, raw: &str) {
        self.student = selection(raw);
    }

    pub fn select_class(&mut self, raw: &str) {
        self.class = selection(raw);
    }

    pub fn select_course(&mut self, raw: &str) {
        self.course = selection(raw);
    }

    pub fn select_teacher(&mut self, raw: &str) {
        self.teacher = selection(raw);
    }

    /// Apply raw input to a mark field, clamped into its range.
    pub fn set_mark(&mut self, field: MarkField, raw: &str) {
        self.marks.set(field, i64::from(field.parse_input(raw)));
    }

    /// Clear every field back to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate the form against the loaded students and build the request.
    ///
    /// The request carries the student's registration number, not its id.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingRequiredFields`] when any selection is empty
    /// - [`ValidationError::UnknownStudent`] when the selected student is not
    ///   in `students`
    /// - [`ValidationError::MarkOutOfRange`] when a mark was set out of range
    ///   without going through [`ResultForm::set_mark`]
    pub fn prepare(&self, students: &[Student]) -> Result<NewResult, ValidationError> {
        let (Some(student_id), Some(class_id), Some(course_id), Some(teacher_id)) =
            (&self.student, &self.class, &self.course, &self.teacher)
        else {
            return Err(ValidationError::MissingRequiredFields);
        };

        let student = student::find(students, student_id).ok_or(ValidationError::UnknownStudent)?;

        let request = NewResult {
            registration_number: student.registration_number.clone(),
            class_id: class_id.clone(),
            course_id: course_id.clone(),
            teacher_id: teacher_id.clone(),
            marks: self.marks,
        };
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn students() -> Vec<Student> {
        vec![Student {
            id: StudentId::new("s1"),
            name: "Ayesha".to_string(),
            registration_number: "A1".to_string(),
            class: None,
        }]
    }

    fn filled() -> ResultForm {
        let mut form = ResultForm::default();
        form.select_student("s1");
        form.select_class("k1");
        form.select_course("c1");
        form.select_teacher("t1");
        form
    }

    #[test]
    fn should_prepare_request_with_registration_number() {
        let mut form = filled();
        form.set_mark(MarkField::Mid, "18");
        form.set_mark(MarkField::Session, "6");
        form.set_mark(MarkField::Final, "1");

        let request = form.prepare(&students()).unwrap();

        assert_eq!(request.registration_number, "A1");
        assert_eq!(request.class_id.as_str(), "k1");
        assert_eq!(request.marks.total(), 25);
    }

    #[test]
    fn should_reject_when_any_selection_missing() {
        let clear: [fn(&mut ResultForm); 4] = [
            |f| f.select_student(""),
            |f| f.select_class(""),
            |f| f.select_course(""),
            |f| f.select_teacher(""),
        ];
        for unset in clear {
            let mut form = filled();
            unset(&mut form);
            assert_eq!(
                form.prepare(&students()),
                Err(ValidationError::MissingRequiredFields)
            );
        }
    }

    #[test]
    fn should_reject_unknown_student() {
        let mut form = filled();
        form.select_student("ghost");
        assert_eq!(
            form.prepare(&students()),
            Err(ValidationError::UnknownStudent)
        );
    }

    #[test]
    fn should_clamp_marks_on_every_change() {
        let mut form = ResultForm::default();
        form.set_mark(MarkField::Mid, "25");
        form.set_mark(MarkField::Session, "-2");
        form.set_mark(MarkField::Final, "abc");
        assert_eq!(form.marks.mid, 18);
        assert_eq!(form.marks.session, 0);
        assert_eq!(form.marks.final_exam, 0);
    }

    #[test]
    fn should_reset_every_field() {
        let mut form = filled();
        form.set_mark(MarkField::Mid, "10");
        form.reset();
        assert_eq!(form, ResultForm::default());
    }
}
