//! Read-only tables for the admin roster pages.

use leptos::prelude::*;
use schooldesk_domain::class::SchoolClass;
use schooldesk_domain::course::Course;
use schooldesk_domain::student::Student;
use schooldesk_domain::teacher::Teacher;

/// Students, already sorted by registration number.
#[component]
pub fn StudentTable(students: Vec<Student>) -> impl IntoView {
    if students.is_empty() {
        return view! { <p>"No students found."</p> }.into_any();
    }
    view! {
        <table>
            <thead>
                <tr>
                    <th>"Reg No"</th>
                    <th>"Name"</th>
                    <th>"Class"</th>
                </tr>
            </thead>
            <tbody>
                {students
                    .into_iter()
                    .map(|student| {
                        let class = student
                            .class
                            .as_ref()
                            .map_or_else(|| "\u{2014}".to_string(), |c| c.display(|c| &c.name));
                        view! {
                            <tr>
                                <td>{student.registration_number}</td>
                                <td>{student.name}</td>
                                <td>{class}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
pub fn ClassTable(classes: Vec<SchoolClass>) -> impl IntoView {
    if classes.is_empty() {
        return view! { <p>"No classes found."</p> }.into_any();
    }
    view! {
        <table>
            <thead>
                <tr>
                    <th>"Class"</th>
                    <th>"Code"</th>
                    <th>"Shift"</th>
                    <th>"Section"</th>
                </tr>
            </thead>
            <tbody>
                {classes
                    .into_iter()
                    .map(|class| {
                        view! {
                            <tr>
                                <td>{class.name}</td>
                                <td>{class.code}</td>
                                <td>{class.shift}</td>
                                <td>{class.section}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
pub fn CourseTable(courses: Vec<Course>) -> impl IntoView {
    if courses.is_empty() {
        return view! { <p>"No courses found."</p> }.into_any();
    }
    view! {
        <table>
            <thead>
                <tr>
                    <th>"Course Code"</th>
                    <th>"Course Name"</th>
                </tr>
            </thead>
            <tbody>
                {courses
                    .into_iter()
                    .map(|course| {
                        view! {
                            <tr>
                                <td>{course.code}</td>
                                <td>{course.name}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
pub fn TeacherTable(teachers: Vec<Teacher>) -> impl IntoView {
    if teachers.is_empty() {
        return view! { <p>"No teachers found."</p> }.into_any();
    }
    view! {
        <table>
            <thead>
                <tr>
                    <th>"Name"</th>
                </tr>
            </thead>
            <tbody>
                {teachers
                    .into_iter()
                    .map(|teacher| view! { <tr><td>{teacher.name}</td></tr> })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
