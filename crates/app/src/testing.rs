//! In-memory fakes of the ports, shared by the service tests.

use std::cell::RefCell;
use std::collections::HashMap;

use schooldesk_domain::admin::Admin;
use schooldesk_domain::class::SchoolClass;
use schooldesk_domain::course::Course;
use schooldesk_domain::error::DashboardError;
use schooldesk_domain::id::{AdminId, ClassId, CourseId, ResultId, StudentId, TeacherId};
use schooldesk_domain::marks::Marks;
use schooldesk_domain::payload::{
    AdminsEnvelope, ClassesEnvelope, CoursesEnvelope, MessageEnvelope, ResultsEnvelope,
    StatusEnvelope, StudentsEnvelope, TeacherStatsEnvelope, TeachersEnvelope,
};
use schooldesk_domain::reference::Ref;
use schooldesk_domain::result::{ExamResult, NewResult};
use schooldesk_domain::student::Student;
use schooldesk_domain::teacher::Teacher;

use crate::ports::{SchoolApi, SessionStore};

type Reply<T> = Result<T, DashboardError>;

/// Scripted backend that records every call it receives.
pub(crate) struct FakeSchoolApi {
    pub courses: Reply<CoursesEnvelope>,
    pub classes: Reply<ClassesEnvelope>,
    pub teachers: Reply<TeachersEnvelope>,
    pub students: Reply<StudentsEnvelope>,
    pub admins: Reply<AdminsEnvelope>,
    pub results: Reply<ResultsEnvelope>,
    pub delete_result: Reply<MessageEnvelope>,
    pub add_result: Reply<MessageEnvelope>,
    pub logout: Reply<StatusEnvelope>,
    pub teacher_stats: Reply<TeacherStatsEnvelope>,
    calls: RefCell<Vec<&'static str>>,
    submitted: RefCell<Vec<NewResult>>,
}

pub(crate) fn student(id: &str, reg: &str) -> Student {
    Student {
        id: StudentId::new(id),
        name: format!("Student {reg}"),
        registration_number: reg.to_string(),
        class: None,
    }
}

pub(crate) fn result(id: &str) -> ExamResult {
    ExamResult {
        id: ResultId::new(id),
        student: Ref::Id("s1".to_string()),
        class: Ref::Id("k1".to_string()),
        course: Ref::Id("c1".to_string()),
        teacher: Ref::Id("t1".to_string()),
        marks: Marks {
            mid: 10,
            session: 4,
            final_exam: 20,
        },
    }
}

impl FakeSchoolApi {
    /// A backend where every endpoint answers successfully.
    pub fn healthy() -> Self {
        Self {
            courses: Ok(CoursesEnvelope {
                courses: vec![Course {
                    id: CourseId::new("c1"),
                    name: "Physics".to_string(),
                    code: "PHY-101".to_string(),
                }],
                total_courses: 1,
            }),
            classes: Ok(ClassesEnvelope {
                classes: vec![SchoolClass {
                    id: ClassId::new("k1"),
                    name: "BSCS".to_string(),
                    code: "CS-4".to_string(),
                    shift: "Morning".to_string(),
                    section: "A".to_string(),
                }],
                total_classes: 3,
            }),
            teachers: Ok(TeachersEnvelope {
                teachers: vec![Teacher {
                    id: TeacherId::new("t1"),
                    name: "Ms. Noor".to_string(),
                }],
                total_teachers: 7,
            }),
            students: Ok(StudentsEnvelope {
                students: vec![student("s2", "B2"), student("s1", "A1")],
                total_students: 2,
            }),
            admins: Ok(AdminsEnvelope {
                admin: vec![Admin {
                    id: AdminId::new("a1"),
                    name: "Principal".to_string(),
                }],
            }),
            results: Ok(ResultsEnvelope {
                status: "success".to_string(),
                data: vec![result("r1"), result("r2")],
            }),
            delete_result: Ok(MessageEnvelope {
                message: Some("Result deleted".to_string()),
            }),
            add_result: Ok(MessageEnvelope {
                message: Some("Result added".to_string()),
            }),
            logout: Ok(StatusEnvelope {
                status: "success".to_string(),
            }),
            teacher_stats: Ok(TeacherStatsEnvelope {
                total_classes: 2,
                total_courses: 5,
            }),
            calls: RefCell::new(Vec::new()),
            submitted: RefCell::new(Vec::new()),
        }
    }

    /// A backend where every endpoint fails with `err`.
    pub fn failing(err: &DashboardError) -> Self {
        Self {
            courses: Err(err.clone()),
            classes: Err(err.clone()),
            teachers: Err(err.clone()),
            students: Err(err.clone()),
            admins: Err(err.clone()),
            results: Err(err.clone()),
            delete_result: Err(err.clone()),
            add_result: Err(err.clone()),
            logout: Err(err.clone()),
            teacher_stats: Err(err.clone()),
            calls: RefCell::new(Vec::new()),
            submitted: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn submitted(&self) -> Vec<NewResult> {
        self.submitted.borrow().clone()
    }

    fn record(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
    }
}

impl SchoolApi for FakeSchoolApi {
    async fn courses(&self) -> Reply<CoursesEnvelope> {
        self.record("courses");
        self.courses.clone()
    }

    async fn classes(&self) -> Reply<ClassesEnvelope> {
        self.record("classes");
        self.classes.clone()
    }

    async fn teachers(&self) -> Reply<TeachersEnvelope> {
        self.record("teachers");
        self.teachers.clone()
    }

    async fn students(&self) -> Reply<StudentsEnvelope> {
        self.record("students");
        self.students.clone()
    }

    async fn admins(&self) -> Reply<AdminsEnvelope> {
        self.record("admins");
        self.admins.clone()
    }

    async fn results(&self) -> Reply<ResultsEnvelope> {
        self.record("results");
        self.results.clone()
    }

    async fn delete_result(&self, _id: &ResultId) -> Reply<MessageEnvelope> {
        self.record("delete_result");
        self.delete_result.clone()
    }

    async fn add_result(&self, request: &NewResult) -> Reply<MessageEnvelope> {
        self.record("add_result");
        self.submitted.borrow_mut().push(request.clone());
        self.add_result.clone()
    }

    async fn logout(&self) -> Reply<StatusEnvelope> {
        self.record("logout");
        self.logout.clone()
    }

    async fn teacher_stats(&self, _teacher_id: &TeacherId) -> Reply<TeacherStatsEnvelope> {
        self.record("teacher_stats");
        self.teacher_stats.clone()
    }
}

/// Session store backed by a map.
#[derive(Default)]
pub(crate) struct MapSessionStore {
    values: HashMap<String, String>,
}

impl MapSessionStore {
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl SessionStore for MapSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
