//! Enrollment join record between one student and one course.
//!
//! # Responsibility
//! - Link a student snapshot to a course handle.
//! - Carry an optional, freely overwritable grade.
//!
//! # Invariants
//! - `id` is a v4 UUID generated at creation and never reused.
//! - `grade` starts as `None`; `assign_grade` is last-write-wins.

use crate::model::course::Course;
use crate::model::person::Student;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable handle for one enrollment record.
pub type EnrollmentId = Uuid;

/// Text reported in place of a grade that has not been assigned.
pub const GRADE_NOT_ASSIGNED: &str = "Not Assigned";

/// Opaque grade value. No scale or format is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(String);

impl Grade {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Grade {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Grade {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u32> for Grade {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

/// One student-course enrollment.
///
/// Student and course are snapshots taken at enrollment time, so the record
/// still resolves its course after that course leaves the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student: Student,
    pub course: Course,
    pub grade: Option<Grade>,
}

impl Enrollment {
    /// Creates an ungraded enrollment with a generated id.
    pub fn new(student: Student, course: &Course) -> Self {
        Self {
            id: Uuid::new_v4(),
            student,
            course: course.clone(),
            grade: None,
        }
    }

    /// Overwrites the stored grade.
    pub fn assign_grade(&mut self, grade: impl Into<Grade>) {
        self.grade = Some(grade.into());
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    /// Returns whether this record links `student_id` to `course_id`.
    pub fn is_for(&self, student_id: &str, course_id: &str) -> bool {
        self.student.id == student_id && self.course.id == course_id
    }
}

impl Display for Enrollment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let grade = self
            .grade
            .as_ref()
            .map(Grade::as_str)
            .unwrap_or(GRADE_NOT_ASSIGNED);
        write!(
            f,
            "Student: {}, Course: {}, Grade: {}",
            self.student.name, self.course.name, grade
        )
    }
}
