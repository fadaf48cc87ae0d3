//! Course record and its enrolled-student roster.
//!
//! # Invariants
//! - A student appears at most once in `enrolled_students`; identity is the
//!   student id, not field equality.
//! - Roster order is insertion order.

use crate::model::person::Student;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Externally assigned course identifier (e.g. `C1`).
pub type CourseId = String;

/// Course with an ordered roster of enrolled students.
///
/// Roster entries are snapshots of the student record taken at enrollment
/// time; replacing a student in the registry does not rewrite them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub id: CourseId,
    #[serde(default)]
    enrolled_students: Vec<Student>,
}

impl Course {
    /// Creates a course with an empty roster.
    pub fn new(name: impl Into<String>, id: impl Into<CourseId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            enrolled_students: Vec::new(),
        }
    }

    /// Enrolled students in insertion order.
    pub fn enrolled_students(&self) -> &[Student] {
        &self.enrolled_students
    }

    pub fn is_enrolled(&self, student_id: &str) -> bool {
        self.enrolled_students
            .iter()
            .any(|student| student.id == student_id)
    }

    /// Appends `student` unless a student with the same id is present.
    ///
    /// Returns `true` when the roster changed.
    pub fn add_student(&mut self, student: &Student) -> bool {
        if self.is_enrolled(&student.id) {
            return false;
        }
        self.enrolled_students.push(student.clone());
        true
    }

    /// Removes the roster entry with the same id as `student`.
    ///
    /// Returns `true` when the roster changed.
    pub fn remove_student(&mut self, student: &Student) -> bool {
        self.remove_student_by_id(&student.id)
    }

    pub(crate) fn remove_student_by_id(&mut self, student_id: &str) -> bool {
        let before = self.enrolled_students.len();
        self.enrolled_students
            .retain(|enrolled| enrolled.id != student_id);
        self.enrolled_students.len() != before
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self
            .enrolled_students
            .iter()
            .map(|student| student.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Course Name: {}, ID: {}, Enrolled Students: [{}]",
            self.name, self.id, names
        )
    }
}
