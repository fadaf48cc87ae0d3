//! Append-ordered enrollment records.
//!
//! # Invariants
//! - Iteration order is creation order.
//! - Duplicate (student, course) pairs are allowed and stay independent.

use crate::model::enrollment::{Enrollment, EnrollmentId};

#[derive(Debug, Default)]
pub struct EnrollmentLog {
    records: Vec<Enrollment>,
}

impl EnrollmentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, enrollment: Enrollment) {
        self.records.push(enrollment);
    }

    pub fn as_slice(&self) -> &[Enrollment] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: EnrollmentId) -> Option<&Enrollment> {
        self.records.iter().find(|record| record.id == id)
    }

    /// First record linking `student_id` to `course_id`, in append order.
    pub fn first_match_mut(
        &mut self,
        student_id: &str,
        course_id: &str,
    ) -> Option<&mut Enrollment> {
        self.records
            .iter_mut()
            .find(|record| record.is_for(student_id, course_id))
    }

    /// Records for one student in append order.
    pub fn for_student(&self, student_id: &str) -> Vec<&Enrollment> {
        self.records
            .iter()
            .filter(|record| record.student.id == student_id)
            .collect()
    }

    /// Records for one course in append order.
    pub fn for_course(&self, course_id: &str) -> Vec<&Enrollment> {
        self.records
            .iter()
            .filter(|record| record.course.id == course_id)
            .collect()
    }

    /// Drops every record for the pair, returning how many were removed.
    pub fn remove_pair(&mut self, student_id: &str, course_id: &str) -> usize {
        let before = self.records.len();
        self.records
            .retain(|record| !record.is_for(student_id, course_id));
        before - self.records.len()
    }
}
