//! Course map keyed by course id.

use crate::model::course::{Course, CourseId};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct CourseStore {
    courses: BTreeMap<CourseId, Course>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Course> {
        self.courses.get_mut(id)
    }

    /// Courses sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Inserts or overwrites by course id, returning the previous record.
    pub fn put(&mut self, course: Course) -> Option<Course> {
        self.courses.insert(course.id.clone(), course)
    }

    pub fn remove(&mut self, id: &str) -> Option<Course> {
        self.courses.remove(id)
    }
}
