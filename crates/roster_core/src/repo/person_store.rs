//! Student and instructor maps keyed by person id.

use crate::model::person::{Instructor, Person, PersonId, PersonKind, Student};
use std::collections::BTreeMap;

/// Role-partitioned person storage.
#[derive(Debug, Default)]
pub struct PersonStore {
    students: BTreeMap<PersonId, Student>,
    instructors: BTreeMap<PersonId, Instructor>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the role an id is registered under, students checked first.
    pub fn kind_of(&self, id: &str) -> Option<PersonKind> {
        if self.students.contains_key(id) {
            Some(PersonKind::Student)
        } else if self.instructors.contains_key(id) {
            Some(PersonKind::Instructor)
        } else {
            None
        }
    }

    pub fn contains_student(&self, id: &str) -> bool {
        self.students.contains_key(id)
    }

    pub fn contains_instructor(&self, id: &str) -> bool {
        self.instructors.contains_key(id)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn instructor(&self, id: &str) -> Option<&Instructor> {
        self.instructors.get(id)
    }

    /// Students sorted by id.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Instructors sorted by id.
    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> {
        self.instructors.values()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn instructor_count(&self) -> usize {
        self.instructors.len()
    }

    /// Inserts or overwrites a student, returning the previous record.
    pub fn put_student(&mut self, student: Student) -> Option<Student> {
        self.students.insert(student.id.clone(), student)
    }

    /// Inserts or overwrites an instructor, returning the previous record.
    pub fn put_instructor(&mut self, instructor: Instructor) -> Option<Instructor> {
        self.instructors.insert(instructor.id.clone(), instructor)
    }

    /// Removes `id` from the student map, or from the instructor map when no
    /// student holds it.
    pub fn remove(&mut self, id: &str) -> Option<Person> {
        if let Some(student) = self.students.remove(id) {
            return Some(Person::Student(student));
        }
        self.instructors.remove(id).map(Person::Instructor)
    }
}

#[cfg(test)]
mod tests {
    use super::PersonStore;
    use crate::model::person::{Instructor, Person, PersonKind, Student};

    #[test]
    fn put_overwrites_and_returns_previous() {
        let mut store = PersonStore::new();
        assert!(store.put_student(Student::new("Ana", "S1", "CS")).is_none());
        let previous = store
            .put_student(Student::new("Ana", "S1", "Math"))
            .expect("previous record should be returned");
        assert_eq!(previous.major, "CS");
        assert_eq!(store.student_count(), 1);
        assert_eq!(store.student("S1").map(|s| s.major.as_str()), Some("Math"));
    }

    #[test]
    fn remove_checks_students_before_instructors() {
        let mut store = PersonStore::new();
        store.put_student(Student::new("Ana", "X1", "CS"));
        store.put_instructor(Instructor::new("Bo", "X1", "Math"));

        assert_eq!(store.kind_of("X1"), Some(PersonKind::Student));
        let removed = store.remove("X1").expect("student should be removed");
        assert!(matches!(removed, Person::Student(_)));
        assert!(store.contains_instructor("X1"));
        assert_eq!(store.kind_of("X1"), Some(PersonKind::Instructor));
        assert!(store.remove("missing").is_none());
    }
}
