//! Registry facade over people, courses and enrollments.
//!
//! # Responsibility
//! - Own every canonical record and expose CRUD and query operations.
//! - Keep not-found handling non-fatal: default operations report absence
//!   through `bool`, `Option` or empty results, `try_*` variants through
//!   `RegistryError`.
//!
//! # Invariants
//! - Student and instructor ids never collide across roles.
//! - An enrollment is only created when both ids are registered.
//! - A student appears at most once in a course roster, while enrollment
//!   records for the same pair may repeat.
//! - Removing a person or course never cascades into enrollments.

use crate::model::course::{Course, CourseId};
use crate::model::enrollment::{Enrollment, EnrollmentId, Grade};
use crate::model::person::{Instructor, Person, PersonId, PersonKind, Student};
use crate::repo::course_store::CourseStore;
use crate::repo::enrollment_log::EnrollmentLog;
use crate::repo::person_store::PersonStore;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors reported by the strict `try_*` operations and by id-space checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Student id is not registered.
    StudentNotFound(PersonId),
    /// Course id is not registered.
    CourseNotFound(CourseId),
    /// No enrollment links the student to the course.
    EnrollmentNotFound {
        student_id: PersonId,
        course_id: CourseId,
    },
    /// Id is already registered under a different role.
    IdConflict {
        id: PersonId,
        registered_as: PersonKind,
    },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StudentNotFound(id) => write!(f, "student not found: {id}"),
            Self::CourseNotFound(id) => write!(f, "course not found: {id}"),
            Self::EnrollmentNotFound {
                student_id,
                course_id,
            } => write!(
                f,
                "enrollment not found: student {student_id} in course {course_id}"
            ),
            Self::IdConflict { id, registered_as } => {
                write!(f, "person id {id} is already registered as {registered_as}")
            }
        }
    }
}

impl Error for RegistryError {}

/// Record counts across the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrySummary {
    pub students: usize,
    pub instructors: usize,
    pub courses: usize,
    pub enrollments: usize,
}

/// Facade owning all registry records.
///
/// Plain synchronous object; callers needing shared access wrap the whole
/// service in one lock.
#[derive(Debug, Default)]
pub struct RegistryService {
    people: PersonStore,
    courses: CourseStore,
    enrollments: EnrollmentLog,
}

impl RegistryService {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // People

    /// Registers a student or instructor, overwriting the same-role record
    /// with the same id.
    ///
    /// `Person::Unassigned` is ignored.
    ///
    /// # Errors
    /// - `IdConflict` when the id is registered under the other role.
    pub fn add_person(&mut self, person: Person) -> RegistryResult<()> {
        let kind = person.kind();
        let id = person.id().to_string();
        if kind != PersonKind::Unassigned {
            self.ensure_role_free(&id, kind)?;
        }

        let replaced = match person {
            Person::Student(student) => self.people.put_student(student).is_some(),
            Person::Instructor(instructor) => self.people.put_instructor(instructor).is_some(),
            Person::Unassigned { .. } => {
                debug!("event=person_add module=registry status=ignored kind={kind} id={id}");
                return Ok(());
            }
        };
        debug!("event=person_add module=registry status=ok kind={kind} id={id} replaced={replaced}");
        Ok(())
    }

    /// Removes `id` from the student map, else from the instructor map.
    ///
    /// Returns the removed record, or `None` when the id is unknown.
    pub fn remove_person(&mut self, id: &str) -> Option<Person> {
        let removed = self.people.remove(id);
        match &removed {
            Some(person) => debug!(
                "event=person_remove module=registry status=ok kind={} id={id}",
                person.kind()
            ),
            None => debug!("event=person_remove module=registry status=not_found id={id}"),
        }
        removed
    }

    /// Replaces an existing record of the same role and id.
    ///
    /// Returns `false` without mutation when no such record exists.
    pub fn update_person(&mut self, person: Person) -> bool {
        let kind = person.kind();
        let id = person.id().to_string();
        let updated = match person {
            Person::Student(student) if self.people.contains_student(&student.id) => {
                self.people.put_student(student);
                true
            }
            Person::Instructor(instructor) if self.people.contains_instructor(&instructor.id) => {
                self.people.put_instructor(instructor);
                true
            }
            _ => false,
        };
        let status = if updated { "ok" } else { "not_found" };
        debug!("event=person_update module=registry status={status} kind={kind} id={id}");
        updated
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.people.student(id)
    }

    pub fn instructor(&self, id: &str) -> Option<&Instructor> {
        self.people.instructor(id)
    }

    /// Registered students sorted by id.
    pub fn students(&self) -> Vec<&Student> {
        self.people.students().collect()
    }

    /// Registered instructors sorted by id.
    pub fn instructors(&self) -> Vec<&Instructor> {
        self.people.instructors().collect()
    }

    // Courses

    /// Inserts or overwrites a course by id.
    pub fn add_course(&mut self, course: Course) {
        let id = course.id.clone();
        let replaced = self.courses.put(course).is_some();
        debug!("event=course_add module=registry status=ok id={id} replaced={replaced}");
    }

    /// Removes a course by id; enrollments that reference it are kept.
    pub fn remove_course(&mut self, id: &str) -> Option<Course> {
        let removed = self.courses.remove(id);
        let status = if removed.is_some() { "ok" } else { "not_found" };
        debug!("event=course_remove module=registry status={status} id={id}");
        removed
    }

    /// Replaces a course only when its id is already registered.
    pub fn update_course(&mut self, course: Course) -> bool {
        if !self.courses.contains(&course.id) {
            debug!(
                "event=course_update module=registry status=not_found id={}",
                course.id
            );
            return false;
        }
        let id = course.id.clone();
        self.courses.put(course);
        debug!("event=course_update module=registry status=ok id={id}");
        true
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    /// Registered courses sorted by id.
    pub fn courses(&self) -> Vec<&Course> {
        self.courses.iter().collect()
    }

    // Enrollments

    /// Enrolls a registered student in a registered course.
    ///
    /// Both records are resolved by id against the registry; the canonical
    /// course roster is updated and a new ungraded enrollment is appended.
    /// Returns `None` without mutation when either id is unknown.
    pub fn enroll_student(&mut self, student: &Student, course: &Course) -> Option<Enrollment> {
        self.try_enroll_student(student, course).ok()
    }

    /// Strict form of [`RegistryService::enroll_student`].
    ///
    /// # Errors
    /// - `StudentNotFound` when the student id is not registered.
    /// - `CourseNotFound` when the course id is not registered.
    pub fn try_enroll_student(
        &mut self,
        student: &Student,
        course: &Course,
    ) -> RegistryResult<Enrollment> {
        let Some(registered) = self.people.student(&student.id).cloned() else {
            debug!(
                "event=enroll module=registry status=student_not_found student_id={}",
                student.id
            );
            return Err(RegistryError::StudentNotFound(student.id.clone()));
        };
        let Some(target) = self.courses.get_mut(&course.id) else {
            debug!(
                "event=enroll module=registry status=course_not_found course_id={}",
                course.id
            );
            return Err(RegistryError::CourseNotFound(course.id.clone()));
        };

        let roster_changed = target.add_student(&registered);
        let enrollment = Enrollment::new(registered, target);
        self.enrollments.append(enrollment.clone());

        let status = if roster_changed { "ok" } else { "repeat" };
        info!(
            "event=enroll module=registry status={status} student_id={} course_id={} enrollment_id={}",
            enrollment.student.id, enrollment.course.id, enrollment.id
        );
        Ok(enrollment)
    }

    /// Removes the student from the course roster and drops every enrollment
    /// for the pair.
    ///
    /// Returns the number of enrollment records dropped.
    pub fn unenroll_student(&mut self, student_id: &str, course_id: &str) -> usize {
        let roster_changed = self
            .courses
            .get_mut(course_id)
            .map(|course| course.remove_student_by_id(student_id))
            .unwrap_or(false);
        let dropped = self.enrollments.remove_pair(student_id, course_id);
        debug!(
            "event=unenroll module=registry status=ok student_id={student_id} course_id={course_id} roster_changed={roster_changed} dropped={dropped}"
        );
        dropped
    }

    /// Grades the oldest enrollment for the pair.
    ///
    /// Later duplicates are left untouched. Returns `false` when no
    /// enrollment matches.
    pub fn assign_grade(
        &mut self,
        student_id: &str,
        course_id: &str,
        grade: impl Into<Grade>,
    ) -> bool {
        self.try_assign_grade(student_id, course_id, grade).is_ok()
    }

    /// Strict form of [`RegistryService::assign_grade`].
    ///
    /// Returns the id of the graded enrollment.
    ///
    /// # Errors
    /// - `EnrollmentNotFound` when no enrollment links the pair.
    pub fn try_assign_grade(
        &mut self,
        student_id: &str,
        course_id: &str,
        grade: impl Into<Grade>,
    ) -> RegistryResult<EnrollmentId> {
        match self.enrollments.first_match_mut(student_id, course_id) {
            Some(enrollment) => {
                let regraded = enrollment.is_graded();
                enrollment.assign_grade(grade);
                debug!(
                    "event=grade_assign module=registry status=ok enrollment_id={} regraded={regraded}",
                    enrollment.id
                );
                Ok(enrollment.id)
            }
            None => {
                debug!(
                    "event=grade_assign module=registry status=not_found student_id={student_id} course_id={course_id}"
                );
                Err(RegistryError::EnrollmentNotFound {
                    student_id: student_id.to_string(),
                    course_id: course_id.to_string(),
                })
            }
        }
    }

    pub fn enrollment(&self, id: EnrollmentId) -> Option<&Enrollment> {
        self.enrollments.get(id)
    }

    /// All enrollments in creation order.
    pub fn enrollments(&self) -> &[Enrollment] {
        self.enrollments.as_slice()
    }

    /// Enrollments for one course in creation order.
    pub fn enrollments_for_course(&self, course_id: &str) -> Vec<&Enrollment> {
        self.enrollments.for_course(course_id)
    }

    // Queries

    /// Copy of the roster for `course_id`; empty when the course is unknown.
    pub fn students_in_course(&self, course_id: &str) -> Vec<Student> {
        self.courses
            .get(course_id)
            .map(|course| course.enrolled_students().to_vec())
            .unwrap_or_default()
    }

    /// Courses of every enrollment for `student_id`, in enrollment order.
    ///
    /// Duplicate enrollments yield duplicate entries. A course still in the
    /// registry is returned as registered; a removed course is returned as
    /// the snapshot its enrollment holds.
    pub fn courses_for_student(&self, student_id: &str) -> Vec<Course> {
        self.enrollments
            .for_student(student_id)
            .into_iter()
            .map(|enrollment| match self.courses.get(&enrollment.course.id) {
                Some(course) => course.clone(),
                None => {
                    debug!(
                        "event=courses_for_student module=registry status=detached enrollment_id={}",
                        enrollment.id
                    );
                    enrollment.course.clone()
                }
            })
            .collect()
    }

    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary {
            students: self.people.student_count(),
            instructors: self.people.instructor_count(),
            courses: self.courses.len(),
            enrollments: self.enrollments.len(),
        }
    }

    fn ensure_role_free(&self, id: &str, kind: PersonKind) -> RegistryResult<()> {
        let conflict = self
            .people
            .kind_of(id)
            .filter(|registered| *registered != kind);
        match conflict {
            Some(registered_as) => {
                warn!(
                    "event=person_add module=registry status=id_conflict id={id} registered_as={registered_as}"
                );
                Err(RegistryError::IdConflict {
                    id: id.to_string(),
                    registered_as,
                })
            }
            None => Ok(()),
        }
    }
}
