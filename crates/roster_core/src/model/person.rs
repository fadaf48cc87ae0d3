//! Person records and their role variants.
//!
//! # Responsibility
//! - Model the shared identity (`name` + `id`) of every participant.
//! - Carry the role-specific attribute for students and instructors.
//!
//! # Invariants
//! - Identity is immutable; a changed record replaces the stored one by id.
//! - Construction performs no validation; any string is accepted.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Externally assigned person identifier (e.g. `S1`, `I7`).
pub type PersonId = String;

/// Discriminator for person variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonKind {
    /// Base person without a registry role.
    Unassigned,
    Student,
    Instructor,
}

impl PersonKind {
    /// Stable string used in log events and wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unassigned => "unassigned",
            Self::Student => "student",
            Self::Instructor => "instructor",
        }
    }
}

impl Display for PersonKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Student record: identity plus declared major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub id: PersonId,
    pub major: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<PersonId>,
        major: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            major: major.into(),
        }
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Student Name: {}, ID: {}, Major: {}",
            self.name, self.id, self.major
        )
    }
}

/// Instructor record: identity plus owning department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub id: PersonId,
    pub department: String,
}

impl Instructor {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<PersonId>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            department: department.into(),
        }
    }
}

impl Display for Instructor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Instructor Name: {}, ID: {}, Department: {}",
            self.name, self.id, self.department
        )
    }
}

/// Any person-like record accepted by the registry.
///
/// Serialized with an inline `kind` tag so one payload shape covers every
/// variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Person {
    /// Identity only. The registry ignores this variant on insert.
    Unassigned { name: String, id: PersonId },
    Student(Student),
    Instructor(Instructor),
}

impl Person {
    /// Creates a base person with no registry role.
    pub fn unassigned(name: impl Into<String>, id: impl Into<PersonId>) -> Self {
        Self::Unassigned {
            name: name.into(),
            id: id.into(),
        }
    }

    pub fn kind(&self) -> PersonKind {
        match self {
            Self::Unassigned { .. } => PersonKind::Unassigned,
            Self::Student(_) => PersonKind::Student,
            Self::Instructor(_) => PersonKind::Instructor,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Unassigned { id, .. } => id,
            Self::Student(student) => &student.id,
            Self::Instructor(instructor) => &instructor.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Unassigned { name, .. } => name,
            Self::Student(student) => &student.name,
            Self::Instructor(instructor) => &instructor.name,
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unassigned { name, id } => write!(f, "Name: {name}, ID: {id}"),
            Self::Student(student) => Display::fmt(student, f),
            Self::Instructor(instructor) => Display::fmt(instructor, f),
        }
    }
}

impl From<Student> for Person {
    fn from(value: Student) -> Self {
        Self::Student(value)
    }
}

impl From<Instructor> for Person {
    fn from(value: Instructor) -> Self {
        Self::Instructor(value)
    }
}
