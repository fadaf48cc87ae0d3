//! Record model for people, courses and enrollments.
//!
//! # Responsibility
//! - Define the canonical record shapes owned by the registry service.
//! - Provide role-appropriate textual summaries through `Display`.
//!
//! # Invariants
//! - Person and course identifiers are externally assigned and never
//!   generated here.
//! - Enrollment identifiers are generated once and never reused.

pub mod course;
pub mod enrollment;
pub mod person;
