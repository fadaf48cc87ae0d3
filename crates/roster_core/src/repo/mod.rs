//! In-memory stores owned by the registry service.
//!
//! # Responsibility
//! - Hold the canonical student, instructor, course and enrollment records.
//! - Offer lookup and mutation primitives without registry policy.
//!
//! # Invariants
//! - Keys in each map equal the id of the record they hold.
//! - Enrollment records keep append order.
//! - Stores never log and never fail; policy and diagnostics live in the
//!   service layer.

pub mod course_store;
pub mod enrollment_log;
pub mod person_store;
