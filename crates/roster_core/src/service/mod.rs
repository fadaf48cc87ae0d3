//! Registry use-case services.
//!
//! # Responsibility
//! - Expose the single facade callers use for every registry operation.
//! - Apply registry policy (id-space checks, enrollment preconditions) above
//!   the in-memory stores.

pub mod registry_service;
