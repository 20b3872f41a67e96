//! Service layer for business logic.
//!
//! Services compose repositories into the operations exposed by the controllers:
//! reading the current user and skill tests, building the test result detail view,
//! and validating and applying partial updates to a test result. The result
//! service is the only code path that mutates a stored result.

pub mod query;
pub mod result;
pub mod user;
