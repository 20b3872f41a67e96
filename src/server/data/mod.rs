//! Data access layer repositories.
//!
//! Repositories wrap the [`EntityStore`](entity::store::EntityStore) collections with
//! typed operations per record type. They never validate referential fields; callers
//! treat a missing referenced record as not found.

pub mod seed;
pub mod skill_test;
pub mod syllabus_result;
pub mod test_result;
pub mod user;
