//! In-memory entity store.
//!
//! The store owns the four record collections. It is constructed once at startup
//! and handed to every consumer as a cheap clone of the same shared handle; all
//! mutation goes through [`Collection::create`] and [`Collection::update`].

mod collection;

use std::sync::Arc;

use thiserror::Error;

pub use collection::Collection;

use crate::{skill_test, skill_test_result, syllabus_result, user};

/// Failures reported by the entity store.
///
/// Referential fields are never checked by the store; a missing referenced record
/// is for the caller to detect and report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record exists at the requested id.
    #[error("No record with ID {id} in {collection}")]
    NotFound { collection: &'static str, id: i32 },
    /// Insert rejected because a unique field value is already taken.
    #[error("Value {value:?} for {collection}.{field} is already in use")]
    UniqueViolation {
        collection: &'static str,
        field: &'static str,
        value: String,
    },
}

struct Tables {
    users: Collection<user::Model>,
    skill_tests: Collection<skill_test::Model>,
    test_results: Collection<skill_test_result::Model>,
    syllabus_results: Collection<syllabus_result::Model>,
}

/// Shared handle over all record collections.
///
/// Cloning is cheap and every clone refers to the same collections.
#[derive(Clone)]
pub struct EntityStore {
    tables: Arc<Tables>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Tables {
                users: Collection::new(),
                skill_tests: Collection::new(),
                test_results: Collection::new(),
                syllabus_results: Collection::new(),
            }),
        }
    }

    pub fn users(&self) -> &Collection<user::Model> {
        &self.tables.users
    }

    pub fn skill_tests(&self) -> &Collection<skill_test::Model> {
        &self.tables.skill_tests
    }

    pub fn test_results(&self) -> &Collection<skill_test_result::Model> {
        &self.tables.test_results
    }

    pub fn syllabus_results(&self) -> &Collection<syllabus_result::Model> {
        &self.tables.syllabus_results
    }
}
