//! Record types for the skill test dashboard.
//!
//! Each submodule describes one collection held by the entity store: the stored
//! `Model`, the `NewModel` accepted on insert (everything but the id), and, for
//! the one mutable collection, a sparse `UpdateModel`. The [`store`] module holds
//! the in-memory collections themselves.

pub mod prelude;
pub mod store;
pub mod skill_test_result;
pub mod syllabus_result;
pub mod user;

/// A stored record keyed by a store-assigned integer id.
pub trait Record: Clone {
    /// Insert form of the record, identical to the record minus its id.
    type New;

    /// Collection name used in log output and not found errors.
    const COLLECTION: &'static str;

    fn id(&self) -> i32;

    /// Builds the stored record from its insert form and the assigned id.
    fn from_new(id: i32, new: Self::New) -> Self;
}

/// A sparse set of field changes applied over an existing record.
///
/// Fields absent from the patch must leave the record untouched.
pub trait Patch<M> {
    fn apply(self, model: &mut M);
}
