//! Test harness for the skill test dashboard.
//!
//! Tests declare the records they need on a [`TestBuilder`] and receive a
//! [`TestContext`] holding a fresh [`EntityStore`](entity::store::EntityStore)
//! populated in declaration order, so record IDs are predictable.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use fixtures::demo::DemoFixture;

pub mod prelude {
    pub use crate::{fixtures::factory, DemoFixture, TestBuilder, TestContext, TestError};
}
