//! Skill test results dashboard API.
//!
//! Serves a single user's skill test score, rank, percentile and per-topic syllabus
//! breakdown from an in-memory entity store, and accepts partial updates of the
//! editable result fields.

pub mod model;
pub mod server;
