//! Record factories and canned data sets used by [`TestBuilder`](crate::TestBuilder).

pub mod demo;
pub mod factory;
