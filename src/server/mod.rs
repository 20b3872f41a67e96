//! Server application core modules.
//!
//! HTTP routing, controllers, services and repositories over the in-memory entity
//! store, plus configuration and startup.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
