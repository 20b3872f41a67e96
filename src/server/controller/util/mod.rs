//! Utility functions for controller request handling.

pub mod parse_id;
