//! Request and response bodies of the HTTP API.

pub mod api;
pub mod test_result;
pub mod user;
