//! HTTP controller endpoints for the dashboard API.
//!
//! Controllers parse path IDs and request bodies, call into the services and turn
//! their results into HTTP responses. Endpoints are documented for OpenAPI with utoipa.

pub mod test_result;
pub mod user;
pub mod util;
