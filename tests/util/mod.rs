//! Helpers shared by the integration tests.

use axum::{body::Body, http::Response};
use http_body_util::BodyExt;
use serde_json::Value;

/// Reads a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();

    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
