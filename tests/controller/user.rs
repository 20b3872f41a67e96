//! Tests for the get_me endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use skillboard::server::controller::user::get_me;

use super::*;

/// Expect 200 with the demo user and no password field
#[tokio::test]
async fn returns_demo_user_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_demo_data().build()?;

    let result = get_me(State(test.to_app_state::<AppState>())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "rahil");
    assert!(body.get("displayName").is_some());
    assert!(body.get("password").is_none());

    Ok(())
}

/// Expect 404 when the configured demo user does not exist
#[tokio::test]
async fn not_found_when_demo_user_missing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_demo_data()
        .with_demo_user_id(42)
        .build()?;

    let result = get_me(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
