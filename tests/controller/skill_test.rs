//! Tests for the skill test endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use skillboard::server::controller::skill_test::{get_skill_test, list_skill_tests};

use super::*;

/// Expect 200 with every skill test
#[tokio::test]
async fn lists_skill_tests() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_demo_data()
        .with_skill_test("CSS")
        .build()?;

    let resp = list_skill_tests(State(test.to_app_state::<AppState>()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let tests = body.as_array().unwrap();
    assert_eq!(tests.len(), 2);
    assert_eq!(tests[0]["title"], "Hyper Text Markup Language");
    assert_eq!(tests[1]["title"], "CSS");

    Ok(())
}

/// Expect 200 with an empty array when there are no tests
#[tokio::test]
async fn lists_nothing_for_empty_store() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let resp = list_skill_tests(State(test.to_app_state::<AppState>()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!([]));

    Ok(())
}

/// Expect 200 with the requested skill test
#[tokio::test]
async fn returns_skill_test() -> Result<(), TestError> {
    let test = TestBuilder::new().with_demo_data().build()?;

    let resp = get_skill_test(State(test.to_app_state::<AppState>()), Path("1".to_string()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["icon"], "html5");
    assert_eq!(body["questions"], 8);
    assert_eq!(body["duration"], 15);
    assert!(body["submittedAt"].as_str().unwrap().starts_with("2021-06-05"));

    Ok(())
}

/// Expect 400 for a non numeric test ID
#[tokio::test]
async fn bad_request_for_invalid_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_demo_data().build()?;

    let result = get_skill_test(State(test.to_app_state::<AppState>()), Path("abc".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "Invalid test ID");

    Ok(())
}

/// Expect 404 for a test that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_test() -> Result<(), TestError> {
    let test = TestBuilder::new().with_demo_data().build()?;

    let result = get_skill_test(State(test.to_app_state::<AppState>()), Path("999".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "Test not found");

    Ok(())
}
