//! Tests for the test result endpoints.
//!
//! Covers the detail view, partial updates with their validation failures, and the
//! percentile comparison.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use skillboard::server::controller::test_result::{
    get_test_comparison, get_test_result, update_test_result,
};

use super::*;

fn update(rank: Option<f64>, percentile: Option<f64>, score: Option<f64>) -> Value {
    json!({
        "rank": rank,
        "percentile": percentile,
        "score": score,
    })
}

mod get_test_result {
    use super::*;

    /// Expect 200 with test, result and syllabus breakdown
    #[tokio::test]
    async fn returns_detail() -> Result<(), TestError> {
        let test = TestBuilder::new().with_demo_data().build()?;

        let resp = get_test_result(State(test.to_app_state::<AppState>()), Path("1".to_string()))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["test"]["id"], 1);
        assert_eq!(body["result"]["rank"], 1);
        assert_eq!(body["result"]["percentile"], 30.0);
        assert_eq!(body["result"]["score"], 10);
        assert_eq!(body["result"]["maxScore"], 15);

        let syllabus = body["syllabusResults"].as_array().unwrap();
        assert_eq!(syllabus.len(), 4);
        assert!(syllabus
            .iter()
            .all(|s| s["testResultId"] == body["result"]["id"]));
        assert_eq!(syllabus[0]["color"], "primary");
        assert_eq!(syllabus[2]["color"], "danger");

        Ok(())
    }

    /// Expect 404 when the demo user has no result for the test
    #[tokio::test]
    async fn not_found_for_test_without_result() -> Result<(), TestError> {
        let test = TestBuilder::new().with_demo_data().build()?;

        let result =
            get_test_result(State(test.to_app_state::<AppState>()), Path("999".to_string())).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "Test result not found");

        Ok(())
    }

    /// Expect 400 for a non numeric test ID
    #[tokio::test]
    async fn bad_request_for_invalid_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_demo_data().build()?;

        let result =
            get_test_result(State(test.to_app_state::<AppState>()), Path("html".to_string())).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod update_test_result {
    use super::*;

    /// Expect 200 with present fields changed and absent fields kept
    #[tokio::test]
    async fn updates_rank_and_percentile() -> Result<(), TestError> {
        let test = TestBuilder::new().with_demo_data().build()?;
        let state = test.to_app_state::<AppState>();

        let resp = update_test_result(
            State(state.clone()),
            Path("1".to_string()),
            Ok(Json(update(Some(2.0), Some(45.0), None))),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["rank"], 2);
        assert_eq!(body["percentile"], 45.0);
        assert_eq!(body["score"], 10);
        assert_eq!(body["maxScore"], 15);

        // Subsequent reads reflect the update
        let resp = get_test_result(State(state), Path("1".to_string()))
            .await
            .unwrap()
            .into_response();
        let body = body_json(resp).await;
        assert_eq!(body["result"]["rank"], 2);
        assert_eq!(body["result"]["percentile"], 45.0);

        Ok(())
    }

    /// Expect 400 naming score when it exceeds max score, and the stored score unchanged
    #[tokio::test]
    async fn rejects_score_above_max() -> Result<(), TestError> {
        let test = TestBuilder::new().with_demo_data().build()?;

        let result = update_test_result(
            State(test.to_app_state::<AppState>()),
            Path("1".to_string()),
            Ok(Json(update(None, None, Some(20.0)))),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["error"], "Invalid update data");
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["field"], "score");

        let stored = test.store.test_results().get_by_id(1).unwrap();
        assert_eq!(stored.score, 10);

        Ok(())
    }

    /// Expect 404 and no record created for a result that does not exist
    #[tokio::test]
    async fn not_found_for_nonexistent_result() -> Result<(), TestError> {
        let test = TestBuilder::new().with_demo_data().build()?;

        let result = update_test_result(
            State(test.to_app_state::<AppState>()),
            Path("999".to_string()),
            Ok(Json(update(Some(2.0), None, None))),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(test.store.test_results().len(), 1);

        Ok(())
    }

    /// Expect 400 for a non numeric result ID
    #[tokio::test]
    async fn bad_request_for_invalid_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_demo_data().build()?;

        let result = update_test_result(
            State(test.to_app_state::<AppState>()),
            Path("one".to_string()),
            Ok(Json(update(Some(2.0), None, None))),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"], "Invalid result ID");

        Ok(())
    }

    /// Expect 400 and the stored result unchanged for bodies that are not objects
    #[tokio::test]
    async fn rejects_non_object_body() -> Result<(), TestError> {
        let test = TestBuilder::new().with_demo_data().build()?;

        for body in [json!([5]), json!([2, 45, 12]), json!(null), json!(3)] {
            let result = update_test_result(
                State(test.to_app_state::<AppState>()),
                Path("1".to_string()),
                Ok(Json(body)),
            )
            .await;

            let resp = result.err().unwrap().into_response();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(resp).await["error"], "Invalid update data");
        }

        let stored = test.store.test_results().get_by_id(1).unwrap();
        assert_eq!(stored.rank, 1);
        assert_eq!(stored.percentile, 30.0);
        assert_eq!(stored.score, 10);

        Ok(())
    }
}

mod get_test_comparison {
    use super::*;

    /// Expect 200 with the standing against the average percentile
    #[tokio::test]
    async fn returns_comparison() -> Result<(), TestError> {
        let test = TestBuilder::new().with_demo_data().build()?;

        let resp =
            get_test_comparison(State(test.to_app_state::<AppState>()), Path("1".to_string()))
                .await
                .unwrap()
                .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["percentile"], 30.0);
        assert_eq!(body["averagePercentile"], 72.0);
        assert_eq!(body["standing"], "lower");

        Ok(())
    }

    /// Expect 404 when the demo user has no result for the test
    #[tokio::test]
    async fn not_found_for_test_without_result() -> Result<(), TestError> {
        let test = TestBuilder::new().with_demo_data().build()?;

        let result =
            get_test_comparison(State(test.to_app_state::<AppState>()), Path("2".to_string()))
                .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
