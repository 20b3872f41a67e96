use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        test_result::{ComparisonDto, TestResultDetailDto, TestResultDto, UpdateTestResultDto},
    },
    server::{
        controller::util::parse_id::parse_id,
        error::Error,
        model::app::AppState,
        service::{query::QueryService, result::ResultService},
    },
};

pub static TEST_RESULT_TAG: &str = "test-result";

/// Get the demo user's result for a skill test
///
/// Returns the skill test, the user's result for it and the result's syllabus breakdown.
#[utoipa::path(
    get,
    path = "/api/test-results/{id}",
    tag = TEST_RESULT_TAG,
    params(("id" = String, Path, description = "Skill test ID")),
    responses(
        (status = 200, description = "Result with its test and syllabus breakdown", body = TestResultDetailDto),
        (status = 400, description = "Invalid test ID", body = ErrorDto),
        (status = 404, description = "Test result or test not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_test_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let test_id = parse_id(&id, "test")?;

    let detail = QueryService::new(&state.store).get_result_detail(state.demo_user_id, test_id)?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Update rank, percentile and/or score of a test result
///
/// Only the fields present in the body are changed. If any present field is out of bounds
/// nothing is changed and every offending field is reported.
#[utoipa::path(
    put,
    path = "/api/test-results/{id}",
    tag = TEST_RESULT_TAG,
    params(("id" = String, Path, description = "Test result ID")),
    request_body = UpdateTestResultDto,
    responses(
        (status = 200, description = "The updated result", body = TestResultDto),
        (status = 400, description = "Invalid result ID or update data", body = ValidationErrorDto),
        (status = 404, description = "Test result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_test_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let result_id = parse_id(&id, "result")?;
    let Json(body) = body.map_err(|rejection| Error::InvalidBody(rejection.body_text()))?;

    // Derived deserialization also accepts a positional array
    if !body.is_object() {
        return Err(Error::InvalidBody(format!("expected a JSON object, got {}", body)));
    }
    let update: UpdateTestResultDto =
        serde_json::from_value(body).map_err(|err| Error::InvalidBody(err.to_string()))?;

    tracing::debug!(result_id = %result_id, update = ?update, "Update data received");

    let result = ResultService::new(&state.store).apply_update(result_id, update)?;

    Ok((StatusCode::OK, Json(result)))
}

/// Compare the demo user's percentile for a skill test against the average
#[utoipa::path(
    get,
    path = "/api/test-results/{id}/comparison",
    tag = TEST_RESULT_TAG,
    params(("id" = String, Path, description = "Skill test ID")),
    responses(
        (status = 200, description = "Percentile standing and score percentage", body = ComparisonDto),
        (status = 400, description = "Invalid test ID", body = ErrorDto),
        (status = 404, description = "Test result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_test_comparison(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let test_id = parse_id(&id, "test")?;

    let comparison = QueryService::new(&state.store).get_comparison(state.demo_user_id, test_id)?;

    Ok((StatusCode::OK, Json(comparison)))
}
