use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A requested record, or a record it references, does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("User ID {0} not found")]
    User(i32),
    #[error("Skill test ID {0} not found")]
    SkillTest(i32),
    #[error("Test result ID {0} not found")]
    TestResult(i32),
    #[error("No test result for user ID {user_id} and skill test ID {test_id}")]
    TestResultForTest { user_id: i32, test_id: i32 },
}

impl NotFoundError {
    /// Generic message shown to API consumers.
    fn public_message(&self) -> &'static str {
        match self {
            Self::User(_) => "User not found",
            Self::SkillTest(_) => "Test not found",
            Self::TestResult(_) | Self::TestResultForTest { .. } => "Test result not found",
        }
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.public_message().to_string(),
            }),
        )
            .into_response()
    }
}
