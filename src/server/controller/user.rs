use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Get the current user
///
/// There is no login; the current user is always the configured demo user.
#[utoipa::path(
    get,
    path = "/api/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user without password", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.store)
        .get_user(state.demo_user_id)
        .ok_or(NotFoundError::User(state.demo_user_id))?;

    Ok((StatusCode::OK, Json(user)))
}
