//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here together with their utoipa specifications,
//! which are collected into one OpenAPI document served by Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/me` - Current (demo) user without password
/// - `GET /api/skill-tests` - All skill tests
/// - `GET /api/skill-tests/{id}` - One skill test
/// - `GET /api/test-results/{id}` - Demo user's result detail for skill test `id`
/// - `PUT /api/test-results/{id}` - Partial update of test result `id`
/// - `GET /api/test-results/{id}/comparison` - Demo user's standing for skill test `id`
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { store, demo_user_id: 1 });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Skillboard", description = "Skill test results dashboard API"), tags(
        (name = controller::user::USER_TAG, description = "Current user"),
        (name = controller::skill_test::SKILL_TEST_TAG, description = "Skill tests"),
        (name = controller::test_result::TEST_RESULT_TAG, description = "Test results and their updates"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_me))
        .routes(routes!(controller::skill_test::list_skill_tests))
        .routes(routes!(controller::skill_test::get_skill_test))
        .routes(routes!(
            controller::test_result::get_test_result,
            controller::test_result::update_test_result
        ))
        .routes(routes!(controller::test_result::get_test_comparison))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
