use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, Router, middleware, response::IntoResponse, routing::post};

use crate::model::ResourceType;
use crate::model::entity::Course;
use crate::web::dto::courses::{CourseResponse, CoursesQuery};
use crate::web::error::ErrorResponse;
use crate::web::{AppState, WebError, WebResult, middlewares};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", post(courses_query_handler))
        .layer(middleware::from_fn(middlewares::require_token_fn))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/courses/",
    description = "List the courses belonging to the given course categories",
    request_body = CoursesQuery,
    responses(
        (status = 200, description = "Courses per category, in storage order", body = Vec<CourseResponse>),
        (status = 400, description = "Request body does not match the declared shape", body = ErrorResponse),
        (status = 401, description = "Missing or invalid service token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("bearer" = [])
    ),
    tag = "courses"
)]
pub async fn courses_query_handler(
    State(state): State<AppState>,
    payload: Result<Json<CoursesQuery>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let Json(query) = payload.map_err(WebError::schema_violation)?;

    let mut out: Vec<CourseResponse> = Vec::new();
    for category_id in &query.categoryids {
        let courses = Course::all_by_category(state.pool(), *category_id)
            .await
            .map_err(|e| WebError::resource_fetch_error(ResourceType::Course, e))?;
        out.extend(courses.into_iter().map(CourseResponse::from));
    }

    Ok((StatusCode::OK, Json(out)))
}
