use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, Router, middleware, response::IntoResponse, routing::post};

use crate::model::ResourceType;
use crate::model::entity::{Quiz, QuizSlotRow};
use crate::web::dto::quizzes::{QuizQuestionResponse, QuizResponse, QuizzesQuery};
use crate::web::error::ErrorResponse;
use crate::web::{AppState, WebError, WebResult, middlewares};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", post(quizzes_query_handler))
        .layer(middleware::from_fn(middlewares::require_token_fn))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/quizzes/",
    description = "List the quizzes of the given courses, with per-question mark assignments",
    request_body = QuizzesQuery,
    responses(
        (status = 200, description = "Quizzes per course, in storage order", body = Vec<QuizResponse>),
        (status = 400, description = "Request body does not match the declared shape", body = ErrorResponse),
        (status = 401, description = "Missing or invalid service token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("bearer" = [])
    ),
    tag = "quizzes"
)]
pub async fn quizzes_query_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuizzesQuery>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let Json(query) = payload.map_err(WebError::schema_violation)?;
    let mm = state.pool();

    let mut out: Vec<QuizResponse> = Vec::new();
    for course_id in &query.courseids {
        let quizzes = Quiz::all_by_course(mm, *course_id)
            .await
            .map_err(|e| WebError::resource_fetch_error(ResourceType::Quiz, e))?;

        let quiz_ids: Vec<i64> = quizzes.iter().map(|q| q.id()).collect();
        let slots = QuizSlotRow::all_by_quizzes(mm, &quiz_ids)
            .await
            .map_err(|e| WebError::resource_fetch_error(ResourceType::Question, e))?;

        for quiz in quizzes {
            let questions: Vec<QuizQuestionResponse> = slots
                .iter()
                .filter(|s| s.quiz_id == quiz.id())
                .map(QuizQuestionResponse::from)
                .collect();
            out.push(QuizResponse::from_parts(quiz, questions));
        }
    }

    Ok((StatusCode::OK, Json(out)))
}
