use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, Router, middleware, response::IntoResponse, routing::post};

use crate::model::ResourceType;
use crate::model::entity::{Attempt, AttemptAnswerRow};
use crate::web::dto::attempts::{AttemptQuestionResponse, AttemptResponse, AttemptsQuery};
use crate::web::error::ErrorResponse;
use crate::web::{AppState, WebError, WebResult, middlewares};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", post(attempts_query_handler))
        .layer(middleware::from_fn(middlewares::require_token_fn))
        .with_state(state)
}

// TODO: validate the answer extraction against a production dump; the
// summary shape is settled but qtype-specific answer records may differ.
#[utoipa::path(
    post,
    path = "/api/v1/attempts/",
    description = "List the attempts made against the given quizzes, with per-question results",
    request_body = AttemptsQuery,
    responses(
        (status = 200, description = "Attempts per quiz, in storage order", body = Vec<AttemptResponse>),
        (status = 400, description = "Request body does not match the declared shape", body = ErrorResponse),
        (status = 401, description = "Missing or invalid service token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("bearer" = [])
    ),
    tag = "attempts"
)]
pub async fn attempts_query_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttemptsQuery>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let Json(query) = payload.map_err(WebError::schema_violation)?;
    let mm = state.pool();

    let mut out: Vec<AttemptResponse> = Vec::new();
    for quiz_id in &query.quizids {
        let attempts = Attempt::all_by_quiz(mm, *quiz_id)
            .await
            .map_err(|e| WebError::resource_fetch_error(ResourceType::Attempt, e))?;

        let attempt_ids: Vec<i64> = attempts.iter().map(|a| a.id()).collect();
        let answers = AttemptAnswerRow::all_by_attempts(mm, &attempt_ids)
            .await
            .map_err(|e| WebError::resource_fetch_error(ResourceType::Attempt, e))?;

        for attempt in attempts {
            let questions: Vec<AttemptQuestionResponse> = answers
                .iter()
                .filter(|row| row.attempt_id == attempt.id())
                .map(AttemptQuestionResponse::from)
                .collect();
            out.push(AttemptResponse::from_parts(attempt, questions));
        }
    }

    Ok((StatusCode::OK, Json(out)))
}
