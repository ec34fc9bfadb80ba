use std::collections::HashMap;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, Router, middleware, response::IntoResponse, routing::post};

use crate::model::entity::{CourseModuleRow, Question, QuestionRevisionRow, QuizSlotRow};
use crate::model::{DatabaseError, ResourceType, shaping};
use crate::render::RenderContext;
use crate::web::dto::questions::{QuestionResponse, QuestionsQuery};
use crate::web::error::ErrorResponse;
use crate::web::{AppState, WebError, WebResult, middlewares};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", post(questions_query_handler))
        .layer(middleware::from_fn(middlewares::require_token_fn))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/questions/",
    description = "List the distinct questions attached to the given quizzes, \
                   with cross-quiz references and revision history",
    request_body = QuestionsQuery,
    responses(
        (status = 200, description = "Distinct questions in first-seen order", body = Vec<QuestionResponse>),
        (status = 400, description = "Request body does not match the declared shape", body = ErrorResponse),
        (status = 401, description = "Missing or invalid service token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("bearer" = [])
    ),
    tag = "questions"
)]
pub async fn questions_query_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuestionsQuery>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let Json(query) = payload.map_err(WebError::schema_violation)?;
    let mm = state.pool();

    let input_slots = QuizSlotRow::all_by_quizzes(mm, &query.quizids)
        .await
        .map_err(|e| WebError::resource_fetch_error(ResourceType::Quiz, e))?;
    let question_order = shaping::distinct_questions_in_first_seen_order(&query.quizids, &input_slots);

    let questions = Question::all_by_ids(mm, &question_order)
        .await
        .map_err(|e| WebError::resource_fetch_error(ResourceType::Question, e))?;
    let question_map: HashMap<i64, Question> =
        questions.into_iter().map(|q| (q.id(), q)).collect();

    // References across ALL quizzes, not just the queried ones.
    let reference_slots = QuizSlotRow::all_by_questions(mm, &question_order)
        .await
        .map_err(|e| WebError::resource_fetch_error(ResourceType::Question, e))?;

    let bank_entry_ids: Vec<i64> = question_map.values().map(|q| q.bank_entry_id()).collect();
    let revisions = QuestionRevisionRow::all_by_bank_entries(mm, &bank_entry_ids)
        .await
        .map_err(|e| WebError::resource_fetch_error(ResourceType::Question, e))?;

    let referencing_quiz_ids: Vec<i64> = {
        let mut ids: Vec<i64> = reference_slots.iter().map(|s| s.quiz_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    };
    let course_modules = CourseModuleRow::all_by_quizzes(mm, &referencing_quiz_ids)
        .await
        .map_err(|e| WebError::resource_fetch_error(ResourceType::CourseModule, e))?;
    let module_by_quiz: HashMap<i64, i64> = course_modules
        .iter()
        .map(|cm| (cm.quiz_id, cm.id))
        .collect();

    let mut out: Vec<QuestionResponse> = Vec::with_capacity(question_order.len());
    for question_id in question_order {
        let Some(question) = question_map.get(&question_id) else {
            continue;
        };

        let quizzes = shaping::referencing_quizzes(question_id, &reference_slots);
        let Some(context_quiz_id) = quizzes.first().copied() else {
            continue;
        };
        let course_module_id = module_by_quiz.get(&context_quiz_id).copied().ok_or_else(|| {
            WebError::resource_fetch_error(
                ResourceType::CourseModule,
                DatabaseError::MissingCourseModule(context_quiz_id),
            )
        })?;

        let ctx = RenderContext::for_course_module(course_module_id);
        let revision_ids = shaping::revisions_of(question.bank_entry_id(), &revisions);
        out.push(QuestionResponse::render(
            question,
            state.renderer(),
            ctx,
            quizzes,
            revision_ids,
        ));
    }

    Ok((StatusCode::OK, Json(out)))
}
