use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, Router, middleware, response::IntoResponse, routing::post};

use crate::model::ResourceType;
use crate::model::entity::User;
use crate::web::dto::users::{UserMappingResponse, UsersQuery};
use crate::web::error::ErrorResponse;
use crate::web::{AppState, WebError, WebResult, middlewares};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", post(users_query_handler))
        .layer(middleware::from_fn(middlewares::require_token_fn))
        .with_state(state)
}

// TODO: validate against a production dump; unknown users are currently
// skipped rather than reported.
#[utoipa::path(
    post,
    path = "/api/v1/users/",
    description = "Map the given user IDs to their external-system identifiers",
    request_body = UsersQuery,
    responses(
        (status = 200, description = "One mapping per known user, in input order", body = Vec<UserMappingResponse>),
        (status = 400, description = "Request body does not match the declared shape", body = ErrorResponse),
        (status = 401, description = "Missing or invalid service token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("bearer" = [])
    ),
    tag = "users"
)]
pub async fn users_query_handler(
    State(state): State<AppState>,
    payload: Result<Json<UsersQuery>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let Json(query) = payload.map_err(WebError::schema_violation)?;
    let mm = state.pool();

    let mut out: Vec<UserMappingResponse> = Vec::new();
    for user_id in &query.userids {
        let user = User::find_by_id(mm, *user_id)
            .await
            .map_err(|e| WebError::resource_fetch_error(ResourceType::User, e))?;
        if let Some(user) = user {
            out.push(UserMappingResponse::from(user));
        }
    }

    Ok((StatusCode::OK, Json(out)))
}
