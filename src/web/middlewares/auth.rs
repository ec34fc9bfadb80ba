use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{Config, web::error::WebError};

/// Generic caller check: every report endpoint requires the shared service
/// token. Per-user identity and permissions stay with the host platform.
pub async fn require_token_fn(req: Request, next: Next) -> Result<Response, WebError> {
    let expected = Config::get_or_init(false).await.app().api_token();

    let supplied = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match supplied {
        None => Err(WebError::auth_token_missing()),
        Some(token) if token == expected => Ok(next.run(req).await),
        Some(_) => Err(WebError::auth_token_invalid()),
    }
}
