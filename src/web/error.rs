use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::{
    error::log_error,
    model::{DatabaseError, ResourceType},
};

pub type WebResult<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("RequestSchemaViolation: {rejection}")]
    RequestSchemaViolation { rejection: JsonRejection },
}

#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("AuthenticationTokenMissing")]
    AuthenticationTokenMissing,

    #[error("AuthenticationTokenInvalid")]
    AuthenticationTokenInvalid,
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("ResourceFetchError: {resource_type:?}. Error: {error}")]
    ResourceFetchError {
        resource_type: ResourceType,
        error: DatabaseError,
    },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::RequestSchemaViolation { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::RequestSchemaViolation { .. } => {
                String::from("Request error, body does not match the declared parameter shape.")
            }
        }
    }
}

impl AuthenticationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthenticationTokenMissing => StatusCode::UNAUTHORIZED,
            Self::AuthenticationTokenInvalid => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::AuthenticationTokenMissing => String::from("Authentication required."),
            Self::AuthenticationTokenInvalid => {
                String::from("Authentication error, service token not recognised.")
            }
        }
    }
}

impl ResourceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ResourceFetchError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ResourceFetchError { .. } => {
                String::from("Resource error, unable to fetch resource.")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("RequestError - {0}")]
    RequestError(#[from] RequestError),
    #[error("AuthenticationError - {0}")]
    AuthenticationError(#[from] AuthenticationError),
    #[error("ResourceError - {0}")]
    ResourceError(#[from] ResourceError),
}

impl WebError {
    pub fn schema_violation(rejection: JsonRejection) -> Self {
        Self::RequestError(RequestError::RequestSchemaViolation { rejection })
    }

    pub fn auth_token_missing() -> Self {
        Self::AuthenticationError(AuthenticationError::AuthenticationTokenMissing)
    }

    pub fn auth_token_invalid() -> Self {
        Self::AuthenticationError(AuthenticationError::AuthenticationTokenInvalid)
    }

    pub fn resource_fetch_error(r#type: ResourceType, error: DatabaseError) -> Self {
        Self::ResourceError(ResourceError::ResourceFetchError {
            resource_type: r#type,
            error,
        })
    }

    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            Self::RequestError(e) => e.status_code(),
            Self::AuthenticationError(e) => e.status_code(),
            Self::ResourceError(e) => e.status_code(),
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::RequestError(e) => e.client_display(),
            Self::AuthenticationError(e) => e.client_display(),
            Self::ResourceError(e) => e.client_display(),
        }
    }
}

#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message for the client
    pub message: String,
    /// HTTP status code (stringified)
    pub status_code: String,
    /// Optional debug details (only in debug mode)
    pub details: Option<String>,
}

impl IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        log_error(&self);

        let status_code = self.status_code();
        let display = self.client_display();

        let body = ErrorResponse {
            message: display,
            status_code: status_code.as_str().to_string(),
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        };

        (status_code, Json(body)).into_response()
    }
}
