use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub struct BearerAuthModifier;

impl Modify for BearerAuthModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(schema) = openapi.components.as_mut() {
            schema.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::routes::courses::courses_query_handler,
        crate::web::routes::quizzes::quizzes_query_handler,
        crate::web::routes::questions::questions_query_handler,
        crate::web::routes::attempts::attempts_query_handler,
        crate::web::routes::users::users_query_handler,
    ),
    modifiers(&BearerAuthModifier),
)]
pub struct ApiDoc;
