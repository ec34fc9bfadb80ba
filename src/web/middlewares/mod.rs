mod auth;
pub use auth::require_token_fn;
