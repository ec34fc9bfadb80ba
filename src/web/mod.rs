mod error;
pub use error::{WebError, WebResult};

pub mod middlewares;

pub mod schema;

mod state;
pub use state::AppState;

pub mod dto;

pub mod routes;

pub mod doc;
