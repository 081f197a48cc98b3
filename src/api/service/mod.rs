pub mod endpoints;
pub mod router;
pub mod types;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db;

#[derive(Clone)]
pub struct State {
    pub db: db::Database,
}

impl State {
    pub fn new(db: crate::db::Database) -> Self {
        Self { db }
    }
}

impl axum::extract::FromRef<State> for sqlx::SqlitePool {
    fn from_ref(input: &State) -> Self {
        input.db.pool.clone()
    }
}

/// Request-path failures. A date that fails the membership check is a 404
/// with the payload the route documents; everything that goes wrong talking
/// to the store is a 500 with a generic body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("dataset unavailable: {0}")]
    DataUnavailable(String),

    #[error("{0}")]
    DateNotFound(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(value: sqlx::Error) -> Self {
        ApiError::DataUnavailable(format!("db returned error: {value}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::DataUnavailable(message) => {
                // The cause is logged, not leaked to the client.
                log::error!("{message}");

                let body = types::ErrorResponse {
                    error: "dataset unavailable".to_string(),
                };

                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            ApiError::DateNotFound(message) => {
                let body = types::ErrorResponse { error: message };

                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
        }
    }
}
