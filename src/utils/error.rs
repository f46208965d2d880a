use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Clients get the generic code/message shape; detail goes to the log.
        let (status, message) = match &self {
            ApiError::Validation { .. } => {
                tracing::warn!("{self}");
                (StatusCode::BAD_REQUEST, "400: validation failed".to_string())
            }
            ApiError::NotFound { entity } => {
                (StatusCode::NOT_FOUND, format!("404: {entity} not found"))
            }
            ApiError::Database(_) | ApiError::Config { .. } => {
                tracing::error!("{self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "500: internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
