use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::error;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            AppError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            AppError::Validation(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            AppError::Io(err) => {
                error!("IO error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
        };
        (
            status,
            Json(serde_json::json!({ "error": error_message })),
        )
            .into_response()
    }
}
