use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

pub type ResultAPI = std::result::Result<Json<Value>, crate::error::ErrorBackend>;
pub type Result<T> = std::result::Result<T, crate::error::ErrorBackend>;

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error(transparent)]
    Core(#[from] sb_core::error::ErrorCore),

    #[error(transparent)]
    Inference(#[from] sb_inference::error::Error),

    #[error("{0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> axum::response::Response {
        // Bad input and failed inference alike are reported as 500.
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        error!("ErrorBackend occurred: {}", self);
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
