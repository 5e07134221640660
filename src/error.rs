use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Errors a handler can return. `IntoResponse` turns them into the HTTP reply.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested todo does not exist. Rendered as 404 with no body.
    #[error("todo not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Store(err) => {
                // details stay in the log
                tracing::error!(error = ?err, "storage failure");
                let error_response = json!({
                    "status": "error",
                    "message": "Something bad happened while talking to the database",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
            }
        }
    }
}
