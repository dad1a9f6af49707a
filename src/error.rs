use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_contact::{MailResponse, SERVER_ERROR_MESSAGE, ValidationError};
use portfolio_notification::MailError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Mail delivery error: {0}")]
    Delivery(#[from] MailError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                MailResponse::failed(err.to_string()),
            ),
            AppError::MalformedBody(e) => {
                tracing::error!("Contact form error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MailResponse::failed(SERVER_ERROR_MESSAGE),
                )
            }
            AppError::Delivery(e) => {
                tracing::error!("Contact form error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MailResponse::failed(SERVER_ERROR_MESSAGE),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}
