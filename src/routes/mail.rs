use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use portfolio_contact::{ContactPayload, ContactSubmission, MailResponse, SENT_MESSAGE};

use crate::{error::AppError, routes::AppState};

/// POST /api/mail
///
/// The body is read as JSON whatever the content type. Each valid request
/// sends exactly one email.
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: ContactPayload = serde_json::from_slice(&body)?;
    let submission = ContactSubmission::parse(payload)?;

    app_state.mailer.deliver(&submission).await?;

    tracing::info!(from = %submission.email, "Contact message sent");

    Ok((StatusCode::OK, Json(MailResponse::sent(SENT_MESSAGE))))
}
