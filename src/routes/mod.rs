use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use portfolio_notification::ContactMailer;

use crate::template::{NotFoundTemplate, Template};

mod health;
mod index;
mod mail;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mailer: ContactMailer,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        axum::http::StatusCode::NOT_FOUND,
        NotFoundTemplate {
            layout: template.layout(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/api/mail", post(mail::action))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
