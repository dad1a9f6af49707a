#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use http_body_util::BodyExt;
use portfolio::{AppState, Config, router};
use portfolio_notification::{ContactMailer, MailError, MailTransport, OutgoingEmail};

#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

pub struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::Rejected(
            "535 5.7.8 Username and Password not accepted".to_string(),
        ))
    }
}

pub fn test_config() -> Config {
    let mut config = Config::load(None).unwrap();
    config.email.from_address = "portfolio@example.com".to_string();
    config.email.contact_address = "owner@example.com".to_string();
    config.email.from_name = "Portfolio".to_string();
    config.email.subject_prefix = "Portfolio Contact Form".to_string();
    config
}

pub fn create_app(transport: Arc<dyn MailTransport>) -> Router {
    let config = test_config();
    let mailer = ContactMailer::new(transport, &config.email);

    router(AppState { config, mailer })
}

pub fn mail_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/mail")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
