//! Email delivery over SMTP using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::{authentication::Credentials, response::Response},
};
use serde::Deserialize;

use crate::{MailError, MailTransport, OutgoingEmail};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            from_name: default_from_name(),
            contact_address: default_contact_address(),
            subject_prefix: default_subject_prefix(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@portfolio.localhost".to_string()
}

fn default_from_name() -> String {
    "Portfolio".to_string()
}

fn default_contact_address() -> String {
    "contact@portfolio.localhost".to_string()
}

fn default_subject_prefix() -> String {
    "Portfolio Contact Form".to_string()
}

/// SMTP transport built once from configuration and shared by every request
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
}

impl EmailService {
    pub fn new(config: &EmailConfig) -> Result<Self, MailError> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            // STARTTLS, the usual setup on port 587
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

#[async_trait]
impl MailTransport for EmailService {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        tracing::info!(to = %email.to, subject = %email.subject, "Sending email");

        let mut builder = Message::builder()
            .from(email.from.parse()?)
            .to(email.to.parse()?)
            .subject(email.subject);

        if let Some(reply_to) = email.reply_to.as_deref() {
            match reply_to.parse::<Mailbox>() {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(err) => tracing::warn!(
                    error = %err,
                    reply_to,
                    "Reply-to address not accepted by mailer, sending without it"
                ),
            }
        }

        let message = builder.multipart(MultiPart::alternative_plain_html(email.plain, email.html))?;

        let mailer = self.mailer.clone();
        let response = tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        accepted(&response)?;
        tracing::info!(code = %response.code(), "Email accepted by SMTP server");

        Ok(())
    }
}

fn accepted(response: &Response) -> Result<(), MailError> {
    if response.is_positive() {
        return Ok(());
    }

    let text = response.message().collect::<Vec<_>>().join(" ");

    Err(MailError::Rejected(format!("{} {}", response.code(), text)))
}
