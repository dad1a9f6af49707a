use std::sync::Arc;

use askama::Template;
use portfolio_contact::ContactSubmission;
use time::{OffsetDateTime, format_description::well_known::Rfc2822};

use crate::{EmailConfig, MailError, MailTransport, OutgoingEmail};

/// Notification sent to the site owner for every contact form submission.
///
/// Every interpolated value is HTML-escaped by askama.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactHtmlTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub received_at: &'a str,
}

/// Turns a validated submission into one outbound email.
#[derive(Clone)]
pub struct ContactMailer {
    transport: Arc<dyn MailTransport>,
    from: String,
    to: String,
    subject_prefix: String,
}

impl ContactMailer {
    pub fn new(transport: Arc<dyn MailTransport>, config: &EmailConfig) -> Self {
        Self {
            transport,
            from: format!("\"{}\" <{}>", config.from_name, config.from_address),
            to: config.contact_address.to_owned(),
            subject_prefix: config.subject_prefix.to_owned(),
        }
    }

    pub fn compose(
        &self,
        submission: &ContactSubmission,
        received_at: OffsetDateTime,
    ) -> Result<OutgoingEmail, MailError> {
        let received_at = received_at.format(&Rfc2822)?;

        let html = ContactHtmlTemplate {
            name: &submission.name,
            email: &submission.email,
            subject: &submission.subject,
            message: &submission.message,
            received_at: &received_at,
        }
        .render()?;

        Ok(OutgoingEmail {
            from: self.from.to_owned(),
            to: self.to.to_owned(),
            reply_to: Some(submission.email.to_owned()),
            subject: format!("{}: {}", self.subject_prefix, submission.subject),
            html,
            plain: submission.message.to_owned(),
        })
    }

    #[tracing::instrument(skip_all, fields(from = %submission.email))]
    pub async fn deliver(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        let email = self.compose(submission, OffsetDateTime::now_utc())?;

        self.transport.send(email).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use time::macros::datetime;

    use super::*;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<OutgoingEmail>>,
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    fn mailer(transport: Arc<RecordingTransport>) -> ContactMailer {
        let config = EmailConfig {
            from_address: "me@example.com".to_string(),
            from_name: "Portfolio".to_string(),
            contact_address: "inbox@example.com".to_string(),
            ..Default::default()
        };

        ContactMailer::new(transport, &config)
    }

    #[test]
    fn test_compose_builds_subject_and_bodies() {
        let mailer = mailer(Arc::default());
        let submission = ContactSubmission::new("Ann", "ann@example.com", "Hi", "Hello there");

        let email = mailer
            .compose(&submission, datetime!(2025-06-01 09:30:00 UTC))
            .unwrap();

        assert_eq!(email.subject, "Portfolio Contact Form: Hi");
        assert_eq!(email.plain, "Hello there");
        assert_eq!(email.from, "\"Portfolio\" <me@example.com>");
        assert_eq!(email.to, "inbox@example.com");
        assert_eq!(email.reply_to.as_deref(), Some("ann@example.com"));
        assert!(email.html.contains("Ann"));
        assert!(email.html.contains("ann@example.com"));
        assert!(email.html.contains("Hello there"));
        assert!(email.html.contains("Sun, 01 Jun 2025 09:30:00 +0000"));
    }

    #[test]
    fn test_compose_escapes_user_input_in_html() {
        let mailer = mailer(Arc::default());
        let submission = ContactSubmission::new(
            "<b>Ann</b>",
            "ann@example.com",
            "<script>alert(1)</script>",
            "<img src=x onerror=alert(1)>",
        );

        let email = mailer
            .compose(&submission, datetime!(2025-06-01 09:30:00 UTC))
            .unwrap();

        assert!(!email.html.contains("<b>Ann</b>"));
        assert!(!email.html.contains("<script>"));
        assert!(!email.html.contains("<img"));
        assert!(email.html.contains("&lt;b&gt;Ann"));
        assert!(email.html.contains("&lt;script&gt;"));
        // plain text is sent as written
        assert_eq!(email.plain, "<img src=x onerror=alert(1)>");
    }

    #[tokio::test]
    async fn test_deliver_sends_exactly_once() {
        let transport = Arc::new(RecordingTransport::default());
        let mailer = mailer(transport.clone());
        let submission = ContactSubmission::new("Ann", "ann@example.com", "Hi", "Hello there");

        mailer.deliver(&submission).await.unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Portfolio Contact Form: Hi");
    }
}
