use anyhow::Result;
use portfolio_client::{HttpContactApi, NotificationKind, SubmissionController, SubmitOutcome};

pub struct ContactArgs {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Fills the contact form of the site at `url` and submits it once.
pub async fn submit(url: &str, args: ContactArgs) -> Result<()> {
    let controller = SubmissionController::new(HttpContactApi::new(url));

    controller.on_field_change("name", args.name).await?;
    controller.on_field_change("email", args.email).await?;
    controller.on_field_change("subject", args.subject).await?;
    controller.on_field_change("message", args.message).await?;

    let outcome = controller.submit().await;
    let notification = controller.notification().await;

    println!("{}: {}", notification.kind.title(), notification.text);

    match (outcome, notification.kind) {
        (SubmitOutcome::Sent, NotificationKind::Success) => Ok(()),
        _ => anyhow::bail!("contact form was not sent"),
    }
}
