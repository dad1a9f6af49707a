use std::{
    str::FromStr,
    sync::Arc,
    time::{Duration, Instant},
};

use portfolio_contact::SENT_MESSAGE;
use tokio::sync::Mutex;

use crate::{
    ApiReply, ContactApi, ContactForm, Field, NotificationKind, NotificationState, Toast,
};

/// Delay between accepting a submit and issuing the request.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

pub const SENDING_TEXT: &str = "Sending your message...";
pub const FAILED_TEXT: &str = "Failed to send message. Please try again.";
pub const NETWORK_ERROR_TEXT: &str = "Network error. Please check your connection and try again.";
pub const CANCELLED_TEXT: &str = "Message was not sent. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected,
    NetworkFailed,
    /// Another submission was already in flight; nothing was sent.
    Ignored,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown field `{0}`")]
    Unknown(String),

    #[error("form is locked while a submission is in flight")]
    Locked,
}

struct State {
    form: ContactForm,
    phase: Phase,
    toast: Toast,
}

impl State {
    fn abandon(&mut self, now: Instant) {
        self.phase = Phase::Idle;
        self.toast.show(NotificationKind::Error, CANCELLED_TEXT, now);
    }
}

/// Releases the gate if a submit cycle is dropped before it completes.
struct CycleGuard {
    state: Arc<Mutex<State>>,
    armed: bool,
}

impl CycleGuard {
    fn new(state: Arc<Mutex<State>>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for CycleGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        tracing::warn!("Submission dropped before completion, releasing the form");

        match self.state.try_lock() {
            Ok(mut state) => state.abandon(Instant::now()),
            Err(_) => match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    let state = self.state.clone();
                    handle.spawn(async move {
                        state.lock().await.abandon(Instant::now());
                    });
                }
                Err(err) => tracing::error!(error = %err, "No runtime to release the form"),
            },
        }
    }
}

/// Drives the contact form.
///
/// Clones share the same state, so every event handler of the page can hold
/// one. At most one request is in flight at any time: a submit arriving while
/// the phase is [`Phase::Submitting`] returns [`SubmitOutcome::Ignored`].
pub struct SubmissionController<A> {
    api: Arc<A>,
    state: Arc<Mutex<State>>,
    window: Duration,
}

impl<A> Clone for SubmissionController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            window: self.window,
        }
    }
}

impl<A: ContactApi> SubmissionController<A> {
    pub fn new(api: A) -> Self {
        Self::with_toast(api, Toast::default())
    }

    pub fn with_toast(api: A, toast: Toast) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(Mutex::new(State {
                form: ContactForm::default(),
                phase: Phase::Idle,
                toast,
            })),
            window: DEBOUNCE_WINDOW,
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Updates one field by its input name.
    pub async fn on_field_change(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        let field = Field::from_str(name).map_err(|_| FieldError::Unknown(name.to_owned()))?;

        self.set_field(field, value).await
    }

    pub async fn set_field(&self, field: Field, value: impl Into<String>) -> Result<(), FieldError> {
        let mut state = self.state.lock().await;
        if state.phase == Phase::Submitting {
            return Err(FieldError::Locked);
        }

        state.form.set(field, value);

        Ok(())
    }

    pub async fn form(&self) -> ContactForm {
        self.state.lock().await.form.clone()
    }

    pub async fn phase(&self) -> Phase {
        self.state.lock().await.phase
    }

    pub async fn is_submitting(&self) -> bool {
        self.phase().await == Phase::Submitting
    }

    pub async fn notification(&self) -> NotificationState {
        self.state.lock().await.toast.state()
    }

    pub async fn tick(&self, now: Instant) {
        self.state.lock().await.toast.tick(now);
    }

    pub async fn dismiss(&self, now: Instant) -> bool {
        self.state.lock().await.toast.dismiss(now)
    }

    /// Sends the current form, at most once per in-flight cycle.
    ///
    /// Dropping the returned future mid-cycle reopens the gate and replaces the
    /// loading toast with an error.
    pub async fn submit(&self) -> SubmitOutcome {
        let submission = {
            let mut state = self.state.lock().await;
            if state.phase == Phase::Submitting {
                tracing::debug!("Submission already in flight, ignoring submit");
                return SubmitOutcome::Ignored;
            }

            state.phase = Phase::Submitting;
            state
                .toast
                .show(NotificationKind::Loading, SENDING_TEXT, Instant::now());

            state.form.to_submission()
        };
        let guard = CycleGuard::new(self.state.clone());

        tokio::time::sleep(self.window).await;

        let reply = self.api.send(&submission).await;

        let mut state = self.state.lock().await;
        let now = Instant::now();

        let outcome = match reply {
            Ok(ApiReply {
                ok: true, message, ..
            }) => {
                let text = message.unwrap_or_else(|| SENT_MESSAGE.to_owned());
                state.toast.show(NotificationKind::Success, text, now);
                state.form.clear();
                SubmitOutcome::Sent
            }
            Ok(ApiReply { error, .. }) => {
                let text = error.unwrap_or_else(|| FAILED_TEXT.to_owned());
                state.toast.show(NotificationKind::Error, text, now);
                SubmitOutcome::Rejected
            }
            Err(err) => {
                tracing::error!(error = %err, "Contact form error");
                state
                    .toast
                    .show(NotificationKind::Error, NETWORK_ERROR_TEXT, now);
                SubmitOutcome::NetworkFailed
            }
        };

        state.phase = Phase::Idle;
        guard.disarm();

        outcome
    }
}
