use std::time::{Duration, Instant};

use strum::{AsRefStr, Display};

pub const AUTO_DISMISS: Duration = Duration::from_secs(5);
/// Length of the exit animation; the toast stays on screen for this long
/// after it starts hiding.
pub const EXIT_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Loading,
    Success,
    Error,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::Loading => "Loading...",
            NotificationKind::Success => "Success!",
            NotificationKind::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationState {
    pub kind: NotificationKind,
    pub text: String,
    pub visible: bool,
}

/// The single notification slot of the page.
///
/// `idle -> loading -> success | error -> idle`. Loading stays until it is
/// replaced. Success and error start hiding after [`AUTO_DISMISS`] or when
/// dismissed, and disappear once [`EXIT_GRACE`] has elapsed.
#[derive(Debug, Clone)]
pub struct Toast {
    kind: NotificationKind,
    text: String,
    visible: bool,
    shown_at: Option<Instant>,
    hiding_since: Option<Instant>,
    auto_dismiss: Duration,
    exit_grace: Duration,
}

impl Default for Toast {
    fn default() -> Self {
        Self::with_timings(AUTO_DISMISS, EXIT_GRACE)
    }
}

impl Toast {
    pub fn with_timings(auto_dismiss: Duration, exit_grace: Duration) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: String::new(),
            visible: false,
            shown_at: None,
            hiding_since: None,
            auto_dismiss,
            exit_grace,
        }
    }

    /// Replaces whatever is currently shown and restarts the timers.
    pub fn show(&mut self, kind: NotificationKind, text: impl Into<String>, now: Instant) {
        self.kind = kind;
        self.text = text.into();
        self.visible = true;
        self.shown_at = Some(now);
        self.hiding_since = None;
    }

    /// Starts the exit animation. Returns `false` when there is nothing the
    /// user is allowed to close.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if !self.visible || self.kind == NotificationKind::Loading {
            return false;
        }

        if self.hiding_since.is_none() {
            self.hiding_since = Some(now);
        }

        true
    }

    pub fn tick(&mut self, now: Instant) {
        if !self.visible || self.kind == NotificationKind::Loading {
            return;
        }

        if self.hiding_since.is_none() {
            if let Some(shown_at) = self.shown_at {
                if now.saturating_duration_since(shown_at) >= self.auto_dismiss {
                    self.hiding_since = Some(shown_at + self.auto_dismiss);
                }
            }
        }

        if let Some(hiding_since) = self.hiding_since {
            if now.saturating_duration_since(hiding_since) >= self.exit_grace {
                self.visible = false;
                self.hiding_since = None;
            }
        }
    }

    pub fn is_hiding(&self) -> bool {
        self.hiding_since.is_some()
    }

    pub fn state(&self) -> NotificationState {
        NotificationState {
            kind: self.kind,
            text: self.text.to_owned(),
            visible: self.visible,
        }
    }
}
