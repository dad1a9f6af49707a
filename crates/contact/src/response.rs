use serde::{Deserialize, Serialize};

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const SERVER_ERROR_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Body returned by the mail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MailResponse {
    Sent { success: bool, message: String },
    Failed { error: String },
}

impl MailResponse {
    pub fn sent(message: impl Into<String>) -> Self {
        Self::Sent {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }
}
