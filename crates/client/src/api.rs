use async_trait::async_trait;
use portfolio_contact::ContactSubmission;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unreadable reply from mail endpoint: {0}")]
    InvalidReply(#[from] serde_json::Error),
}

/// What came back from the mail endpoint, whatever the status code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiReply {
    pub ok: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ApiReply {
    pub fn sent(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Deserialize)]
struct ReplyBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<ApiReply, ApiError>;
}

/// Posts submissions as JSON to `<base_url>/api/mail`.
#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/mail", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn send(&self, submission: &ContactSubmission) -> Result<ApiReply, ApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let ok = response.status().is_success();
        tracing::debug!(status = %response.status(), "Mail endpoint replied");

        let bytes = response.bytes().await?;
        let body: ReplyBody = serde_json::from_slice(&bytes)?;

        Ok(ApiReply {
            ok,
            message: body.message,
            error: body.error,
        })
    }
}
