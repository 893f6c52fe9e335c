use crate::contract::{GENERIC_FAILURE, IncomingRegistration, RegisterReply};
use recruit_domain::constants::REGISTER_ROUTE;
use recruit_domain::registration::RegistrationDraft;
use serde_json::Value;
use std::borrow::Cow;
use std::future::Future;

/// Shown to the user when the request never got an answer.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

#[recruit_derive::recruit_error]
pub enum GatewayError {
    /// The endpoint answered but refused the registration.
    #[error("Registration rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The request could not be delivered or its answer could not be read.
    #[error("Registration transport failed{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
}

impl GatewayError {
    /// The message the form displays for this failure.
    #[must_use]
    pub fn user_message(&self) -> Cow<'_, str> {
        match self {
            Self::Rejected { message, .. } => Cow::Borrowed(message),
            Self::Transport { .. } => Cow::Borrowed(NETWORK_ERROR_MESSAGE),
        }
    }
}

/// A successful answer from the registration endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Acknowledgement {
    pub message: String,
    pub data: Option<Value>,
}

/// Where a completed draft is sent.
pub trait RegistrationGateway: Send + Sync {
    /// Submits the draft once. Implementations must not retry on their own.
    fn register(
        &self,
        draft: &RegistrationDraft,
    ) -> impl Future<Output = Result<Acknowledgement, GatewayError>> + Send;
}

/// Posts drafts to the proxy's `/api/register` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self { http, endpoint: endpoint.into() }
    }

    /// Targets the proxy route on the server at `base_url`.
    pub fn from_base_url(base_url: &str) -> Self {
        Self::new(format!("{}{REGISTER_ROUTE}", base_url.trim_end_matches('/')))
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RegistrationGateway for HttpGateway {
    async fn register(&self, draft: &RegistrationDraft) -> Result<Acknowledgement, GatewayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&IncomingRegistration::from(draft))
            .send()
            .await
            .context("Failed to reach registration endpoint")?;

        let status = response.status();
        let text = response.text().await.context("Failed to read registration reply")?;
        let reply: RegisterReply = serde_json::from_str(&text).unwrap_or_default();

        if status.is_success() && reply.success {
            return Ok(Acknowledgement {
                message: reply.message.unwrap_or_else(|| crate::contract::SUCCESS_MESSAGE.to_owned()),
                data: reply.data,
            });
        }

        tracing::debug!(status = status.as_u16(), "Registration endpoint refused the draft");
        Err(GatewayError::Rejected {
            message: reply.failure_message().unwrap_or(GENERIC_FAILURE).to_owned().into(),
            context: None,
        })
    }
}
