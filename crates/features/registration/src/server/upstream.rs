use crate::error::{RegistrationError, RegistrationErrorExt};
use recruit_domain::config::{RegistrationDefaults, UpstreamConfig};
use recruit_domain::registration::{Department, Registration, Year};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// The payload the registration backend expects.
///
/// Field names differ from the form's; fields the form never asks for are filled from
/// [`RegistrationDefaults`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamRegistration<'a> {
    pub name: &'a str,
    pub roll_no: &'a str,
    pub email: &'a str,
    pub mobile: &'a str,
    pub department: Department,
    pub year_of_study: Year,
    pub why_join: &'a str,
    pub interests: &'a [String],
    pub expectations: &'a str,
    pub referral_source: &'a str,
}

impl<'a> UpstreamRegistration<'a> {
    #[must_use]
    pub fn new(registration: &'a Registration, defaults: &'a RegistrationDefaults) -> Self {
        Self {
            name: &registration.full_name,
            roll_no: &registration.roll_number,
            email: &registration.email,
            mobile: &registration.phone,
            department: registration.department,
            year_of_study: registration.year,
            why_join: &registration.motivation,
            interests: &defaults.interests,
            expectations: &defaults.expectations,
            referral_source: &defaults.referral_source,
        }
    }
}

/// HTTP client for the registration backend. Each call is a single attempt.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
    defaults: RegistrationDefaults,
}

impl UpstreamClient {
    /// # Errors
    /// Fails if the HTTP client cannot be constructed.
    pub fn from_config(
        upstream: &UpstreamConfig,
        defaults: &RegistrationDefaults,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = upstream.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self { http: builder.build()?, url: upstream.register_url(), defaults: defaults.clone() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends the registration and returns the backend's reply body.
    ///
    /// The body is parsed as JSON when possible, kept as a string otherwise, and is
    /// `null` when empty.
    ///
    /// # Errors
    /// * [`RegistrationError::Unavailable`] when the backend cannot be reached, times out
    ///   or drops the connection.
    /// * [`RegistrationError::Upstream`] for any non-2xx status, carrying the backend's
    ///   `message` (or `error`) text if it sent one.
    pub async fn forward(&self, registration: &Registration) -> Result<Value, RegistrationError> {
        let payload = UpstreamRegistration::new(registration, &self.defaults);

        let response = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .context("Registration backend unreachable")?;

        let status = response.status();
        if !status.is_success() {
            // A rejection whose body cannot be read is still a rejection.
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Registration backend rejected request");
            return Err(RegistrationError::Upstream {
                status: status.as_u16(),
                message: backend_message(&body),
                context: None,
            });
        }

        let body = response.text().await.context("Failed to read registration backend reply")?;
        Ok(reply_data(body))
    }
}

fn backend_message(body: &str) -> Option<String> {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return None;
    };
    ["message", "error"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .filter(|text| !text.trim().is_empty())
        .map(str::to_owned)
}

fn reply_data(body: String) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}
