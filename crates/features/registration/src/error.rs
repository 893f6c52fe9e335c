use crate::schema::ValidationError;
use std::borrow::Cow;

/// Errors raised while validating or forwarding a registration.
#[recruit_derive::recruit_error]
pub enum RegistrationError {
    /// One or more fields broke their constraints.
    #[error("Registration invalid{}: {} field error(s)", format_context(.context), error_count(.errors))]
    Validation { errors: Vec<ValidationError>, context: Option<Cow<'static, str>> },
    /// The request body was not a JSON object of the expected shape.
    #[error("Malformed registration body{}: {source}", format_context(.context))]
    MalformedBody { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// The upstream backend could not be reached or did not answer in time.
    #[error("Registration backend unavailable{}: {source}", format_context(.context))]
    Unavailable { source: reqwest::Error, context: Option<Cow<'static, str>> },
    /// The upstream backend answered with a non-success status.
    #[error("Registration backend rejected the request with status {status}{}", format_context(.context))]
    Upstream { status: u16, message: Option<String>, context: Option<Cow<'static, str>> },
    #[cfg(feature = "server")]
    #[error("Registration state error{}: {source}", format_context(.context))]
    State {
        source: recruit_kernel::server::ApiStateError,
        context: Option<Cow<'static, str>>,
    },
    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

const fn error_count(errors: &[ValidationError]) -> usize {
    errors.len()
}
