//! Wire shapes of `POST /api/register`.
//!
//! Every response carries `success`. Failures add either a flat `message` or a list of
//! per-field `errors`; successes add `message` and the backend's `data`.

use crate::schema::ValidationError;
use recruit_derive::api_model;
use recruit_domain::constants::BODY_FIELD;
use recruit_domain::registration::{Field, RegistrationDraft};
use serde_json::{Map, Value};

/// Message of a successful registration.
pub const SUCCESS_MESSAGE: &str = "Registration successful";
/// Fallback when the backend rejects without explaining why.
pub const GENERIC_FAILURE: &str = "Registration failed. Please try again.";
/// Shown when the backend is unreachable.
pub const UNAVAILABLE_MESSAGE: &str =
    "Registration service is temporarily unavailable. Please try again later.";
pub const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// The request body. Every field is optional so that absent ones can be reported
/// individually; unknown fields are ignored.
///
/// The proxy reads bodies field by field with [`submitted_text`] rather than through
/// this type, so a wrong-typed value is reported against its own field.
#[api_model(deny_unknown_fields = false)]
#[derive(Default, Clone, PartialEq, Eq)]
pub struct IncomingRegistration {
    pub full_name: Option<String>,
    pub roll_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    pub motivation: Option<String>,
}

impl IncomingRegistration {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => self.full_name.as_deref(),
            Field::RollNumber => self.roll_number.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Department => self.department.as_deref(),
            Field::Year => self.year.as_deref(),
            Field::Motivation => self.motivation.as_deref(),
        }
    }
}

/// The string submitted for `field` in a request object.
///
/// Absent and `null` values are `Ok(None)`.
///
/// # Errors
/// A value of any other JSON type is rejected with [`ValidationError::not_text`].
pub fn submitted_text(
    object: &Map<String, Value>,
    field: Field,
) -> Result<Option<&str>, ValidationError> {
    match object.get(field.wire_name()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(ValidationError::not_text(field)),
    }
}

impl From<&RegistrationDraft> for IncomingRegistration {
    fn from(draft: &RegistrationDraft) -> Self {
        Self {
            full_name: Some(draft.full_name.clone()),
            roll_number: Some(draft.roll_number.clone()),
            email: Some(draft.email.clone()),
            phone: Some(draft.phone.clone()),
            department: Some(draft.department.clone()),
            year: Some(draft.year.clone()),
            motivation: Some(draft.motivation.clone()),
        }
    }
}

/// One entry of a validation failure's `errors` list.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct FieldErrorBody {
    /// camelCase field name, or `body` when the request could not be parsed.
    pub field: String,
    pub message: String,
}

impl FieldErrorBody {
    /// The single error reported for an unparseable request body.
    #[must_use]
    pub fn body(message: impl Into<String>) -> Self {
        Self { field: BODY_FIELD.to_owned(), message: message.into() }
    }
}

impl From<&ValidationError> for FieldErrorBody {
    fn from(err: &ValidationError) -> Self {
        Self { field: err.field.wire_name().to_owned(), message: err.message.clone().into_owned() }
    }
}

/// `200 OK` body.
#[api_model]
#[derive(Clone)]
pub struct RegisterSuccess {
    pub success: bool,
    pub message: String,
    /// Whatever the backend returned: its JSON, its raw text, or `null`.
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub data: Value,
}

impl RegisterSuccess {
    #[must_use]
    pub fn new(data: Value) -> Self {
        Self { success: true, message: SUCCESS_MESSAGE.to_owned(), data }
    }
}

/// `400 Bad Request` body.
#[api_model]
#[derive(Clone)]
pub struct RegisterInvalid {
    pub success: bool,
    pub errors: Vec<FieldErrorBody>,
}

impl RegisterInvalid {
    #[must_use]
    pub const fn new(errors: Vec<FieldErrorBody>) -> Self {
        Self { success: false, errors }
    }
}

/// Body of every other failure.
#[api_model]
#[derive(Clone)]
pub struct RegisterFailure {
    pub success: bool,
    pub message: String,
}

impl RegisterFailure {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// Lenient reading of any response of the endpoint, used by callers.
#[api_model(deny_unknown_fields = false)]
#[derive(Default, Clone)]
pub struct RegisterReply {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub data: Option<Value>,
    pub errors: Option<Vec<FieldErrorBody>>,
}

impl RegisterReply {
    /// Best human-readable failure reason carried by the reply.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or_else(|| self.errors.as_ref()?.first().map(|e| e.message.as_str()))
    }
}
