use crate::contract::{
    FieldErrorBody, GENERIC_FAILURE, INTERNAL_MESSAGE, RegisterFailure, RegisterInvalid,
    UNAVAILABLE_MESSAGE,
};
use crate::error::RegistrationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

const MALFORMED_MESSAGE: &str = "Request body must be a JSON object";

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { errors, .. } => {
                tracing::debug!(count = errors.len(), "Registration failed validation");
                let errors = errors.iter().map(FieldErrorBody::from).collect();
                (StatusCode::BAD_REQUEST, Json(RegisterInvalid::new(errors))).into_response()
            },
            Self::MalformedBody { source, .. } => {
                tracing::debug!(error = %source, "Malformed registration body");
                let errors = vec![FieldErrorBody::body(MALFORMED_MESSAGE)];
                (StatusCode::BAD_REQUEST, Json(RegisterInvalid::new(errors))).into_response()
            },
            Self::Unavailable { source, context } => {
                tracing::error!(error = %source, context = ?context, "Registration backend unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, Json(RegisterFailure::new(UNAVAILABLE_MESSAGE)))
                    .into_response()
            },
            Self::Upstream { status, message, .. } => {
                let status = StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                let message = message.unwrap_or_else(|| GENERIC_FAILURE.to_owned());
                (status, Json(RegisterFailure::new(message))).into_response()
            },
            err @ (Self::State { .. } | Self::Internal { .. }) => {
                tracing::error!(error = %err, "Registration request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(RegisterFailure::new(INTERNAL_MESSAGE)))
                    .into_response()
            },
        }
    }
}
