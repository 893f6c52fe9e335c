use crate::RegistrationDesk;
use crate::contract::{
    IncomingRegistration, RegisterFailure, RegisterInvalid, RegisterSuccess, submitted_text,
};
use crate::error::{RegistrationError, RegistrationErrorExt};
use crate::schema::validate_submitted;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use recruit_derive::api_handler;
use recruit_domain::constants::REGISTRATION_TAG;
use recruit_kernel::server::ApiState;
use serde_json::{Map, Value};

/// Validates a registration and forwards it to the backend.
///
/// Invalid submissions never reach the backend. Nothing is retried or deduplicated:
/// two identical submissions are forwarded twice.
#[api_handler(
    post,
    path = "/api/register",
    request_body = IncomingRegistration,
    responses(
        (status = OK, description = "Registration accepted by the backend", body = RegisterSuccess),
        (status = BAD_REQUEST, description = "Missing, invalid or malformed fields", body = RegisterInvalid),
        (status = SERVICE_UNAVAILABLE, description = "Registration backend unreachable", body = RegisterFailure),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected failure", body = RegisterFailure),
    ),
    tag = REGISTRATION_TAG,
)]
pub(super) async fn register_handler(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<RegisterSuccess>, RegistrationError> {
    let object: Map<String, Value> =
        serde_json::from_slice(&body).context("Registration body is not a JSON object")?;

    let registration = validate_submitted(|field| submitted_text(&object, field))
        .map_err(|errors| RegistrationError::Validation { errors, context: None })?;

    let desk = state.try_get_slice::<RegistrationDesk>()?;
    let data = desk.upstream.forward(&registration).await?;

    tracing::info!(department = %registration.department, "Registration forwarded");
    Ok(Json(RegisterSuccess::new(data)))
}
