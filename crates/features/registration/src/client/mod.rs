//! The multi-step join form and its submission sequence.

mod form;
mod gateway;
mod submission;

pub use form::{Advance, CursorState, FormError, FormErrorExt, JoinForm};
pub use gateway::{
    Acknowledgement, GatewayError, GatewayErrorExt, HttpGateway, NETWORK_ERROR_MESSAGE,
    RegistrationGateway,
};
pub use submission::{LogScript, SubmissionOutcome, SubmissionState};
