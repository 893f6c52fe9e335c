//! # Registration
//!
//! The join-form slice. Both halves evaluate the same constraint table from
//! [`recruit_domain::rules`]:
//!
//! * **client** drives the multi-step [`client::JoinForm`] state machine and submits the
//!   finished draft through a [`client::RegistrationGateway`];
//! * **server** exposes `POST /api/register`, re-validates the body, reshapes it and
//!   forwards it to the upstream registration backend.
//!
//! Nothing is persisted here; the upstream backend is the authority of record.

#[cfg(feature = "client")]
pub mod client;
pub mod contract;
mod error;
pub mod schema;
#[cfg(feature = "server")]
pub mod server;

pub use crate::error::{RegistrationError, RegistrationErrorExt};
#[cfg(feature = "server")]
use crate::server::upstream::UpstreamClient;
use recruit_kernel::domain::config::ApiConfig;
use recruit_kernel::domain::registry::InitializedSlice;

/// Per-process registration state shared by the request handlers.
#[recruit_derive::recruit_slice]
pub struct RegistrationDesk {
    #[cfg(feature = "server")]
    pub upstream: UpstreamClient,
}

/// Builds the registration slice from the loaded config.
///
/// # Errors
/// Returns [`RegistrationError::Unavailable`] if the upstream HTTP client cannot be built
/// (e.g. the TLS backend fails to initialize).
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, RegistrationError> {
    #[cfg(feature = "server")]
    let upstream = UpstreamClient::from_config(&config.upstream, &config.registration)
        .context("Failed to build upstream client")?;

    #[cfg(not(feature = "server"))]
    let _ = config;

    tracing::info!("Registration slice initialized");

    Ok(InitializedSlice::new(RegistrationDesk::new(RegistrationDeskInner {
        #[cfg(feature = "server")]
        upstream,
    })))
}
