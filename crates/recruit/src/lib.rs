//! Facade crate for the recruitment portal.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and holds no business logic.
//!
//! ## Usage
//! - Add `recruit` with the desired feature flags (`server`/`client`).
//! - Call `recruit::init` (server) to register feature slices.

pub use recruit_domain as domain;
use recruit_domain::config::ApiConfig;
pub use recruit_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use recruit_kernel::server::router::system_router;
        pub use recruit_registration::server::router as registration_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use recruit_registration as registration;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "client")]
        "client",
        "registration",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Registration (join form + proxy)
    slices.push(features::registration::init(config)?);

    Ok(slices)
}
